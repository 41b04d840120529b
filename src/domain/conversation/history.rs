//! Snapshot history backing the Go Back control.
//!
//! One snapshot is pushed per customer answer, capturing the state just
//! before the answer was applied. Going back restores the snapshot under
//! the cursor, so each press undoes exactly one answer. Entries ahead of
//! the cursor stay in the stack until a fresh answer is pushed from the
//! restored point.

use serde::{Deserialize, Serialize};

use super::record::Record;
use super::stage::Stage;

/// One restorable point in the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    stage: Stage,
    record: Record,
    /// Length of the message log when the snapshot was taken. Restoring
    /// truncates the log back to this length.
    message_count: usize,
}

impl Snapshot {
    pub fn new(stage: Stage, record: Record, message_count: usize) -> Self {
        Self {
            stage,
            record,
            message_count,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn message_count(&self) -> usize {
        self.message_count
    }

    pub fn into_parts(self) -> (Stage, Record, usize) {
        (self.stage, self.record, self.message_count)
    }
}

/// The snapshot stack plus a cursor at the next snapshot to restore.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationHistory {
    snapshots: Vec<Snapshot>,
    position: Option<usize>,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new snapshot, discarding any entries ahead of the cursor.
    pub fn push(&mut self, snapshot: Snapshot) {
        match self.position {
            Some(current) => self.snapshots.truncate(current + 1),
            None => self.snapshots.clear(),
        }
        self.snapshots.push(snapshot);
        self.position = Some(self.snapshots.len() - 1);
    }

    /// Whether an answer remains to be undone.
    pub fn can_go_back(&self) -> bool {
        self.position.is_some()
    }

    /// Returns a copy of the snapshot under the cursor and steps the
    /// cursor down one. The entry stays in the stack until the next push.
    pub fn go_back(&mut self) -> Option<Snapshot> {
        let current = self.position?;
        let snapshot = self.snapshots.get(current).cloned();
        self.position = current.checked_sub(1);
        snapshot
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.position = None;
    }
}
