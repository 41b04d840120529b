//! Conversation aggregate entity.
//!
//! A conversation owns the full state of one guided dialog: the current
//! stage, the answers collected so far, the message transcript, and the
//! snapshot history behind the Go Back control.
//!
//! # Aggregate Boundary
//!
//! Conversation is an aggregate root.
//! - Stage changes go through `advance_to` and obey the stage graph
//! - The record and transcript are mutated only through the aggregate
//! - Snapshots capture (stage, record, transcript length) as one unit

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ConversationId, DomainError, ErrorCode, StateMachine, Timestamp};

use super::history::{NavigationHistory, Snapshot};
use super::message::Message;
use super::record::Record;
use super::stage::Stage;

/// One guided dialog from greeting to hand-off.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique identifier for this conversation.
    id: ConversationId,

    /// Stage whose prompt the customer is currently answering.
    stage: Stage,

    /// Answers collected so far.
    record: Record,

    /// Transcript in display order.
    messages: Vec<Message>,

    /// Snapshot stack for Go Back.
    history: NavigationHistory,

    /// When the conversation was created.
    created_at: Timestamp,

    /// When the conversation was last updated.
    updated_at: Timestamp,
}

impl Conversation {
    /// Creates a fresh conversation at the greeting stage.
    pub fn new(id: ConversationId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            stage: Stage::Greeting,
            record: Record::new(),
            messages: Vec::new(),
            history: NavigationHistory::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitutes a conversation from persistence (no validation).
    pub fn reconstitute(
        id: ConversationId,
        stage: Stage,
        record: Record,
        messages: Vec<Message>,
        history: NavigationHistory,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            stage,
            record,
            messages,
            history,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &ConversationId {
        &self.id
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    pub(crate) fn record_mut(&mut self) -> &mut Record {
        &mut self.record
    }

    /// Returns the transcript in display order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Whether the dialog has reached one of its end stages. Menus at an
    /// end stage keep working; only stage transitions stop.
    pub fn is_ended(&self) -> bool {
        self.stage.is_terminal()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transcript
    // ─────────────────────────────────────────────────────────────────────────

    /// Appends a message to the transcript.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
        self.touch();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Stage changes
    // ─────────────────────────────────────────────────────────────────────────

    /// Moves to `target` if the stage graph allows it.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if `target` is not a successor of the
    ///   current stage
    pub fn advance_to(&mut self, target: Stage) -> Result<(), DomainError> {
        if !self.stage.can_transition_to(&target) {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Cannot move from {:?} to {:?}", self.stage, target),
            )
            .with_detail("from", format!("{:?}", self.stage))
            .with_detail("to", format!("{:?}", target)));
        }
        self.stage = target;
        self.touch();
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Captures the current (stage, record, transcript length).
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.stage, self.record.clone(), self.messages.len())
    }

    /// Pushes the current state onto the Go Back stack.
    pub fn record_snapshot(&mut self) {
        let snapshot = self.snapshot();
        self.history.push(snapshot);
    }

    /// Whether Go Back is available here.
    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back() && !self.stage.blocks_go_back()
    }

    /// Restores the previous snapshot: stage and record are replaced and
    /// the transcript is truncated to the snapshot's length.
    ///
    /// # Errors
    ///
    /// - `NavigationBlocked` if this stage forbids going back or there is
    ///   no earlier snapshot
    pub fn go_back(&mut self) -> Result<(), DomainError> {
        if self.stage.blocks_go_back() {
            return Err(DomainError::new(
                ErrorCode::NavigationBlocked,
                format!("Going back is not available at {:?}", self.stage),
            ));
        }
        let snapshot = self.history.go_back().ok_or_else(|| {
            DomainError::new(ErrorCode::NavigationBlocked, "Nothing to go back to")
        })?;
        let (stage, record, message_count) = snapshot.into_parts();
        self.stage = stage;
        self.record = record;
        self.messages.truncate(message_count);
        self.touch();
        Ok(())
    }

    /// Wipes everything back to a fresh greeting. The transcript and
    /// snapshot stack are cleared.
    pub fn restart(&mut self) {
        self.stage = Stage::Greeting;
        self.record = Record::new();
        self.messages.clear();
        self.history.clear();
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
