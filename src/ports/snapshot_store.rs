//! Snapshot store port - Interface for session persistence.
//!
//! One snapshot per conversation: the whole aggregate plus when it was
//! saved. Loading honors a retention window; a snapshot past the window
//! is purged rather than resumed, so a customer returning a day later
//! starts fresh instead of resuming a stale quote.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::conversation::Conversation;
use crate::domain::foundation::{ConversationId, DomainError, ErrorCode, Timestamp};

/// Port for saving and resuming conversation snapshots.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Saves the snapshot, replacing any earlier one for the same
    /// conversation.
    async fn save(&self, snapshot: &SessionSnapshot) -> Result<(), SnapshotError>;

    /// Loads the snapshot for a conversation, if one was saved.
    async fn load(&self, id: ConversationId) -> Result<Option<SessionSnapshot>, SnapshotError>;

    /// Deletes the snapshot for a conversation. Deleting a missing
    /// snapshot is not an error.
    async fn delete(&self, id: ConversationId) -> Result<(), SnapshotError>;
}

/// A saved conversation with its save time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// The whole aggregate: stage, record, transcript, history.
    pub conversation: Conversation,

    /// When the snapshot was taken.
    pub saved_at: Timestamp,
}

impl SessionSnapshot {
    /// Snapshots a conversation as of now.
    pub fn of(conversation: Conversation) -> Self {
        Self {
            conversation,
            saved_at: Timestamp::now(),
        }
    }

    /// Snapshots a conversation with an explicit save time.
    pub fn taken_at(conversation: Conversation, saved_at: Timestamp) -> Self {
        Self {
            conversation,
            saved_at,
        }
    }

    /// Whether the snapshot has outlived the retention window.
    pub fn is_expired(&self, retention_hours: i64) -> bool {
        self.saved_at
            .is_before(&Timestamp::now().minus_hours(retention_hours))
    }
}

/// Errors from snapshot persistence.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SnapshotError {
    /// The snapshot could not be encoded or decoded.
    #[error("snapshot serialization failed: {0}")]
    Serialization(String),

    /// The backing store failed.
    #[error("snapshot storage failed: {0}")]
    Storage(String),
}

impl From<SnapshotError> for DomainError {
    fn from(err: SnapshotError) -> Self {
        DomainError::new(ErrorCode::SnapshotStoreError, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn SnapshotStore) {}
    }

    #[test]
    fn a_fresh_snapshot_is_not_expired() {
        let snapshot = SessionSnapshot::of(Conversation::new(ConversationId::new()));
        assert!(!snapshot.is_expired(24));
    }

    #[test]
    fn an_old_snapshot_is_expired() {
        let snapshot = SessionSnapshot::taken_at(
            Conversation::new(ConversationId::new()),
            Timestamp::now().minus_hours(25),
        );
        assert!(snapshot.is_expired(24));
        assert!(!snapshot.is_expired(48));
    }

    #[test]
    fn errors_convert_to_domain_errors() {
        let err: DomainError = SnapshotError::Storage("disk full".into()).into();
        assert_eq!(err.code, ErrorCode::SnapshotStoreError);
    }
}
