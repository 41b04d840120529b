//! In-memory snapshot store adapter.
//!
//! Holds one snapshot per conversation in a map. Useful for testing and
//! development; nothing survives a restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::ConversationId;
use crate::ports::{SessionSnapshot, SnapshotError, SnapshotStore};

/// In-memory storage for conversation snapshots.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotStore {
    snapshots: Arc<RwLock<HashMap<ConversationId, SessionSnapshot>>>,
}

impl InMemorySnapshotStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored snapshots.
    pub async fn snapshot_count(&self) -> usize {
        self.snapshots.read().await.len()
    }

    /// Drops every stored snapshot.
    pub async fn clear(&self) {
        self.snapshots.write().await.clear();
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn save(&self, snapshot: &SessionSnapshot) -> Result<(), SnapshotError> {
        let id = snapshot.conversation.id();
        self.snapshots.write().await.insert(*id, snapshot.clone());
        Ok(())
    }

    async fn load(&self, id: ConversationId) -> Result<Option<SessionSnapshot>, SnapshotError> {
        Ok(self.snapshots.read().await.get(&id).cloned())
    }

    async fn delete(&self, id: ConversationId) -> Result<(), SnapshotError> {
        self.snapshots.write().await.remove(&id);
        Ok(())
    }
}
