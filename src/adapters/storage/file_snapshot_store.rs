//! File-based snapshot store adapter.
//!
//! Stores one JSON file per conversation under a base directory, named
//! by the conversation id. Survives restarts; the application layer is
//! responsible for honoring the retention window on load.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::foundation::ConversationId;
use crate::ports::{SessionSnapshot, SnapshotError, SnapshotStore};

/// File-based storage for conversation snapshots.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    base_path: PathBuf,
}

impl FileSnapshotStore {
    /// Creates a store rooted at `base_path`. The directory is created
    /// on first save.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn snapshot_path(&self, id: ConversationId) -> PathBuf {
        self.base_path.join(format!("{id}.json"))
    }
}

#[async_trait]
impl SnapshotStore for FileSnapshotStore {
    async fn save(&self, snapshot: &SessionSnapshot) -> Result<(), SnapshotError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| SnapshotError::Storage(e.to_string()))?;

        let json = serde_json::to_vec_pretty(snapshot)
            .map_err(|e| SnapshotError::Serialization(e.to_string()))?;

        fs::write(self.snapshot_path(*snapshot.conversation.id()), json)
            .await
            .map_err(|e| SnapshotError::Storage(e.to_string()))?;

        Ok(())
    }

    async fn load(&self, id: ConversationId) -> Result<Option<SessionSnapshot>, SnapshotError> {
        let path = self.snapshot_path(id);
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read(&path)
            .await
            .map_err(|e| SnapshotError::Storage(e.to_string()))?;

        let snapshot = serde_json::from_slice(&json)
            .map_err(|e| SnapshotError::Serialization(e.to_string()))?;

        Ok(Some(snapshot))
    }

    async fn delete(&self, id: ConversationId) -> Result<(), SnapshotError> {
        let path = self.snapshot_path(id);
        if path.exists() {
            fs::remove_file(&path)
                .await
                .map_err(|e| SnapshotError::Storage(e.to_string()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::{respond, start, Conversation, CustomerInput};
    use tempfile::TempDir;

    fn answer(conv: &mut Conversation, content: &str) {
        let stage = conv.stage();
        respond(
            conv,
            stage,
            CustomerInput::Text {
                content: content.into(),
            },
        )
        .unwrap();
    }

    fn started_conversation() -> Conversation {
        let mut conv = Conversation::new(ConversationId::new());
        start(&mut conv).unwrap();
        answer(&mut conv, "Dana Whitfield");
        conv
    }

    #[tokio::test]
    async fn saves_and_loads_a_snapshot() {
        let dir = TempDir::new().unwrap();
        let store = FileSnapshotStore::new(dir.path());

        let saved = SessionSnapshot::of(started_conversation());
        let id = saved.conversation.id();
        store.save(&saved).await.unwrap();

        let loaded = store.load(*id).await.unwrap().unwrap();

        assert_eq!(loaded.conversation.id(), id);
        assert_eq!(loaded.conversation.stage(), saved.conversation.stage());
        assert_eq!(
            loaded.conversation.record().first_name,
            saved.conversation.record().first_name
        );
        assert_eq!(
            loaded.conversation.message_count(),
            saved.conversation.message_count()
        );
    }

    #[tokio::test]
    async fn loading_a_missing_snapshot_returns_none() {
        let dir = TempDir::new().unwrap();
        let store = FileSnapshotStore::new(dir.path());

        assert!(store.load(ConversationId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn saving_twice_replaces_the_file() {
        let dir = TempDir::new().unwrap();
        let store = FileSnapshotStore::new(dir.path());

        let mut conv = started_conversation();
        let id = *conv.id();
        store.save(&SessionSnapshot::of(conv.clone())).await.unwrap();

        answer(&mut conv, "dana@example.com");
        store.save(&SessionSnapshot::of(conv.clone())).await.unwrap();

        let loaded = store.load(id).await.unwrap().unwrap();
        assert_eq!(loaded.conversation.stage(), conv.stage());
    }

    #[tokio::test]
    async fn delete_removes_the_file_and_tolerates_missing_ones() {
        let dir = TempDir::new().unwrap();
        let store = FileSnapshotStore::new(dir.path());

        let saved = SessionSnapshot::of(started_conversation());
        let id = saved.conversation.id();
        store.save(&saved).await.unwrap();

        store.delete(*id).await.unwrap();
        assert!(store.load(*id).await.unwrap().is_none());

        store.delete(*id).await.unwrap();
    }

    #[tokio::test]
    async fn corrupt_files_surface_as_serialization_errors() {
        let dir = TempDir::new().unwrap();
        let store = FileSnapshotStore::new(dir.path());
        let id = ConversationId::new();

        std::fs::create_dir_all(dir.path()).unwrap();
        std::fs::write(dir.path().join(format!("{id}.json")), b"not json").unwrap();

        let err = store.load(id).await.unwrap_err();
        assert!(matches!(err, SnapshotError::Serialization(_)));
    }
}
