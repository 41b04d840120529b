//! In-memory media store adapter.
//!
//! Keeps uploaded photos in a map and serves `memory://` URLs. Useful
//! for testing and development; it still enforces the size and type
//! limits a real store would.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::MediaId;
use crate::ports::{MediaError, MediaStore, MediaUpload, StoredMedia};

const DEFAULT_MAX_BYTES: usize = 10 * 1024 * 1024;

/// In-memory photo storage.
#[derive(Debug, Clone)]
pub struct InMemoryMediaStore {
    photos: Arc<RwLock<HashMap<MediaId, MediaUpload>>>,
    max_bytes: usize,
}

impl Default for InMemoryMediaStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryMediaStore {
    /// Creates an empty store with the default 10 MB size limit.
    pub fn new() -> Self {
        Self {
            photos: Arc::new(RwLock::new(HashMap::new())),
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }

    /// Overrides the per-file size limit.
    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Number of stored photos.
    pub async fn photo_count(&self) -> usize {
        self.photos.read().await.len()
    }

    /// Drops every stored photo.
    pub async fn clear(&self) {
        self.photos.write().await.clear();
    }
}

#[async_trait]
impl MediaStore for InMemoryMediaStore {
    async fn upload(&self, upload: MediaUpload) -> Result<StoredMedia, MediaError> {
        if upload.bytes.len() > self.max_bytes {
            return Err(MediaError::TooLarge {
                bytes: upload.bytes.len(),
                max_bytes: self.max_bytes,
            });
        }
        if !upload.content_type.starts_with("image/") {
            return Err(MediaError::UnsupportedType {
                content_type: upload.content_type,
            });
        }

        let id = MediaId::new();
        let url = format!("memory://photos/{}/{}", id, upload.file_name);
        self.photos.write().await.insert(id, upload);

        Ok(StoredMedia { id, url })
    }
}
