//! Media store port - Interface for photo uploads.
//!
//! Customers can attach photos of special items or damage. The store
//! keeps the bytes and hands back a URL; the record only ever carries the
//! URL list and an uploaded flag.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, MediaId};

/// Port for storing uploaded photos.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Stores one photo and returns where it lives.
    async fn upload(&self, upload: MediaUpload) -> Result<StoredMedia, MediaError>;
}

/// One photo as received from the customer.
#[derive(Debug, Clone)]
pub struct MediaUpload {
    /// Original file name, for the office's benefit.
    pub file_name: String,

    /// MIME type as reported by the uploader.
    pub content_type: String,

    /// The photo bytes.
    pub bytes: Vec<u8>,
}

/// A stored photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredMedia {
    /// Store-assigned identifier.
    pub id: MediaId,

    /// Public URL recorded against the conversation.
    pub url: String,
}

/// Errors from photo storage.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MediaError {
    /// The file exceeds the store's size limit.
    #[error("file too large: {bytes} bytes exceeds {max_bytes} limit")]
    TooLarge {
        /// Actual size.
        bytes: usize,
        /// Maximum allowed.
        max_bytes: usize,
    },

    /// The store does not accept this content type.
    #[error("unsupported content type: {content_type}")]
    UnsupportedType {
        /// The rejected MIME type.
        content_type: String,
    },

    /// Network failure reaching the store.
    #[error("network error: {0}")]
    Network(String),

    /// The store answered with an error of its own.
    #[error("storage error: {0}")]
    Storage(String),
}

impl MediaError {
    /// Whether retrying the same upload could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, MediaError::Network(_))
    }
}

impl From<MediaError> for DomainError {
    fn from(err: MediaError) -> Self {
        DomainError::new(ErrorCode::MediaStoreError, err.to_string())
    }
}
