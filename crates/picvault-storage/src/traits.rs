//! Storage abstraction trait.

use async_trait::async_trait;
use bytes::Bytes;
use std::time::Duration;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Narrow interface to the image bucket.
///
/// Keys are the raw object keys (`{path}.{extension}`); no tenant scoping or
/// key rewriting happens here.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Issue a time-limited signed GET URL for one object. The URL grants
    /// temporary access without further authentication; the caller performs
    /// the actual fetch.
    async fn presigned_get_url(&self, key: &str, expires_in: Duration) -> StorageResult<String>;

    /// Store an object byte-for-byte under `key`.
    async fn put(&self, key: &str, data: Bytes, content_type: &str) -> StorageResult<()>;
}

impl From<StorageError> for picvault_core::AppError {
    fn from(err: StorageError) -> Self {
        picvault_core::AppError::Storage(err.to_string())
    }
}
