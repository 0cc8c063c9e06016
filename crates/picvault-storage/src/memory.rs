//! In-memory storage backend for tests and fakes.

use crate::traits::{Storage, StorageError, StorageResult};
use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;

/// Stores objects in a map. Presigned URLs are only available when a base
/// URL is configured (tests point it at a local fixture server).
#[derive(Default)]
pub struct MemoryStorage {
    objects: RwLock<HashMap<String, (Bytes, String)>>,
    presign_base_url: Option<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Presigned URLs become `{base_url}/{key}`.
    pub fn with_presign_base_url(base_url: impl Into<String>) -> Self {
        MemoryStorage {
            objects: RwLock::new(HashMap::new()),
            presign_base_url: Some(base_url.into().trim_end_matches('/').to_string()),
        }
    }

    pub fn get(&self, key: &str) -> Option<(Bytes, String)> {
        self.objects
            .read()
            .expect("storage lock poisoned")
            .get(key)
            .cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.objects
            .read()
            .expect("storage lock poisoned")
            .contains_key(key)
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn presigned_get_url(&self, key: &str, _expires_in: Duration) -> StorageResult<String> {
        let base = self.presign_base_url.as_ref().ok_or_else(|| {
            StorageError::ConfigError("memory storage has no presign base URL".to_string())
        })?;
        Ok(format!("{}/{}", base, key))
    }

    async fn put(&self, key: &str, data: Bytes, content_type: &str) -> StorageResult<()> {
        self.objects
            .write()
            .map_err(|_| StorageError::UploadFailed("storage lock poisoned".to_string()))?
            .insert(key.to_string(), (data, content_type.to_string()));
        Ok(())
    }
}
