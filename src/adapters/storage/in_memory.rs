//! In-memory blob storage for tests and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::document::BlobHandle;
use crate::ports::{BlobStorage, StorageError};

/// Keeps document bytes in a map keyed by generated handle.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBlobStorage {
    blobs: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemoryBlobStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored blobs (for test assertions).
    pub async fn count(&self) -> usize {
        self.blobs.read().await.len()
    }
}

#[async_trait]
impl BlobStorage for InMemoryBlobStorage {
    async fn store(&self, bytes: &[u8]) -> Result<BlobHandle, StorageError> {
        let handle = Uuid::new_v4().to_string();
        let mut blobs = self.blobs.write().await;
        blobs.insert(handle.clone(), bytes.to_vec());
        Ok(BlobHandle::new(handle))
    }

    async fn retrieve(&self, handle: &BlobHandle) -> Result<Vec<u8>, StorageError> {
        self.blobs
            .read()
            .await
            .get(handle.as_str())
            .cloned()
            .ok_or_else(|| StorageError::NotFound(handle.as_str().to_string()))
    }

    async fn delete(&self, handle: &BlobHandle) -> Result<(), StorageError> {
        let mut blobs = self.blobs.write().await;
        blobs.remove(handle.as_str());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn store_then_retrieve_returns_same_bytes() {
        let storage = InMemoryBlobStorage::new();
        let handle = storage.store(b"%PDF-1.7 payload").await.unwrap();

        let bytes = storage.retrieve(&handle).await.unwrap();
        assert_eq!(bytes, b"%PDF-1.7 payload");
    }

    #[tokio::test]
    async fn retrieve_unknown_handle_is_not_found() {
        let storage = InMemoryBlobStorage::new();
        let result = storage.retrieve(&BlobHandle::new("missing")).await;
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_removes_blob() {
        let storage = InMemoryBlobStorage::new();
        let handle = storage.store(b"bytes").await.unwrap();

        storage.delete(&handle).await.unwrap();
        assert_eq!(storage.count().await, 0);
        assert!(matches!(
            storage.retrieve(&handle).await,
            Err(StorageError::NotFound(_))
        ));
    }
}
