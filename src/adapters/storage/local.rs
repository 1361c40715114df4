//! Filesystem blob storage.
//!
//! Stores each blob as a uuid-named file under a base directory. Handles are
//! the bare file names; the base directory never leaks into a handle, so a
//! handle from one deployment cannot address a path outside another's root.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

use crate::domain::document::BlobHandle;
use crate::ports::{BlobStorage, StorageError};

/// File-based storage for document bytes.
#[derive(Debug, Clone)]
pub struct LocalBlobStorage {
    base_path: PathBuf,
}

impl LocalBlobStorage {
    /// Create a new file storage with a base directory.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn blob_path(&self, handle: &BlobHandle) -> Result<PathBuf, StorageError> {
        // Handles are uuid file names; anything with a path separator is not
        // one of ours.
        if handle.as_str().contains('/') || handle.as_str().contains('\\') {
            return Err(StorageError::NotFound(handle.as_str().to_string()));
        }
        Ok(self.base_path.join(handle.as_str()))
    }

    async fn ensure_base_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| StorageError::WriteFailed(e.to_string()))
    }
}

#[async_trait]
impl BlobStorage for LocalBlobStorage {
    async fn store(&self, bytes: &[u8]) -> Result<BlobHandle, StorageError> {
        self.ensure_base_dir().await?;

        let handle = BlobHandle::new(Uuid::new_v4().to_string());
        let path = self.blob_path(&handle)?;

        fs::write(&path, bytes)
            .await
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;

        Ok(handle)
    }

    async fn retrieve(&self, handle: &BlobHandle) -> Result<Vec<u8>, StorageError> {
        let path = self.blob_path(handle)?;

        if !path.exists() {
            return Err(StorageError::NotFound(handle.as_str().to_string()));
        }

        fs::read(&path)
            .await
            .map_err(|e| StorageError::ReadFailed(e.to_string()))
    }

    async fn delete(&self, handle: &BlobHandle) -> Result<(), StorageError> {
        let path = self.blob_path(handle)?;

        if path.exists() {
            fs::remove_file(&path)
                .await
                .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn store_then_retrieve_round_trips_on_disk() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalBlobStorage::new(temp_dir.path());

        let handle = storage.store(b"scanned payslip bytes").await.unwrap();
        let bytes = storage.retrieve(&handle).await.unwrap();

        assert_eq!(bytes, b"scanned payslip bytes");
        assert!(temp_dir.path().join(handle.as_str()).exists());
    }

    #[tokio::test]
    async fn store_creates_missing_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("uploads").join("docs");
        let storage = LocalBlobStorage::new(&nested);

        storage.store(b"bytes").await.unwrap();
        assert!(nested.exists());
    }

    #[tokio::test]
    async fn retrieve_unknown_handle_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalBlobStorage::new(temp_dir.path());

        let result = storage.retrieve(&BlobHandle::new("no-such-blob")).await;
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[tokio::test]
    async fn handle_with_path_separator_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalBlobStorage::new(temp_dir.path());

        let result = storage.retrieve(&BlobHandle::new("../etc/passwd")).await;
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalBlobStorage::new(temp_dir.path());

        let handle = storage.store(b"bytes").await.unwrap();
        storage.delete(&handle).await.unwrap();
        storage.delete(&handle).await.unwrap();

        assert!(!temp_dir.path().join(handle.as_str()).exists());
    }
}
