//! Blob storage port - opaque byte storage for uploaded documents.
//!
//! The core only ever holds a `BlobHandle`; raw bytes live behind this port.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::document::BlobHandle;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors from the blob storage collaborator.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Blob not found: {0}")]
    NotFound(String),

    #[error("Blob write failed: {0}")]
    WriteFailed(String),

    #[error("Blob read failed: {0}")]
    ReadFailed(String),
}

impl From<StorageError> for DomainError {
    fn from(err: StorageError) -> Self {
        DomainError::new(ErrorCode::StorageFailed, err.to_string())
    }
}

/// Port for storing and retrieving document bytes.
///
/// Retrieval failures surface as failed operations, never silently
/// swallowed; retries belong to the implementation, not the core.
#[async_trait]
pub trait BlobStorage: Send + Sync {
    /// Stores bytes, returning an opaque handle.
    async fn store(&self, bytes: &[u8]) -> Result<BlobHandle, StorageError>;

    /// Retrieves the bytes behind a handle.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the handle is unknown.
    async fn retrieve(&self, handle: &BlobHandle) -> Result<Vec<u8>, StorageError>;

    /// Deletes the bytes behind a handle (housekeeping; the core never
    /// deletes documents, only blobs orphaned by failed uploads).
    async fn delete(&self, handle: &BlobHandle) -> Result<(), StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blob_storage_is_object_safe() {
        fn _accepts_dyn(_storage: &dyn BlobStorage) {}
    }

    #[test]
    fn storage_error_converts_to_domain_error() {
        let err: DomainError = StorageError::NotFound("blob-9".to_string()).into();
        assert_eq!(err.code, ErrorCode::StorageFailed);
    }
}
