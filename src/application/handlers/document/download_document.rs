//! DownloadDocumentHandler - retrieves the bytes behind a document.

use std::sync::Arc;

use crate::domain::document::Document;
use crate::domain::foundation::{DocumentId, DomainError, ErrorCode};
use crate::ports::{BlobStorage, DocumentRepository};

/// Command to download a document's bytes.
#[derive(Debug, Clone)]
pub struct DownloadDocumentCommand {
    pub document_id: DocumentId,
}

/// The document metadata together with its bytes.
#[derive(Debug, Clone)]
pub struct DownloadDocumentResult {
    pub document: Document,
    pub bytes: Vec<u8>,
}

/// Handler for document downloads. Storage failures surface as failed
/// operations.
pub struct DownloadDocumentHandler {
    documents: Arc<dyn DocumentRepository>,
    storage: Arc<dyn BlobStorage>,
}

impl DownloadDocumentHandler {
    pub fn new(documents: Arc<dyn DocumentRepository>, storage: Arc<dyn BlobStorage>) -> Self {
        Self { documents, storage }
    }

    pub async fn handle(
        &self,
        cmd: DownloadDocumentCommand,
    ) -> Result<DownloadDocumentResult, DomainError> {
        let document = self
            .documents
            .find_by_id(&cmd.document_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(ErrorCode::DocumentNotFound, cmd.document_id.to_string())
            })?;

        let bytes = self.storage.retrieve(&document.blob).await?;

        Ok(DownloadDocumentResult { document, bytes })
    }
}
