//! UploadDocumentHandler - records a supporting document for an applicant.

use std::sync::Arc;

use crate::domain::document::Document;
use crate::domain::foundation::{
    ApplicantId, DocumentId, DomainError, ErrorCode, ValidationError,
};
use crate::ports::{ApplicantRepository, BlobStorage, DocumentRepository};

/// Command to upload a supporting document.
#[derive(Debug, Clone)]
pub struct UploadDocumentCommand {
    pub applicant_id: ApplicantId,
    pub document_type: String,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Result of a successful upload.
#[derive(Debug, Clone)]
pub struct UploadDocumentResult {
    pub document: Document,
}

/// Handler for document uploads.
pub struct UploadDocumentHandler {
    applicants: Arc<dyn ApplicantRepository>,
    documents: Arc<dyn DocumentRepository>,
    storage: Arc<dyn BlobStorage>,
}

impl UploadDocumentHandler {
    pub fn new(
        applicants: Arc<dyn ApplicantRepository>,
        documents: Arc<dyn DocumentRepository>,
        storage: Arc<dyn BlobStorage>,
    ) -> Self {
        Self {
            applicants,
            documents,
            storage,
        }
    }

    pub async fn handle(
        &self,
        cmd: UploadDocumentCommand,
    ) -> Result<UploadDocumentResult, DomainError> {
        let applicant = self
            .applicants
            .find_by_id(&cmd.applicant_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(ErrorCode::ApplicantNotFound, cmd.applicant_id.to_string())
            })?;
        if !applicant.active {
            return Err(DomainError::new(
                ErrorCode::Forbidden,
                "Deactivated applicants cannot upload documents",
            ));
        }

        if cmd.bytes.is_empty() {
            return Err(ValidationError::invalid_format("file", "file is empty").into());
        }

        let blob = self.storage.store(&cmd.bytes).await?;

        let document = match Document::record_upload(
            DocumentId::new(),
            cmd.applicant_id,
            cmd.document_type,
            cmd.file_name,
            cmd.content_type,
            cmd.bytes.len() as u64,
            blob.clone(),
        ) {
            Ok(document) => document,
            Err(err) => {
                let _ = self.storage.delete(&blob).await;
                return Err(err.into());
            }
        };

        if let Err(err) = self.documents.save(&document).await {
            // Orphaned blob; the document record never landed.
            let _ = self.storage.delete(&blob).await;
            return Err(err);
        }

        Ok(UploadDocumentResult { document })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{
        InMemoryApplicantRepository, InMemoryBlobStorage, InMemoryDocumentRepository,
    };
    use crate::domain::applicant::Applicant;
    use crate::domain::document::DocumentStatus;

    struct Fixture {
        applicants: Arc<InMemoryApplicantRepository>,
        documents: Arc<InMemoryDocumentRepository>,
        storage: Arc<InMemoryBlobStorage>,
        handler: UploadDocumentHandler,
    }

    fn fixture() -> Fixture {
        let applicants = Arc::new(InMemoryApplicantRepository::new());
        let documents = Arc::new(InMemoryDocumentRepository::new());
        let storage = Arc::new(InMemoryBlobStorage::new());
        let handler = UploadDocumentHandler::new(
            applicants.clone(),
            documents.clone(),
            storage.clone(),
        );
        Fixture {
            applicants,
            documents,
            storage,
            handler,
        }
    }

    async fn registered_applicant(fixture: &Fixture) -> Applicant {
        let applicant = Applicant::register(ApplicantId::new(), "alice").unwrap();
        fixture.applicants.save(&applicant).await.unwrap();
        applicant
    }

    fn upload_cmd(applicant_id: ApplicantId, bytes: &[u8]) -> UploadDocumentCommand {
        UploadDocumentCommand {
            applicant_id,
            document_type: "payslip".to_string(),
            file_name: "payslip.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            bytes: bytes.to_vec(),
        }
    }

    #[tokio::test]
    async fn stores_bytes_and_persists_uploaded_document() {
        let fixture = fixture();
        let applicant = registered_applicant(&fixture).await;

        let result = fixture
            .handler
            .handle(upload_cmd(applicant.id, b"%PDF-1.7"))
            .await
            .unwrap();

        assert_eq!(result.document.status, DocumentStatus::Uploaded);
        assert!(result.document.is_unlinked());
        assert_eq!(result.document.size_bytes, 8);
        assert_eq!(fixture.documents.count().await, 1);

        let bytes = fixture.storage.retrieve(&result.document.blob).await.unwrap();
        assert_eq!(bytes, b"%PDF-1.7");
    }

    #[tokio::test]
    async fn rejects_empty_file_before_touching_storage() {
        let fixture = fixture();
        let applicant = registered_applicant(&fixture).await;

        let err = fixture
            .handler
            .handle(upload_cmd(applicant.id, b""))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(fixture.storage.count().await, 0);
    }

    #[tokio::test]
    async fn unknown_applicant_is_not_found() {
        let fixture = fixture();
        let err = fixture
            .handler
            .handle(upload_cmd(ApplicantId::new(), b"bytes"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ApplicantNotFound);
    }

    #[tokio::test]
    async fn deactivated_applicant_is_forbidden() {
        let fixture = fixture();
        let mut applicant = registered_applicant(&fixture).await;
        applicant.deactivate();
        fixture.applicants.update(&applicant).await.unwrap();

        let err = fixture
            .handler
            .handle(upload_cmd(applicant.id, b"bytes"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }

    #[tokio::test]
    async fn blank_document_type_is_rejected() {
        let fixture = fixture();
        let applicant = registered_applicant(&fixture).await;

        let mut cmd = upload_cmd(applicant.id, b"bytes");
        cmd.document_type = "  ".to_string();

        let err = fixture.handler.handle(cmd).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyField);
    }
}
