//! In-memory document repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::document::Document;
use crate::domain::foundation::{ApplicantId, ApplicationId, DocumentId, DomainError, ErrorCode};
use crate::ports::DocumentRepository;

/// In-memory store for documents.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentRepository {
    documents: Arc<RwLock<HashMap<DocumentId, Document>>>,
}

impl InMemoryDocumentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents (for test assertions).
    pub async fn count(&self) -> usize {
        self.documents.read().await.len()
    }
}

#[async_trait]
impl DocumentRepository for InMemoryDocumentRepository {
    async fn save(&self, document: &Document) -> Result<(), DomainError> {
        let mut documents = self.documents.write().await;
        documents.insert(document.id, document.clone());
        Ok(())
    }

    async fn update(&self, document: &Document) -> Result<(), DomainError> {
        let mut documents = self.documents.write().await;
        if !documents.contains_key(&document.id) {
            return Err(DomainError::not_found(
                ErrorCode::DocumentNotFound,
                document.id.to_string(),
            ));
        }
        documents.insert(document.id, document.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &DocumentId) -> Result<Option<Document>, DomainError> {
        Ok(self.documents.read().await.get(id).cloned())
    }

    async fn find_by_applicant(
        &self,
        applicant_id: &ApplicantId,
    ) -> Result<Vec<Document>, DomainError> {
        let documents = self.documents.read().await;
        let mut owned: Vec<Document> = documents
            .values()
            .filter(|d| d.applicant_id == *applicant_id)
            .cloned()
            .collect();
        owned.sort_by_key(|d| d.uploaded_at);
        Ok(owned)
    }

    async fn find_by_application(
        &self,
        application_id: &ApplicationId,
    ) -> Result<Vec<Document>, DomainError> {
        let documents = self.documents.read().await;
        let mut linked: Vec<Document> = documents
            .values()
            .filter(|d| d.application_id == Some(*application_id))
            .cloned()
            .collect();
        linked.sort_by_key(|d| d.uploaded_at);
        Ok(linked)
    }

    async fn find_unlinked_by_applicant(
        &self,
        applicant_id: &ApplicantId,
    ) -> Result<Vec<Document>, DomainError> {
        let documents = self.documents.read().await;
        let mut unlinked: Vec<Document> = documents
            .values()
            .filter(|d| d.applicant_id == *applicant_id && d.is_unlinked())
            .cloned()
            .collect();
        unlinked.sort_by_key(|d| d.uploaded_at);
        Ok(unlinked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::BlobHandle;

    fn sample_document(applicant_id: ApplicantId, document_type: &str) -> Document {
        Document::record_upload(
            DocumentId::new(),
            applicant_id,
            document_type,
            "payslip.pdf",
            "application/pdf",
            2_048,
            BlobHandle::new("blob-1"),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn owner_scoped_queries_filter_by_applicant() {
        let repo = InMemoryDocumentRepository::new();
        let alice = ApplicantId::new();
        let bob = ApplicantId::new();

        repo.save(&sample_document(alice, "PAYSLIP")).await.unwrap();
        repo.save(&sample_document(alice, "ID_CARD")).await.unwrap();
        repo.save(&sample_document(bob, "PAYSLIP")).await.unwrap();

        let owned = repo.find_by_applicant(&alice).await.unwrap();
        assert_eq!(owned.len(), 2);
        assert!(owned.iter().all(|d| d.applicant_id == alice));
    }

    #[tokio::test]
    async fn linking_moves_document_out_of_unlinked_set() {
        let repo = InMemoryDocumentRepository::new();
        let applicant_id = ApplicantId::new();
        let application_id = ApplicationId::new();
        let mut document = sample_document(applicant_id, "PAYSLIP");

        repo.save(&document).await.unwrap();
        assert_eq!(
            repo.find_unlinked_by_applicant(&applicant_id)
                .await
                .unwrap()
                .len(),
            1
        );

        document.link_to_application(application_id).unwrap();
        repo.update(&document).await.unwrap();

        assert!(repo
            .find_unlinked_by_applicant(&applicant_id)
            .await
            .unwrap()
            .is_empty());
        assert_eq!(
            repo.find_by_application(&application_id).await.unwrap().len(),
            1
        );
    }

    #[tokio::test]
    async fn update_unknown_document_fails() {
        let repo = InMemoryDocumentRepository::new();
        let document = sample_document(ApplicantId::new(), "PAYSLIP");

        let err = repo.update(&document).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DocumentNotFound);
    }
}
