//! Document repository port.

use async_trait::async_trait;

use crate::domain::document::Document;
use crate::domain::foundation::{ApplicantId, ApplicationId, DocumentId, DomainError};

/// Repository port for Document persistence.
///
/// Owner-scoped reads drive the gate rule: the gate evaluates the
/// applicant's entire document set, not a single application's slice.
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Save a new document.
    async fn save(&self, document: &Document) -> Result<(), DomainError>;

    /// Update an existing document.
    ///
    /// # Errors
    ///
    /// - `DocumentNotFound` if the document doesn't exist
    async fn update(&self, document: &Document) -> Result<(), DomainError>;

    /// Find a document by id. Returns `None` if not found.
    async fn find_by_id(&self, id: &DocumentId) -> Result<Option<Document>, DomainError>;

    /// All documents owned by an applicant.
    async fn find_by_applicant(
        &self,
        applicant_id: &ApplicantId,
    ) -> Result<Vec<Document>, DomainError>;

    /// All documents linked to an application.
    async fn find_by_application(
        &self,
        application_id: &ApplicationId,
    ) -> Result<Vec<Document>, DomainError>;

    /// Documents owned by an applicant with no application linkage yet.
    async fn find_unlinked_by_applicant(
        &self,
        applicant_id: &ApplicantId,
    ) -> Result<Vec<Document>, DomainError>;
}
