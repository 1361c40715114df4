//! ListDocumentsHandler - document listings for review screens.

use std::sync::Arc;

use crate::domain::document::Document;
use crate::domain::foundation::{ApplicantId, ApplicationId, DomainError};
use crate::ports::DocumentRepository;

/// Listing scope.
#[derive(Debug, Clone)]
pub enum ListDocumentsQuery {
    ByApplicant(ApplicantId),
    ByApplication(ApplicationId),
}

/// Handler for document listings.
pub struct ListDocumentsHandler {
    documents: Arc<dyn DocumentRepository>,
}

impl ListDocumentsHandler {
    pub fn new(documents: Arc<dyn DocumentRepository>) -> Self {
        Self { documents }
    }

    pub async fn handle(&self, query: ListDocumentsQuery) -> Result<Vec<Document>, DomainError> {
        match query {
            ListDocumentsQuery::ByApplicant(applicant_id) => {
                self.documents.find_by_applicant(&applicant_id).await
            }
            ListDocumentsQuery::ByApplication(application_id) => {
                self.documents.find_by_application(&application_id).await
            }
        }
    }
}
