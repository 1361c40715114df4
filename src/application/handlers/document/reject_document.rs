//! RejectDocumentHandler - officer declines a document and re-opens document
//! scrutiny for the applicant.

use std::sync::Arc;
use tracing::info;

use crate::application::ApplicantLockRegistry;
use crate::domain::document::Document;
use crate::domain::foundation::{
    require_role, Actor, ActorRole, ApplicationId, DocumentId, DomainError, ErrorCode,
};
use crate::ports::{DocumentRepository, LoanApplicationRepository};

/// Command to reject an uploaded document.
#[derive(Debug, Clone)]
pub struct RejectDocumentCommand {
    pub document_id: DocumentId,
    pub actor: Actor,
}

/// Result of a rejection, including the applications whose verified flag
/// was cleared.
#[derive(Debug, Clone)]
pub struct RejectDocumentResult {
    pub document: Document,
    pub flag_cleared: Vec<ApplicationId>,
}

/// Handler for document rejection.
///
/// Rejection clears `documents_verified` on every application of the
/// applicant, whatever its status. Decided applications keep their decision;
/// only the flag clears.
pub struct RejectDocumentHandler {
    documents: Arc<dyn DocumentRepository>,
    applications: Arc<dyn LoanApplicationRepository>,
    locks: ApplicantLockRegistry,
}

impl RejectDocumentHandler {
    pub fn new(
        documents: Arc<dyn DocumentRepository>,
        applications: Arc<dyn LoanApplicationRepository>,
        locks: ApplicantLockRegistry,
    ) -> Self {
        Self {
            documents,
            applications,
            locks,
        }
    }

    pub async fn handle(
        &self,
        cmd: RejectDocumentCommand,
    ) -> Result<RejectDocumentResult, DomainError> {
        require_role(&cmd.actor, &[ActorRole::Officer], "reject_document").into_result()?;

        let owner = self
            .documents
            .find_by_id(&cmd.document_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(ErrorCode::DocumentNotFound, cmd.document_id.to_string())
            })?
            .applicant_id;

        let _guard = self.locks.acquire(&owner).await;

        let mut document = self
            .documents
            .find_by_id(&cmd.document_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(ErrorCode::DocumentNotFound, cmd.document_id.to_string())
            })?;

        document.reject()?;
        self.documents.update(&document).await?;

        let mut flag_cleared = Vec::new();
        for mut application in self.applications.find_by_applicant(&owner).await? {
            if application.documents_verified {
                application.clear_documents_verified();
                self.applications.update(&application).await?;
                flag_cleared.push(application.id);
            }
        }

        info!(
            document_id = %document.id,
            applicant_id = %owner,
            cleared = flag_cleared.len(),
            "document rejected"
        );

        Ok(RejectDocumentResult {
            document,
            flag_cleared,
        })
    }
}
