//! VerifyDocumentHandler - officer accepts a document and re-evaluates the
//! gate over the applicant's whole document set.

use std::sync::Arc;
use tracing::{info, warn};

use crate::application::ApplicantLockRegistry;
use crate::domain::document::{all_types_verified, Document};
use crate::domain::foundation::{
    require_role, Actor, ActorRole, ApplicationId, DocumentId, DomainError, ErrorCode,
};
use crate::domain::loan::ApplicationStatus;
use crate::ports::{DocumentRepository, LoanApplicationRepository, NotificationSink};

/// Command to verify an uploaded document.
#[derive(Debug, Clone)]
pub struct VerifyDocumentCommand {
    pub document_id: DocumentId,
    pub actor: Actor,
}

/// Result of a verification, including the applications the gate advanced.
#[derive(Debug, Clone)]
pub struct VerifyDocumentResult {
    pub document: Document,
    pub advanced: Vec<ApplicationId>,
}

/// Handler for document verification and the cross-application fan-out.
pub struct VerifyDocumentHandler {
    documents: Arc<dyn DocumentRepository>,
    applications: Arc<dyn LoanApplicationRepository>,
    notifier: Arc<dyn NotificationSink>,
    locks: ApplicantLockRegistry,
}

impl VerifyDocumentHandler {
    pub fn new(
        documents: Arc<dyn DocumentRepository>,
        applications: Arc<dyn LoanApplicationRepository>,
        notifier: Arc<dyn NotificationSink>,
        locks: ApplicantLockRegistry,
    ) -> Self {
        Self {
            documents,
            applications,
            notifier,
            locks,
        }
    }

    pub async fn handle(
        &self,
        cmd: VerifyDocumentCommand,
    ) -> Result<VerifyDocumentResult, DomainError> {
        require_role(&cmd.actor, &[ActorRole::Officer], "verify_document").into_result()?;

        let owner = self
            .documents
            .find_by_id(&cmd.document_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(ErrorCode::DocumentNotFound, cmd.document_id.to_string())
            })?
            .applicant_id;

        let _guard = self.locks.acquire(&owner).await;

        // Re-fetch under the lock; a concurrent rejection may have landed.
        let mut document = self
            .documents
            .find_by_id(&cmd.document_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(ErrorCode::DocumentNotFound, cmd.document_id.to_string())
            })?;

        document.verify()?;
        self.documents.update(&document).await?;

        let owned = self.documents.find_by_applicant(&owner).await?;
        let mut advanced = Vec::new();

        if all_types_verified(&owned) {
            for mut application in self.applications.find_by_applicant(&owner).await? {
                if application.status == ApplicationStatus::Submitted {
                    application.mark_documents_verified(None)?;
                    self.applications.update(&application).await?;
                    info!(
                        application_id = %application.id,
                        applicant_id = %owner,
                        "document gate cleared, application advanced"
                    );
                    if let Err(err) = self
                        .notifier
                        .notify(&owner, application.status.label())
                        .await
                    {
                        warn!(error = %err, "notification delivery failed");
                    }
                    advanced.push(application.id);
                } else if !application.documents_verified {
                    // An earlier rejection cleared the flag; the gate is
                    // satisfied again, so restore it. Status stays put.
                    application.restore_documents_verified();
                    self.applications.update(&application).await?;
                    info!(
                        application_id = %application.id,
                        applicant_id = %owner,
                        "document gate cleared, verified flag restored"
                    );
                }
            }
        }

        Ok(VerifyDocumentResult { document, advanced })
    }
}
