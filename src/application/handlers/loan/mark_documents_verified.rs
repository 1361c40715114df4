//! MarkDocumentsVerifiedHandler - explicit officer advancement of an
//! application to document-verified.

use std::sync::Arc;
use tracing::{info, warn};

use crate::application::ApplicantLockRegistry;
use crate::domain::foundation::{
    require_role, Actor, ActorRole, ApplicationId, DomainError, ErrorCode,
};
use crate::domain::loan::LoanApplication;
use crate::ports::{LoanApplicationRepository, NotificationSink};

/// Command to advance an application to document-verified.
#[derive(Debug, Clone)]
pub struct MarkDocumentsVerifiedCommand {
    pub application_id: ApplicationId,
    pub actor: Actor,
}

/// Result of the advancement.
#[derive(Debug, Clone)]
pub struct MarkDocumentsVerifiedResult {
    pub application: LoanApplication,
}

/// Handler for the explicit officer path. Unlike the document-gate fan-out,
/// this records the acting officer on the application.
pub struct MarkDocumentsVerifiedHandler {
    applications: Arc<dyn LoanApplicationRepository>,
    notifier: Arc<dyn NotificationSink>,
    locks: ApplicantLockRegistry,
}

impl MarkDocumentsVerifiedHandler {
    pub fn new(
        applications: Arc<dyn LoanApplicationRepository>,
        notifier: Arc<dyn NotificationSink>,
        locks: ApplicantLockRegistry,
    ) -> Self {
        Self {
            applications,
            notifier,
            locks,
        }
    }

    pub async fn handle(
        &self,
        cmd: MarkDocumentsVerifiedCommand,
    ) -> Result<MarkDocumentsVerifiedResult, DomainError> {
        require_role(&cmd.actor, &[ActorRole::Officer], "mark_documents_verified")
            .into_result()?;

        let owner = self
            .applications
            .find_by_id(&cmd.application_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(
                    ErrorCode::ApplicationNotFound,
                    cmd.application_id.to_string(),
                )
            })?
            .applicant_id;

        let _guard = self.locks.acquire(&owner).await;

        let mut application = self
            .applications
            .find_by_id(&cmd.application_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(
                    ErrorCode::ApplicationNotFound,
                    cmd.application_id.to_string(),
                )
            })?;

        application.mark_documents_verified(Some(cmd.actor.id.clone()))?;
        self.applications.update(&application).await?;

        info!(
            application_id = %application.id,
            officer_id = %cmd.actor.id,
            "documents verified by officer"
        );

        if let Err(err) = self
            .notifier
            .notify(&owner, application.status.label())
            .await
        {
            warn!(error = %err, "notification delivery failed");
        }

        Ok(MarkDocumentsVerifiedResult { application })
    }
}
