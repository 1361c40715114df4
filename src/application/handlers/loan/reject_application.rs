//! RejectApplicationHandler - manager rejection.

use std::sync::Arc;
use tracing::{info, warn};

use crate::application::ApplicantLockRegistry;
use crate::domain::foundation::{
    require_role, Actor, ActorRole, ApplicationId, DomainError, ErrorCode,
};
use crate::domain::loan::LoanApplication;
use crate::ports::{LoanApplicationRepository, NotificationSink};

/// Command to reject an application.
#[derive(Debug, Clone)]
pub struct RejectApplicationCommand {
    pub application_id: ApplicationId,
    pub actor: Actor,
}

/// Result of the rejection.
#[derive(Debug, Clone)]
pub struct RejectApplicationResult {
    pub application: LoanApplication,
}

/// Handler for manager rejection, legal only from document-verified.
pub struct RejectApplicationHandler {
    applications: Arc<dyn LoanApplicationRepository>,
    notifier: Arc<dyn NotificationSink>,
    locks: ApplicantLockRegistry,
}

impl RejectApplicationHandler {
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
        cmd: RejectApplicationCommand,
    ) -> Result<RejectApplicationResult, DomainError> {
        require_role(&cmd.actor, &[ActorRole::Manager], "reject_application").into_result()?;

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

        application.reject(cmd.actor.id.clone())?;
        self.applications.update(&application).await?;

        info!(
            application_id = %application.id,
            manager_id = %cmd.actor.id,
            "application rejected"
        );

        if let Err(err) = self
            .notifier
            .notify(&owner, application.status.label())
            .await
        {
            warn!(error = %err, "notification delivery failed");
        }

        Ok(RejectApplicationResult { application })
    }
}
