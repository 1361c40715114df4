//! ApproveApplicationHandler - manager approval with eligibility gate and
//! decision recording.

use std::sync::Arc;
use tracing::{info, warn};

use crate::application::ApplicantLockRegistry;
use crate::domain::foundation::{
    require_role, Actor, ActorRole, ApplicationId, DomainError, ErrorCode,
};
use crate::domain::loan::LoanApplication;
use crate::domain::scoring::is_eligible;
use crate::ports::{LoanApplicationRepository, NotificationSink};

/// Command to approve an application.
#[derive(Debug, Clone)]
pub struct ApproveApplicationCommand {
    pub application_id: ApplicationId,
    pub actor: Actor,
}

/// Result of an approval, carrying the recorded financials.
#[derive(Debug, Clone)]
pub struct ApproveApplicationResult {
    pub application: LoanApplication,
}

/// Handler for manager approval.
pub struct ApproveApplicationHandler {
    applications: Arc<dyn LoanApplicationRepository>,
    notifier: Arc<dyn NotificationSink>,
    locks: ApplicantLockRegistry,
}

impl ApproveApplicationHandler {
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
        cmd: ApproveApplicationCommand,
    ) -> Result<ApproveApplicationResult, DomainError> {
        require_role(&cmd.actor, &[ActorRole::Manager], "approve_application").into_result()?;

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

        if !is_eligible(application.credit_score, application.amount) {
            return Err(DomainError::new(
                ErrorCode::ValidationFailed,
                "Application does not meet the eligibility criteria",
            )
            .with_detail("credit_score", application.credit_score.to_string())
            .with_detail("amount", application.amount.to_string()));
        }

        application.approve(cmd.actor.id.clone())?;
        self.applications.update(&application).await?;

        info!(
            application_id = %application.id,
            manager_id = %cmd.actor.id,
            rate = %application.interest_rate,
            "application approved"
        );

        if let Err(err) = self
            .notifier
            .notify(&owner, application.status.label())
            .await
        {
            warn!(error = %err, "notification delivery failed");
        }

        Ok(ApproveApplicationResult { application })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryLoanApplicationRepository, RecordingNotificationSink};
    use crate::domain::foundation::{ActorId, ApplicantId, Money, RatePercent};
    use crate::domain::loan::ApplicationStatus;
    use crate::domain::scoring::CreditScore;

    fn manager() -> Actor {
        Actor::new(ActorId::new("mgr-1").unwrap(), ActorRole::Manager)
    }

    async fn saved(
        applications: &InMemoryLoanApplicationRepository,
        amount: Money,
        score: i32,
        advanced: bool,
    ) -> LoanApplication {
        let mut application = LoanApplication::submit(
            ApplicationId::new(),
            ApplicantId::new(),
            amount,
            12,
            "personal",
            CreditScore::clamp(score),
            RatePercent::from_percent(9),
        )
        .unwrap();
        if advanced {
            application.mark_documents_verified(None).unwrap();
        }
        applications.save(&application).await.unwrap();
        application
    }

    fn handler(
        applications: Arc<InMemoryLoanApplicationRepository>,
        notifier: Arc<RecordingNotificationSink>,
    ) -> ApproveApplicationHandler {
        ApproveApplicationHandler::new(applications, notifier, ApplicantLockRegistry::new())
    }

    #[tokio::test]
    async fn approval_records_financials_and_notifies() {
        let applications = Arc::new(InMemoryLoanApplicationRepository::new());
        let notifier = Arc::new(RecordingNotificationSink::new());
        let handler = handler(applications.clone(), notifier.clone());
        let application = saved(&applications, Money::from_whole(5_000), 595, true).await;

        let result = handler
            .handle(ApproveApplicationCommand {
                application_id: application.id,
                actor: manager(),
            })
            .await
            .unwrap();

        let approved = result.application;
        assert_eq!(approved.status, ApplicationStatus::Approved);
        assert_eq!(approved.approved_amount, Some(Money::from_whole(5_000)));
        assert_eq!(approved.paid_amount, Some(Money::ZERO));
        assert_eq!(approved.pending_amount, Some(Money::from_whole(5_450)));
        assert_eq!(approved.manager_id, Some(manager().id));

        assert_eq!(
            notifier.notifications().await,
            vec![(application.applicant_id, "APPROVED".to_string())]
        );
    }

    #[tokio::test]
    async fn approval_from_submitted_is_illegal_state() {
        let applications = Arc::new(InMemoryLoanApplicationRepository::new());
        let handler = handler(
            applications.clone(),
            Arc::new(RecordingNotificationSink::new()),
        );
        let application = saved(&applications, Money::from_whole(5_000), 595, false).await;

        let err = handler
            .handle(ApproveApplicationCommand {
                application_id: application.id,
                actor: manager(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::IllegalState);

        let unchanged = applications
            .find_by_id(&application.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(unchanged.status, ApplicationStatus::Submitted);
    }

    #[tokio::test]
    async fn low_score_fails_eligibility() {
        let applications = Arc::new(InMemoryLoanApplicationRepository::new());
        let handler = handler(
            applications.clone(),
            Arc::new(RecordingNotificationSink::new()),
        );
        let application = saved(&applications, Money::from_whole(5_000), 400, true).await;

        let err = handler
            .handle(ApproveApplicationCommand {
                application_id: application.id,
                actor: manager(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn amount_at_ceiling_fails_eligibility() {
        let applications = Arc::new(InMemoryLoanApplicationRepository::new());
        let handler = handler(
            applications.clone(),
            Arc::new(RecordingNotificationSink::new()),
        );
        let application = saved(&applications, Money::from_whole(50_000), 700, true).await;

        let err = handler
            .handle(ApproveApplicationCommand {
                application_id: application.id,
                actor: manager(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn officer_cannot_approve() {
        let applications = Arc::new(InMemoryLoanApplicationRepository::new());
        let handler = handler(
            applications.clone(),
            Arc::new(RecordingNotificationSink::new()),
        );
        let application = saved(&applications, Money::from_whole(5_000), 595, true).await;

        let err = handler
            .handle(ApproveApplicationCommand {
                application_id: application.id,
                actor: Actor::new(ActorId::new("officer-1").unwrap(), ActorRole::Officer),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }
}
