//! SubmitApplicationHandler - creates a loan application, scoring and
//! pricing it at submission time.

use std::sync::Arc;
use tracing::{info, warn};

use crate::application::ApplicantLockRegistry;
use crate::domain::foundation::{
    ApplicantId, ApplicationId, DomainError, ErrorCode, Money,
};
use crate::domain::loan::{ApplicationStatus, LoanApplication};
use crate::domain::scoring::{resolve_rate, score, CreditScore, PriorOutcome, RateTable};
use crate::ports::{
    ApplicantRepository, DocumentRepository, LoanApplicationRepository, NotificationSink,
    RateOverrideStore,
};

/// Command to submit a loan application.
#[derive(Debug, Clone)]
pub struct SubmitApplicationCommand {
    pub applicant_id: ApplicantId,
    pub amount: Money,
    pub term_months: u32,
    pub purpose: String,
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmitApplicationResult {
    pub application: LoanApplication,
    pub score: CreditScore,
}

/// Handler for application submission.
///
/// First-time applicants must have uploaded at least one document; repeat
/// applicants are grandfathered by their history. Every document of the
/// applicant without an application linkage is claimed by the submission.
pub struct SubmitApplicationHandler {
    applicants: Arc<dyn ApplicantRepository>,
    documents: Arc<dyn DocumentRepository>,
    applications: Arc<dyn LoanApplicationRepository>,
    overrides: Arc<dyn RateOverrideStore>,
    notifier: Arc<dyn NotificationSink>,
    locks: ApplicantLockRegistry,
    rate_table: RateTable,
}

impl SubmitApplicationHandler {
    pub fn new(
        applicants: Arc<dyn ApplicantRepository>,
        documents: Arc<dyn DocumentRepository>,
        applications: Arc<dyn LoanApplicationRepository>,
        overrides: Arc<dyn RateOverrideStore>,
        notifier: Arc<dyn NotificationSink>,
        locks: ApplicantLockRegistry,
    ) -> Self {
        Self {
            applicants,
            documents,
            applications,
            overrides,
            notifier,
            locks,
            rate_table: RateTable::standard(),
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitApplicationCommand,
    ) -> Result<SubmitApplicationResult, DomainError> {
        let _guard = self.locks.acquire(&cmd.applicant_id).await;

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
                "Deactivated applicants cannot submit applications",
            ));
        }

        let owned_documents = self.documents.find_by_applicant(&cmd.applicant_id).await?;
        let history = self.applications.find_by_applicant(&cmd.applicant_id).await?;

        if owned_documents.is_empty() && history.is_empty() {
            return Err(DomainError::validation(
                "documents",
                "First-time applicants must upload at least one document before applying",
            ));
        }

        let priors: Vec<PriorOutcome> = history.iter().map(|a| a.prior_outcome()).collect();
        let credit_score = score(
            &applicant.profile,
            cmd.amount,
            cmd.term_months,
            &cmd.purpose,
            &priors,
        );

        let override_rate = self.overrides.get(&cmd.purpose).await?;
        let interest_rate = resolve_rate(&self.rate_table, &cmd.purpose, credit_score, override_rate);

        let application = LoanApplication::submit(
            ApplicationId::new(),
            cmd.applicant_id,
            cmd.amount,
            cmd.term_months,
            cmd.purpose,
            credit_score,
            interest_rate,
        )?;
        self.applications.save(&application).await?;

        for mut document in self
            .documents
            .find_unlinked_by_applicant(&cmd.applicant_id)
            .await?
        {
            document.link_to_application(application.id)?;
            self.documents.update(&document).await?;
        }

        info!(
            application_id = %application.id,
            applicant_id = %cmd.applicant_id,
            score = %credit_score,
            rate = %interest_rate,
            "application submitted"
        );

        if let Err(err) = self
            .notifier
            .notify(&cmd.applicant_id, ApplicationStatus::Submitted.label())
            .await
        {
            warn!(error = %err, "notification delivery failed");
        }

        Ok(SubmitApplicationResult {
            application,
            score: credit_score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{
        InMemoryApplicantRepository, InMemoryDocumentRepository,
        InMemoryLoanApplicationRepository, InMemoryRateOverrideStore, RecordingNotificationSink,
    };
    use crate::domain::applicant::{Applicant, CreditProfile};
    use crate::domain::document::{BlobHandle, Document};
    use crate::domain::foundation::{DocumentId, RatePercent};

    struct Fixture {
        applicants: Arc<InMemoryApplicantRepository>,
        documents: Arc<InMemoryDocumentRepository>,
        applications: Arc<InMemoryLoanApplicationRepository>,
        overrides: Arc<InMemoryRateOverrideStore>,
        notifier: Arc<RecordingNotificationSink>,
        handler: SubmitApplicationHandler,
    }

    fn fixture() -> Fixture {
        let applicants = Arc::new(InMemoryApplicantRepository::new());
        let documents = Arc::new(InMemoryDocumentRepository::new());
        let applications = Arc::new(InMemoryLoanApplicationRepository::new());
        let overrides = Arc::new(InMemoryRateOverrideStore::new());
        let notifier = Arc::new(RecordingNotificationSink::new());
        let handler = SubmitApplicationHandler::new(
            applicants.clone(),
            documents.clone(),
            applications.clone(),
            overrides.clone(),
            notifier.clone(),
            ApplicantLockRegistry::new(),
        );
        Fixture {
            applicants,
            documents,
            applications,
            overrides,
            notifier,
            handler,
        }
    }

    async fn applicant_with_profile(fixture: &Fixture) -> Applicant {
        let mut applicant = Applicant::register(ApplicantId::new(), "alice").unwrap();
        let mut profile = CreditProfile::default();
        profile.annual_income = Some(Money::from_whole(60_000));
        profile.age = Some(35);
        profile.late_payments = Some(0);
        applicant.update_profile(profile);
        fixture.applicants.save(&applicant).await.unwrap();
        applicant
    }

    async fn uploaded(fixture: &Fixture, applicant_id: ApplicantId) -> Document {
        let document = Document::record_upload(
            DocumentId::new(),
            applicant_id,
            "payslip",
            "f.pdf",
            "application/pdf",
            128,
            BlobHandle::new("blob"),
        )
        .unwrap();
        fixture.documents.save(&document).await.unwrap();
        document
    }

    fn cmd(applicant_id: ApplicantId) -> SubmitApplicationCommand {
        SubmitApplicationCommand {
            applicant_id,
            amount: Money::from_whole(5_000),
            term_months: 12,
            purpose: "personal".to_string(),
        }
    }

    #[tokio::test]
    async fn submission_scores_prices_links_and_notifies() {
        let fixture = fixture();
        let applicant = applicant_with_profile(&fixture).await;
        let document = uploaded(&fixture, applicant.id).await;

        let result = fixture.handler.handle(cmd(applicant.id)).await.unwrap();

        // income +25, DTI +30, age +10, zero late +20, purpose +10
        assert_eq!(result.score.value(), 595);
        assert_eq!(result.application.status, ApplicationStatus::Submitted);
        // personal base 9.00, mid tier: no adjustment
        assert_eq!(
            result.application.interest_rate,
            RatePercent::from_percent(9)
        );

        let linked = fixture
            .documents
            .find_by_id(&document.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(linked.application_id, Some(result.application.id));

        let sent = fixture.notifier.notifications().await;
        assert_eq!(sent, vec![(applicant.id, "SUBMITTED".to_string())]);
    }

    #[tokio::test]
    async fn first_time_applicant_without_documents_is_rejected() {
        let fixture = fixture();
        let applicant = applicant_with_profile(&fixture).await;

        let err = fixture.handler.handle(cmd(applicant.id)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(fixture.applications.count().await, 0);
    }

    #[tokio::test]
    async fn repeat_applicant_is_grandfathered_without_documents() {
        let fixture = fixture();
        let applicant = applicant_with_profile(&fixture).await;
        uploaded(&fixture, applicant.id).await;
        fixture.handler.handle(cmd(applicant.id)).await.unwrap();

        // Second submission with no unlinked documents succeeds on history.
        let result = fixture.handler.handle(cmd(applicant.id)).await.unwrap();
        assert_eq!(result.application.status, ApplicationStatus::Submitted);
        assert_eq!(fixture.applications.count().await, 2);
    }

    #[tokio::test]
    async fn later_uploads_stay_with_the_next_submission() {
        let fixture = fixture();
        let applicant = applicant_with_profile(&fixture).await;
        uploaded(&fixture, applicant.id).await;
        let first = fixture.handler.handle(cmd(applicant.id)).await.unwrap();

        let late_upload = uploaded(&fixture, applicant.id).await;
        let second = fixture.handler.handle(cmd(applicant.id)).await.unwrap();

        let late_upload = fixture
            .documents
            .find_by_id(&late_upload.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(late_upload.application_id, Some(second.application.id));
        assert_ne!(first.application.id, second.application.id);
    }

    #[tokio::test]
    async fn purpose_override_wins_over_default_table() {
        let fixture = fixture();
        let applicant = applicant_with_profile(&fixture).await;
        uploaded(&fixture, applicant.id).await;
        fixture
            .overrides
            .set("personal", RatePercent::from_hundredths(1_234))
            .await
            .unwrap();

        let result = fixture.handler.handle(cmd(applicant.id)).await.unwrap();
        assert_eq!(
            result.application.interest_rate,
            RatePercent::from_hundredths(1_234)
        );
    }

    #[tokio::test]
    async fn prior_rejection_lowers_the_next_score() {
        let fixture = fixture();
        let applicant = applicant_with_profile(&fixture).await;
        uploaded(&fixture, applicant.id).await;

        let first = fixture.handler.handle(cmd(applicant.id)).await.unwrap();
        let mut application = first.application;
        application.mark_documents_verified(None).unwrap();
        application
            .reject(crate::domain::foundation::ActorId::new("mgr-1").unwrap())
            .unwrap();
        fixture.applications.update(&application).await.unwrap();

        let second = fixture.handler.handle(cmd(applicant.id)).await.unwrap();
        assert_eq!(second.score.value(), first.score.value() - 10);
    }

    #[tokio::test]
    async fn unknown_applicant_is_not_found() {
        let fixture = fixture();
        let err = fixture
            .handler
            .handle(cmd(ApplicantId::new()))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ApplicantNotFound);
    }

    #[tokio::test]
    async fn invalid_terms_are_validation_errors() {
        let fixture = fixture();
        let applicant = applicant_with_profile(&fixture).await;
        uploaded(&fixture, applicant.id).await;

        let mut zero_amount = cmd(applicant.id);
        zero_amount.amount = Money::ZERO;
        let err = fixture.handler.handle(zero_amount).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::OutOfRange);

        let mut blank_purpose = cmd(applicant.id);
        blank_purpose.purpose = "  ".to_string();
        let err = fixture.handler.handle(blank_purpose).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyField);
    }
}
