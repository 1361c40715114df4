//! Loan application repository port.

use async_trait::async_trait;

use crate::domain::foundation::{ApplicantId, ApplicationId, DomainError};
use crate::domain::loan::{ApplicationStatus, LoanApplication};

/// Repository port for LoanApplication persistence.
///
/// Applications are never deleted; terminal records remain for the audit
/// trail.
#[async_trait]
pub trait LoanApplicationRepository: Send + Sync {
    /// Save a new application.
    async fn save(&self, application: &LoanApplication) -> Result<(), DomainError>;

    /// Update an existing application.
    ///
    /// # Errors
    ///
    /// - `ApplicationNotFound` if the application doesn't exist
    async fn update(&self, application: &LoanApplication) -> Result<(), DomainError>;

    /// Find an application by id. Returns `None` if not found.
    async fn find_by_id(&self, id: &ApplicationId) -> Result<Option<LoanApplication>, DomainError>;

    /// All applications submitted by an applicant, ordered by applied_at
    /// ascending.
    async fn find_by_applicant(
        &self,
        applicant_id: &ApplicantId,
    ) -> Result<Vec<LoanApplication>, DomainError>;

    /// All applications currently in a status (officer/manager work queues).
    async fn find_by_status(
        &self,
        status: ApplicationStatus,
    ) -> Result<Vec<LoanApplication>, DomainError>;
}
