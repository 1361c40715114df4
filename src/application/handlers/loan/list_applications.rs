//! ListApplicationsHandler - application listings for applicants and
//! review work queues.

use std::sync::Arc;

use crate::domain::foundation::{ApplicantId, DomainError};
use crate::domain::loan::{ApplicationStatus, LoanApplication};
use crate::ports::LoanApplicationRepository;

/// Listing scope.
#[derive(Debug, Clone)]
pub enum ListApplicationsQuery {
    /// An applicant's own history, oldest first.
    ByApplicant(ApplicantId),
    /// Officer/manager work queue for a status.
    ByStatus(ApplicationStatus),
}

/// Handler for application listings.
pub struct ListApplicationsHandler {
    applications: Arc<dyn LoanApplicationRepository>,
}

impl ListApplicationsHandler {
    pub fn new(applications: Arc<dyn LoanApplicationRepository>) -> Self {
        Self { applications }
    }

    pub async fn handle(
        &self,
        query: ListApplicationsQuery,
    ) -> Result<Vec<LoanApplication>, DomainError> {
        match query {
            ListApplicationsQuery::ByApplicant(applicant_id) => {
                self.applications.find_by_applicant(&applicant_id).await
            }
            ListApplicationsQuery::ByStatus(status) => {
                self.applications.find_by_status(status).await
            }
        }
    }
}
