//! In-memory loan application repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{ApplicantId, ApplicationId, DomainError, ErrorCode};
use crate::domain::loan::{ApplicationStatus, LoanApplication};
use crate::ports::LoanApplicationRepository;

/// In-memory store for loan applications.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLoanApplicationRepository {
    applications: Arc<RwLock<HashMap<ApplicationId, LoanApplication>>>,
}

impl InMemoryLoanApplicationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored applications (for test assertions).
    pub async fn count(&self) -> usize {
        self.applications.read().await.len()
    }
}

#[async_trait]
impl LoanApplicationRepository for InMemoryLoanApplicationRepository {
    async fn save(&self, application: &LoanApplication) -> Result<(), DomainError> {
        let mut applications = self.applications.write().await;
        applications.insert(application.id, application.clone());
        Ok(())
    }

    async fn update(&self, application: &LoanApplication) -> Result<(), DomainError> {
        let mut applications = self.applications.write().await;
        if !applications.contains_key(&application.id) {
            return Err(DomainError::not_found(
                ErrorCode::ApplicationNotFound,
                application.id.to_string(),
            ));
        }
        applications.insert(application.id, application.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ApplicationId) -> Result<Option<LoanApplication>, DomainError> {
        Ok(self.applications.read().await.get(id).cloned())
    }

    async fn find_by_applicant(
        &self,
        applicant_id: &ApplicantId,
    ) -> Result<Vec<LoanApplication>, DomainError> {
        let applications = self.applications.read().await;
        let mut owned: Vec<LoanApplication> = applications
            .values()
            .filter(|a| a.applicant_id == *applicant_id)
            .cloned()
            .collect();
        owned.sort_by_key(|a| a.applied_at);
        Ok(owned)
    }

    async fn find_by_status(
        &self,
        status: ApplicationStatus,
    ) -> Result<Vec<LoanApplication>, DomainError> {
        let applications = self.applications.read().await;
        let mut matching: Vec<LoanApplication> = applications
            .values()
            .filter(|a| a.status == status)
            .cloned()
            .collect();
        matching.sort_by_key(|a| a.applied_at);
        Ok(matching)
    }
}
