//! In-memory applicant repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::applicant::Applicant;
use crate::domain::foundation::{ApplicantId, DomainError, ErrorCode};
use crate::ports::ApplicantRepository;

/// In-memory store for applicants.
#[derive(Debug, Clone, Default)]
pub struct InMemoryApplicantRepository {
    applicants: Arc<RwLock<HashMap<ApplicantId, Applicant>>>,
}

impl InMemoryApplicantRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored applicants (for test assertions).
    pub async fn count(&self) -> usize {
        self.applicants.read().await.len()
    }
}

#[async_trait]
impl ApplicantRepository for InMemoryApplicantRepository {
    async fn save(&self, applicant: &Applicant) -> Result<(), DomainError> {
        let mut applicants = self.applicants.write().await;
        applicants.insert(applicant.id, applicant.clone());
        Ok(())
    }

    async fn update(&self, applicant: &Applicant) -> Result<(), DomainError> {
        let mut applicants = self.applicants.write().await;
        if !applicants.contains_key(&applicant.id) {
            return Err(DomainError::not_found(
                ErrorCode::ApplicantNotFound,
                applicant.id.to_string(),
            ));
        }
        applicants.insert(applicant.id, applicant.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ApplicantId) -> Result<Option<Applicant>, DomainError> {
        Ok(self.applicants.read().await.get(id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Applicant>, DomainError> {
        Ok(self
            .applicants
            .read()
            .await
            .values()
            .find(|a| a.username == username)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_and_find_round_trips() {
        let repo = InMemoryApplicantRepository::new();
        let applicant = Applicant::register(ApplicantId::new(), "alice").unwrap();

        repo.save(&applicant).await.unwrap();

        let found = repo.find_by_id(&applicant.id).await.unwrap().unwrap();
        assert_eq!(found, applicant);

        let by_name = repo.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(by_name.id, applicant.id);
    }

    #[tokio::test]
    async fn update_unknown_applicant_fails() {
        let repo = InMemoryApplicantRepository::new();
        let applicant = Applicant::register(ApplicantId::new(), "ghost").unwrap();

        let err = repo.update(&applicant).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ApplicantNotFound);
    }
}
