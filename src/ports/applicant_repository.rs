//! Applicant repository port.

use async_trait::async_trait;

use crate::domain::applicant::Applicant;
use crate::domain::foundation::{ApplicantId, DomainError};

/// Repository port for Applicant persistence.
#[async_trait]
pub trait ApplicantRepository: Send + Sync {
    /// Save a new applicant.
    ///
    /// # Errors
    ///
    /// - `RepositoryFailed` on persistence failure
    async fn save(&self, applicant: &Applicant) -> Result<(), DomainError>;

    /// Update an existing applicant.
    ///
    /// # Errors
    ///
    /// - `ApplicantNotFound` if the applicant doesn't exist
    /// - `RepositoryFailed` on persistence failure
    async fn update(&self, applicant: &Applicant) -> Result<(), DomainError>;

    /// Find an applicant by id. Returns `None` if not found.
    async fn find_by_id(&self, id: &ApplicantId) -> Result<Option<Applicant>, DomainError>;

    /// Find an applicant by username. Returns `None` if not found.
    async fn find_by_username(&self, username: &str) -> Result<Option<Applicant>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn applicant_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ApplicantRepository) {}
    }
}
