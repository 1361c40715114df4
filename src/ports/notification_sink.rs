//! Notification sink port - fire-and-forget status updates.

use async_trait::async_trait;

use crate::domain::foundation::{ApplicantId, DomainError};

/// Port for delivering status-change notifications to applicants.
///
/// Called once per lifecycle transition. Delivery is fire-and-forget:
/// handlers log failures and never let them fail the triggering transition.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Notifies the applicant that an application reached `new_status`.
    async fn notify(&self, applicant_id: &ApplicantId, new_status: &str)
        -> Result<(), DomainError>;
}
