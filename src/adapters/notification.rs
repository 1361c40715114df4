//! Notification sink adapters.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use crate::domain::foundation::{ApplicantId, DomainError, ErrorCode};
use crate::ports::NotificationSink;

/// Sink that emits a structured log line per status change. The default
/// deployment sink until an outbound channel (email, SMS) is wired in.
#[derive(Debug, Clone, Default)]
pub struct TracingNotificationSink;

impl TracingNotificationSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotificationSink for TracingNotificationSink {
    async fn notify(
        &self,
        applicant_id: &ApplicantId,
        new_status: &str,
    ) -> Result<(), DomainError> {
        info!(
            applicant_id = %applicant_id,
            status = new_status,
            "application status changed"
        );
        Ok(())
    }
}

/// Sink that records every notification for test assertions, with an
/// optional failure mode to exercise fire-and-forget handling.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotificationSink {
    sent: Arc<RwLock<Vec<(ApplicantId, String)>>>,
    fail: bool,
}

impl RecordingNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose every delivery fails.
    pub fn failing() -> Self {
        Self {
            sent: Arc::default(),
            fail: true,
        }
    }

    /// All notifications delivered so far, in order.
    pub async fn notifications(&self) -> Vec<(ApplicantId, String)> {
        self.sent.read().await.clone()
    }

    pub async fn clear(&self) {
        self.sent.write().await.clear();
    }
}

#[async_trait]
impl NotificationSink for RecordingNotificationSink {
    async fn notify(
        &self,
        applicant_id: &ApplicantId,
        new_status: &str,
    ) -> Result<(), DomainError> {
        if self.fail {
            return Err(DomainError::new(
                ErrorCode::StorageFailed,
                "notification channel unavailable",
            ));
        }
        let mut sent = self.sent.write().await;
        sent.push((*applicant_id, new_status.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn recording_sink_captures_in_order() {
        let sink = RecordingNotificationSink::new();
        let applicant_id = ApplicantId::new();

        sink.notify(&applicant_id, "SUBMITTED").await.unwrap();
        sink.notify(&applicant_id, "DOCUMENT_VERIFIED").await.unwrap();

        let sent = sink.notifications().await;
        assert_eq!(
            sent,
            vec![
                (applicant_id, "SUBMITTED".to_string()),
                (applicant_id, "DOCUMENT_VERIFIED".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn failing_sink_returns_error_and_records_nothing() {
        let sink = RecordingNotificationSink::failing();
        let result = sink.notify(&ApplicantId::new(), "APPROVED").await;

        assert!(result.is_err());
        assert!(sink.notifications().await.is_empty());
    }

    #[tokio::test]
    async fn tracing_sink_always_succeeds() {
        let sink = TracingNotificationSink::new();
        sink.notify(&ApplicantId::new(), "REJECTED").await.unwrap();
    }
}
