//! Document status state machine.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};

/// Verification status of an uploaded document.
///
/// Status is mutated only by officer verify/reject actions. An officer may
/// retract a prior verification by rejecting the document; a rejected
/// document stays rejected, and the applicant uploads a replacement instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentStatus {
    /// Freshly uploaded, awaiting officer review.
    Uploaded,

    /// Accepted by an officer.
    Verified,

    /// Declined by an officer.
    Rejected,
}

impl DocumentStatus {
    /// Status label used in notifications and logs.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentStatus::Uploaded => "UPLOADED",
            DocumentStatus::Verified => "VERIFIED",
            DocumentStatus::Rejected => "REJECTED",
        }
    }
}

impl StateMachine for DocumentStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use DocumentStatus::*;
        matches!(
            (self, target),
            (Uploaded, Verified) | (Uploaded, Rejected) | (Verified, Rejected)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use DocumentStatus::*;
        match self {
            Uploaded => vec![Verified, Rejected],
            Verified => vec![Rejected],
            Rejected => vec![],
        }
    }
}
