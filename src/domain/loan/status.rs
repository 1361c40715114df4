//! Loan application status state machine.
//!
//! Canonical state graph:
//!
//! ```text
//! SUBMITTED -> DOCUMENT_VERIFIED -> APPROVED
//!                     |
//!                     +-----------> REJECTED
//! ```
//!
//! Transitions are monotonic: no skipping, no reverting. Rejection is an
//! explicit manager action legal only from `DocumentVerified`; there is no
//! direct `Submitted -> Rejected` edge.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a loan application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    /// Applicant has applied; documents are under officer review.
    Submitted,

    /// Every distinct document type has a verified member; awaiting the
    /// manager's decision.
    DocumentVerified,

    /// Manager approved; approval financials are recorded.
    Approved,

    /// Manager rejected.
    Rejected,
}

impl ApplicationStatus {
    /// Status label used in notifications and logs.
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Submitted => "SUBMITTED",
            ApplicationStatus::DocumentVerified => "DOCUMENT_VERIFIED",
            ApplicationStatus::Approved => "APPROVED",
            ApplicationStatus::Rejected => "REJECTED",
        }
    }

    /// A decision has been rendered; the application is immutable.
    pub fn is_decided(&self) -> bool {
        matches!(self, ApplicationStatus::Approved | ApplicationStatus::Rejected)
    }
}

impl StateMachine for ApplicationStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ApplicationStatus::*;
        matches!(
            (self, target),
            (Submitted, DocumentVerified)
                | (DocumentVerified, Approved)
                | (DocumentVerified, Rejected)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ApplicationStatus::*;
        match self {
            Submitted => vec![DocumentVerified],
            DocumentVerified => vec![Approved, Rejected],
            Approved => vec![],
            Rejected => vec![],
        }
    }
}
