//! LoanApplication aggregate entity.
//!
//! # Invariants
//!
//! - Status moves monotonically along the state graph; every transition is
//!   guarded by a precondition on the current status
//! - `pending = approved + interest - paid`, non-negative
//! - Approval financials are set exactly once, at approval, and are
//!   immutable afterward (repayment tracking is out of scope)
//! - Applications are never deleted (audit trail)

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    ActorId, ApplicantId, ApplicationId, DomainError, Money, RatePercent, StateMachine, Timestamp,
    ValidationError,
};
use crate::domain::scoring::{CreditScore, PriorOutcome, FALLBACK_APPROVAL_RATE};

use super::ApplicationStatus;

/// Longest supported term, in months.
const MAX_TERM_MONTHS: u32 = 360;

/// A loan request moving through the review pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanApplication {
    pub id: ApplicationId,

    pub applicant_id: ApplicantId,

    /// Officer who explicitly advanced the application, if any. The
    /// document-gate fan-out advances applications without an actor.
    pub officer_id: Option<ActorId>,

    /// Manager who rendered the decision.
    pub manager_id: Option<ActorId>,

    pub amount: Money,

    pub term_months: u32,

    pub purpose: String,

    pub status: ApplicationStatus,

    /// Tracks whether the applicant currently clears the document gate.
    /// Cleared by any document rejection; on decided applications the flag
    /// is advisory only and the decision itself never reverts.
    pub documents_verified: bool,

    /// Score computed at submission time.
    pub credit_score: CreditScore,

    /// Rate resolved at submission time; the approval computation falls back
    /// to a default when this is not positive.
    pub interest_rate: RatePercent,

    pub applied_at: Timestamp,

    pub decision_at: Option<Timestamp>,

    pub approved_amount: Option<Money>,

    pub paid_amount: Option<Money>,

    pub pending_amount: Option<Money>,
}

impl LoanApplication {
    /// Creates a submitted application. Score and rate have been computed by
    /// the caller from the applicant's profile and history.
    pub fn submit(
        id: ApplicationId,
        applicant_id: ApplicantId,
        amount: Money,
        term_months: u32,
        purpose: impl Into<String>,
        credit_score: CreditScore,
        interest_rate: RatePercent,
    ) -> Result<Self, ValidationError> {
        let purpose = purpose.into();
        if purpose.trim().is_empty() {
            return Err(ValidationError::empty_field("purpose"));
        }
        if !amount.is_positive() {
            return Err(ValidationError::out_of_range(
                "amount",
                1,
                i64::MAX,
                amount.cents(),
            ));
        }
        if term_months == 0 || term_months > MAX_TERM_MONTHS {
            return Err(ValidationError::out_of_range(
                "term_months",
                1,
                MAX_TERM_MONTHS as i64,
                term_months as i64,
            ));
        }
        Ok(Self {
            id,
            applicant_id,
            officer_id: None,
            manager_id: None,
            amount,
            term_months,
            purpose,
            status: ApplicationStatus::Submitted,
            documents_verified: false,
            credit_score,
            interest_rate,
            applied_at: Timestamp::now(),
            decision_at: None,
            approved_amount: None,
            paid_amount: None,
            pending_amount: None,
        })
    }

    /// Advances `Submitted -> DocumentVerified` and sets the verified flag.
    ///
    /// `officer` is recorded when this is an explicit officer action; the
    /// document-gate fan-out passes `None`.
    pub fn mark_documents_verified(&mut self, officer: Option<ActorId>) -> Result<(), DomainError> {
        self.status = self
            .status
            .transition_to(ApplicationStatus::DocumentVerified)?;
        self.documents_verified = true;
        if let Some(officer) = officer {
            self.officer_id = Some(officer);
        }
        Ok(())
    }

    /// Clears the document-verification flag. Status is untouched: a decided
    /// application keeps its decision even when later document rejections
    /// re-open document scrutiny.
    pub fn clear_documents_verified(&mut self) {
        self.documents_verified = false;
    }

    /// Restores the document-verification flag without moving the status.
    /// Used when the document gate clears again for an application that has
    /// already passed `Submitted`, e.g. after a rejection and a replacement
    /// upload.
    pub fn restore_documents_verified(&mut self) {
        self.documents_verified = true;
    }

    /// Approves the application and records the payoff fields, exactly once:
    /// `approved = amount`, `interest = approved * rate / 100`,
    /// `pending = approved + interest`, `paid = 0`.
    ///
    /// Uses the rate stored at submission when positive, else the fallback
    /// default rate.
    pub fn approve(&mut self, manager: ActorId) -> Result<(), DomainError> {
        self.status = self.status.transition_to(ApplicationStatus::Approved)?;

        if !self.interest_rate.is_positive() {
            self.interest_rate = FALLBACK_APPROVAL_RATE;
        }

        let approved = self.amount;
        let interest = approved.interest_at(self.interest_rate);

        self.approved_amount = Some(approved);
        self.paid_amount = Some(Money::ZERO);
        self.pending_amount = Some(approved + interest);
        self.manager_id = Some(manager);
        self.decision_at = Some(Timestamp::now());
        Ok(())
    }

    /// Rejects the application.
    pub fn reject(&mut self, manager: ActorId) -> Result<(), DomainError> {
        self.status = self.status.transition_to(ApplicationStatus::Rejected)?;
        self.manager_id = Some(manager);
        self.decision_at = Some(Timestamp::now());
        Ok(())
    }

    /// How this application weighs into a future score computation.
    pub fn prior_outcome(&self) -> PriorOutcome {
        match self.status {
            ApplicationStatus::Approved => match self.pending_amount {
                Some(pending) if pending.is_zero() => PriorOutcome::FullyPaid,
                _ => PriorOutcome::Outstanding,
            },
            ApplicationStatus::Rejected => PriorOutcome::Rejected,
            _ => PriorOutcome::Pending,
        }
    }
}
