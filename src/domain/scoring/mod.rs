//! Credit Scoring Engine - pure function set.
//!
//! Computes a credit score from applicant attributes, requested terms, and
//! loan history, and resolves the interest rate for a purpose. Everything in
//! this module is deterministic and side-effect free; no synchronization is
//! required to call it.

mod engine;
mod rate;

pub use engine::{is_eligible, score, CreditScore, PriorOutcome, ELIGIBLE_AMOUNT_CEILING, ELIGIBLE_SCORE_FLOOR};
pub use rate::{resolve_rate, RateTable, FALLBACK_APPROVAL_RATE, MINIMUM_RATE};
