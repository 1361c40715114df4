//! Score computation and eligibility.
//!
//! The score starts at a base of 500 and sums independently computed
//! adjustments, then clamps to [300, 850]. Each adjustment is a pure function
//! of one slice of the input; the total is order-independent by construction.
//! Missing optional attributes contribute nothing.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::applicant::{CreditProfile, EmploymentStatus, MaritalStatus};
use crate::domain::foundation::Money;

/// Lowest score the engine can produce.
pub const SCORE_MIN: i32 = 300;
/// Highest score the engine can produce.
pub const SCORE_MAX: i32 = 850;
/// Starting point before adjustments.
const SCORE_BASE: i32 = 500;

/// Minimum score (exclusive) for loan eligibility.
pub const ELIGIBLE_SCORE_FLOOR: i32 = 400;
/// Maximum requested amount (exclusive) for loan eligibility.
pub const ELIGIBLE_AMOUNT_CEILING: Money = Money::from_cents(50_000 * 100);

/// A computed credit score, always within [300, 850].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreditScore(i32);

impl CreditScore {
    /// Clamps a raw value into the valid score range.
    pub fn clamp(raw: i32) -> Self {
        Self(raw.clamp(SCORE_MIN, SCORE_MAX))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for CreditScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of a prior loan application, as seen by the scoring engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorOutcome {
    /// Approved and fully repaid (zero pending balance).
    FullyPaid,
    /// Approved with an outstanding balance.
    Outstanding,
    /// Rejected by a manager.
    Rejected,
    /// Still in review.
    Pending,
}

/// Computes the credit score for a requested loan.
///
/// Pure and deterministic: the same inputs always produce the same score.
pub fn score(
    profile: &CreditProfile,
    amount: Money,
    term_months: u32,
    purpose: &str,
    priors: &[PriorOutcome],
) -> CreditScore {
    let raw = SCORE_BASE
        + income_adjustment(profile.annual_income)
        + dti_adjustment(profile.annual_income, profile.existing_debts, amount)
        + employment_adjustment(profile.employment_status)
        + age_adjustment(profile.age)
        + marital_adjustment(profile.marital_status)
        + history_length_adjustment(profile.credit_history_years)
        + late_payment_adjustment(profile.late_payments)
        + utilization_adjustment(profile.credit_utilization_pct)
        + inquiry_adjustment(profile.credit_inquiries)
        + credit_mix_adjustment(profile.credit_mix_breadth())
        + prior_outcome_adjustment(priors)
        + amount_adjustment(amount)
        + term_adjustment(term_months)
        + purpose_adjustment(purpose);

    CreditScore::clamp(raw)
}

/// Eligibility gate: score must exceed the floor AND the requested amount
/// must stay below the ceiling. Both conditions are required.
pub fn is_eligible(score: CreditScore, amount: Money) -> bool {
    score.value() > ELIGIBLE_SCORE_FLOOR && amount < ELIGIBLE_AMOUNT_CEILING
}

fn income_adjustment(income: Option<Money>) -> i32 {
    match income {
        Some(income) => match income.whole_units() {
            units if units >= 120_000 => 40,
            units if units >= 75_000 => 30,
            units if units >= 50_000 => 25,
            units if units >= 25_000 => 10,
            _ => 0,
        },
        None => 0,
    }
}

/// Debt-to-income, banded at the conventional 20/36/50% thresholds. The
/// requested amount counts toward debt. Without a positive income the ratio
/// is undefined and contributes nothing.
fn dti_adjustment(income: Option<Money>, existing_debts: Option<Money>, requested: Money) -> i32 {
    let income = match income {
        Some(income) if income.is_positive() => income,
        _ => return 0,
    };
    let debt = existing_debts.unwrap_or(Money::ZERO) + requested;
    let ratio_pct = debt.cents() * 100 / income.cents();
    match ratio_pct {
        pct if pct < 20 => 30,
        pct if pct < 36 => 10,
        pct if pct < 50 => -20,
        _ => -50,
    }
}

fn employment_adjustment(status: Option<EmploymentStatus>) -> i32 {
    match status {
        Some(EmploymentStatus::Employed) => 25,
        Some(EmploymentStatus::SelfEmployed) => 10,
        Some(EmploymentStatus::Unemployed) => -40,
        Some(EmploymentStatus::Other) | None => 0,
    }
}

fn age_adjustment(age: Option<u8>) -> i32 {
    match age {
        Some(age) if (30..=55).contains(&age) => 10,
        Some(age) if (56..=65).contains(&age) => 5,
        Some(age) if age < 21 => -10,
        _ => 0,
    }
}

fn marital_adjustment(status: Option<MaritalStatus>) -> i32 {
    match status {
        Some(MaritalStatus::Married) => 10,
        Some(MaritalStatus::Divorced) => -5,
        _ => 0,
    }
}

fn history_length_adjustment(years: Option<u8>) -> i32 {
    match years {
        Some(years) if years >= 10 => 30,
        Some(years) if years >= 5 => 20,
        Some(years) if years >= 2 => 10,
        _ => 0,
    }
}

fn late_payment_adjustment(count: Option<u32>) -> i32 {
    match count {
        Some(0) => 20,
        Some(1) => -10,
        Some(2) => -25,
        Some(_) => -50,
        None => 0,
    }
}

fn utilization_adjustment(pct: Option<u8>) -> i32 {
    match pct {
        Some(pct) if pct < 30 => 20,
        Some(pct) if pct < 50 => 5,
        Some(pct) if pct < 75 => -15,
        Some(_) => -40,
        None => 0,
    }
}

fn inquiry_adjustment(count: Option<u32>) -> i32 {
    match count {
        Some(count) if count <= 1 => 10,
        Some(count) if count <= 3 => 0,
        Some(count) if count <= 6 => -15,
        Some(_) => -30,
        None => 0,
    }
}

fn credit_mix_adjustment(distinct_categories: usize) -> i32 {
    match distinct_categories {
        0 => 0,
        1 => 5,
        2 => 10,
        _ => 15,
    }
}

/// Fixed per-occurrence weights: fully repaid loans reward the applicant,
/// rejections penalize; an approved loan still outstanding is neutral.
fn prior_outcome_adjustment(priors: &[PriorOutcome]) -> i32 {
    priors
        .iter()
        .map(|outcome| match outcome {
            PriorOutcome::FullyPaid => 15,
            PriorOutcome::Rejected => -10,
            PriorOutcome::Outstanding | PriorOutcome::Pending => 0,
        })
        .sum()
}

fn amount_adjustment(amount: Money) -> i32 {
    match amount.whole_units() {
        units if units > 10_000 => -50,
        units if units > 5_000 => -25,
        _ => 0,
    }
}

fn term_adjustment(term_months: u32) -> i32 {
    match term_months {
        0..=12 => 0,
        13..=24 => -10,
        25..=48 => -20,
        _ => -30,
    }
}

fn purpose_adjustment(purpose: &str) -> i32 {
    let purpose = purpose.to_lowercase();
    match purpose.as_str() {
        "business" => -30,
        "personal" | "home" | "housing" | "education" => 10,
        _ => 0,
    }
}
