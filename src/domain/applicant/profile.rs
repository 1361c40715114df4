//! Credit-relevant applicant attributes.
//!
//! Every attribute is optional: applicants fill their profile in over time,
//! and the scoring engine treats a missing attribute as neutral.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::foundation::Money;

/// Employment status as declared by the applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentStatus {
    Employed,
    SelfEmployed,
    Unemployed,
    Other,
}

/// Marital status as declared by the applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Other,
}

/// Credit-relevant attributes used by the scoring engine.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreditProfile {
    /// Gross annual income.
    pub annual_income: Option<Money>,

    pub employment_status: Option<EmploymentStatus>,

    pub age: Option<u8>,

    pub marital_status: Option<MaritalStatus>,

    /// Total outstanding debts across all obligations.
    pub existing_debts: Option<Money>,

    /// Length of credit history in years.
    pub credit_history_years: Option<u8>,

    pub late_payments: Option<u32>,

    /// Revolving credit utilization as a whole percentage (e.g., 30 for 30%).
    pub credit_utilization_pct: Option<u8>,

    /// Hard credit inquiries in the recent window.
    pub credit_inquiries: Option<u32>,

    /// Distinct credit-product categories held (e.g., "mortgage",
    /// "credit_card", "auto").
    #[serde(default)]
    pub credit_mix: BTreeSet<String>,
}

impl CreditProfile {
    /// Number of distinct credit-product categories held.
    pub fn credit_mix_breadth(&self) -> usize {
        self.credit_mix.len()
    }
}
