//! Interest-rate resolution.
//!
//! Lookup order: a manager-set override for the purpose wins outright;
//! otherwise the purpose-keyed default base rate is adjusted by credit-score
//! tier and floored at the minimum rate.

use std::collections::HashMap;

use crate::domain::foundation::RatePercent;

use super::CreditScore;

/// Rates never go below this floor, regardless of adjustments.
pub const MINIMUM_RATE: RatePercent = RatePercent::from_hundredths(500);

/// Base rate for purposes absent from the default table.
pub const DEFAULT_BASE_RATE: RatePercent = RatePercent::from_hundredths(1_000);

/// Fallback applied at approval time when an application carries no positive
/// stored rate.
pub const FALLBACK_APPROVAL_RATE: RatePercent = RatePercent::from_hundredths(850);

/// Default purpose-to-rate table, modeled as an explicit lookup structure with
/// a defined fallback so overrides and defaults are testable independently.
#[derive(Debug, Clone)]
pub struct RateTable {
    base_rates: HashMap<&'static str, RatePercent>,
}

impl RateTable {
    /// Builds the standard default table.
    pub fn standard() -> Self {
        let base_rates = HashMap::from([
            ("housing", RatePercent::from_hundredths(500)),
            ("education", RatePercent::from_hundredths(400)),
            ("personal", RatePercent::from_hundredths(900)),
            ("health", RatePercent::from_hundredths(700)),
            ("professional", RatePercent::from_hundredths(800)),
            ("car", RatePercent::from_hundredths(600)),
        ]);
        Self { base_rates }
    }

    /// Base rate for a purpose, falling back to the default for unknown ones.
    pub fn base_rate(&self, purpose: &str) -> RatePercent {
        self.base_rates
            .get(purpose.to_lowercase().as_str())
            .copied()
            .unwrap_or(DEFAULT_BASE_RATE)
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Resolves the interest rate for a purpose and credit score.
///
/// A purpose override takes precedence over everything and is returned
/// unmodified. Otherwise the base rate is tier-adjusted and floored.
pub fn resolve_rate(
    table: &RateTable,
    purpose: &str,
    score: CreditScore,
    override_rate: Option<RatePercent>,
) -> RatePercent {
    if let Some(rate) = override_rate {
        return rate;
    }

    let adjusted = table.base_rate(purpose).adjusted_by(tier_adjustment(score));
    adjusted.max(MINIMUM_RATE)
}

/// Score-tier adjustment in hundredths of a percent: discounts for strong
/// scores, surcharges for weak ones.
fn tier_adjustment(score: CreditScore) -> i64 {
    match score.value() {
        value if value >= 750 => -100,
        value if value >= 650 => -50,
        value if value < 450 => 200,
        value if value < 550 => 100,
        _ => 0,
    }
}
