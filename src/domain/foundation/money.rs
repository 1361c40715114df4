//! Monetary value objects.
//!
//! All monetary values are stored as i64 cents (not floats), and interest
//! rates as i64 hundredths of a percent. Financial arithmetic stays exact:
//! `pending = approved + interest - paid` holds to the cent.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Monetary amount in cents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Creates a money value from cents.
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Creates a money value from whole currency units.
    pub const fn from_whole(units: i64) -> Self {
        Self(units * 100)
    }

    /// Returns the amount in cents.
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the amount in whole currency units, truncating cents.
    pub fn whole_units(&self) -> i64 {
        self.0 / 100
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Simple interest for this principal at the given annual rate,
    /// truncated to the cent: `amount * rate / 100`.
    ///
    /// The intermediate product is widened to i128 so the computation cannot
    /// overflow for any principal/rate pair that fits in the value objects.
    pub fn interest_at(&self, rate: RatePercent) -> Money {
        Money((self.0 as i128 * rate.hundredths() as i128 / 10_000) as i64)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

/// Annual interest rate as a percentage with two-decimal precision,
/// stored in hundredths of a percent (8.50% == 850).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RatePercent(i64);

impl RatePercent {
    pub const ZERO: RatePercent = RatePercent(0);

    /// Creates a rate from hundredths of a percent.
    pub const fn from_hundredths(hundredths: i64) -> Self {
        Self(hundredths)
    }

    /// Creates a rate from a whole percentage.
    pub const fn from_percent(percent: i64) -> Self {
        Self(percent * 100)
    }

    /// Returns the rate in hundredths of a percent.
    pub const fn hundredths(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Adds an adjustment, which may be negative.
    pub fn adjusted_by(&self, hundredths: i64) -> Self {
        Self(self.0 + hundredths)
    }
}

impl fmt::Display for RatePercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}
