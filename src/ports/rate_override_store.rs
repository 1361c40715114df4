//! Rate override store port.
//!
//! Manager-edited purpose-to-rate overrides. Read on every interest
//! computation; an override takes precedence over the engine's default
//! table and score-tier adjustment.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, RatePercent};

/// Port for the purpose-keyed interest-rate override table.
///
/// Purposes are matched case-insensitively; implementations store keys
/// lowercased.
#[async_trait]
pub trait RateOverrideStore: Send + Sync {
    /// Override for a purpose, if a manager has set one.
    async fn get(&self, purpose: &str) -> Result<Option<RatePercent>, DomainError>;

    /// Sets (or replaces) the override for a purpose.
    async fn set(&self, purpose: &str, rate: RatePercent) -> Result<(), DomainError>;

    /// All current overrides as (purpose, rate) pairs.
    async fn list(&self) -> Result<Vec<(String, RatePercent)>, DomainError>;
}
