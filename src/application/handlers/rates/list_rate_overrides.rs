//! ListRateOverridesHandler - current override table, for review screens.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, RatePercent};
use crate::ports::RateOverrideStore;

/// Handler listing the current overrides, sorted by purpose.
pub struct ListRateOverridesHandler {
    overrides: Arc<dyn RateOverrideStore>,
}

impl ListRateOverridesHandler {
    pub fn new(overrides: Arc<dyn RateOverrideStore>) -> Self {
        Self { overrides }
    }

    pub async fn handle(&self) -> Result<Vec<(String, RatePercent)>, DomainError> {
        self.overrides.list().await
    }
}
