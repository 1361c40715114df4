//! SetRateOverrideHandler - manager edits to the purpose-rate table.

use std::sync::Arc;
use tracing::info;

use crate::domain::foundation::{
    require_role, Actor, ActorRole, DomainError, RatePercent, ValidationError,
};
use crate::ports::RateOverrideStore;

/// Command to set (or replace) the override rate for a purpose.
#[derive(Debug, Clone)]
pub struct SetRateOverrideCommand {
    pub purpose: String,
    pub rate: RatePercent,
    pub actor: Actor,
}

/// Handler for rate override edits. Overrides apply to future submissions
/// only; stored rates on existing applications are untouched.
pub struct SetRateOverrideHandler {
    overrides: Arc<dyn RateOverrideStore>,
}

impl SetRateOverrideHandler {
    pub fn new(overrides: Arc<dyn RateOverrideStore>) -> Self {
        Self { overrides }
    }

    pub async fn handle(&self, cmd: SetRateOverrideCommand) -> Result<(), DomainError> {
        require_role(&cmd.actor, &[ActorRole::Manager], "set_rate_override").into_result()?;

        if cmd.purpose.trim().is_empty() {
            return Err(ValidationError::empty_field("purpose").into());
        }
        if !cmd.rate.is_positive() {
            return Err(ValidationError::out_of_range(
                "rate",
                1,
                i64::MAX,
                cmd.rate.hundredths(),
            )
            .into());
        }

        self.overrides.set(&cmd.purpose, cmd.rate).await?;
        info!(
            purpose = %cmd.purpose,
            rate = %cmd.rate,
            manager_id = %cmd.actor.id,
            "rate override set"
        );
        Ok(())
    }
}
