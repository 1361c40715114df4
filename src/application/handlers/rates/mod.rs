//! Rate override command handlers.

mod list_rate_overrides;
mod set_rate_override;

pub use list_rate_overrides::ListRateOverridesHandler;
pub use set_rate_override::{SetRateOverrideCommand, SetRateOverrideHandler};
