//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the loan origination domain.

mod authorization;
mod errors;
mod ids;
mod money;
mod state_machine;
mod timestamp;

pub use authorization::{require_role, Actor, ActorRole, AuthorizationResult};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ActorId, ApplicantId, ApplicationId, DocumentId};
pub use money::{Money, RatePercent};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
