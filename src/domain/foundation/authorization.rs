//! Authorization support types.
//!
//! Lifecycle transitions are guarded by an explicit capability check on the
//! acting party: the lifecycle component verifies the actor's role against the
//! roles required for the transition, rather than relying on any implicit
//! caller-identity dispatch.

use serde::{Deserialize, Serialize};

use super::{ActorId, DomainError, ErrorCode};

/// Role of an acting party in the review pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorRole {
    /// The party requesting a loan.
    Applicant,
    /// Verifies or rejects documents and advances applications to
    /// document-verified.
    Officer,
    /// Renders the final approve/reject decision and edits rate overrides.
    Manager,
    /// Operational superuser; holds every capability.
    Admin,
}

/// An authenticated acting party: identity plus role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub role: ActorRole,
}

impl Actor {
    pub fn new(id: ActorId, role: ActorRole) -> Self {
        Self { id, role }
    }
}

/// Result of an authorization check, carrying context for logging.
#[derive(Debug, Clone)]
pub struct AuthorizationResult {
    /// Whether access was granted.
    pub granted: bool,

    /// The operation that was attempted (e.g., "approve_application").
    pub operation: &'static str,

    /// The actor who requested access.
    pub actor_id: String,

    /// Optional reason for denial (if denied).
    pub denial_reason: Option<String>,
}

impl AuthorizationResult {
    /// Converts this result to a `Result<(), DomainError>`.
    ///
    /// Returns `Ok(())` if granted, `Err(Forbidden)` if denied.
    pub fn into_result(self) -> Result<(), DomainError> {
        if self.granted {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::Forbidden,
                self.denial_reason
                    .unwrap_or_else(|| "Access denied".to_string()),
            )
            .with_detail("operation", self.operation)
            .with_detail("actor_id", self.actor_id))
        }
    }
}

/// Checks that the actor holds one of the roles required for an operation.
///
/// `Admin` is accepted everywhere.
pub fn require_role(
    actor: &Actor,
    required: &[ActorRole],
    operation: &'static str,
) -> AuthorizationResult {
    let granted = actor.role == ActorRole::Admin || required.contains(&actor.role);
    AuthorizationResult {
        granted,
        operation,
        actor_id: actor.id.to_string(),
        denial_reason: if granted {
            None
        } else {
            Some(format!(
                "Role {:?} cannot perform {}",
                actor.role, operation
            ))
        },
    }
}
