//! Application layer - command handlers.
//!
//! Handlers orchestrate aggregates through the ports and own the concurrency
//! discipline: every lifecycle transition runs under the owning applicant's
//! lock from the registry.

pub mod handlers;
mod locks;

pub use locks::ApplicantLockRegistry;
