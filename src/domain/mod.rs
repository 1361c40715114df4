//! Domain layer - pure business model, no I/O.
//!
//! Organized by aggregate: `applicant`, `document`, `loan`, with the
//! `scoring` engine as a pure function set and `foundation` holding the
//! shared vocabulary (ids, money, timestamps, errors, state machines).

pub mod applicant;
pub mod document;
pub mod foundation;
pub mod loan;
pub mod scoring;
