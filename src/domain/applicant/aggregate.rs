//! Applicant aggregate entity.
//!
//! # Invariants
//!
//! - `id` is globally unique; `username` is unique across active applicants
//! - Credit attributes change only through the applicant's own profile updates
//! - Applicants are never deleted, only deactivated

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ApplicantId, Timestamp, ValidationError};

use super::CreditProfile;

/// The party requesting a loan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    pub id: ApplicantId,

    pub username: String,

    /// Credit-relevant attributes used by the scoring engine.
    pub profile: CreditProfile,

    /// Deactivated applicants keep their records for the audit trail but
    /// can no longer act.
    pub active: bool,

    pub created_at: Timestamp,

    pub updated_at: Timestamp,
}

impl Applicant {
    /// Registers a new applicant with an empty credit profile.
    pub fn register(id: ApplicantId, username: impl Into<String>) -> Result<Self, ValidationError> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(ValidationError::empty_field("username"));
        }
        let now = Timestamp::now();
        Ok(Self {
            id,
            username,
            profile: CreditProfile::default(),
            active: true,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replaces the credit profile. Only the applicant's own updates reach
    /// this method; officers and managers never mutate applicant attributes.
    pub fn update_profile(&mut self, profile: CreditProfile) {
        self.profile = profile;
        self.updated_at = Timestamp::now();
    }

    /// Deactivates the applicant. Records are kept; deletion is not supported.
    pub fn deactivate(&mut self) {
        self.active = false;
        self.updated_at = Timestamp::now();
    }
}
