//! Per-applicant lock registry.
//!
//! Serializes lifecycle transitions per applicant: an applicant's
//! applications and documents are only mutated while holding that
//! applicant's lock, so concurrent transitions on the same application
//! observe each other's writes. Different applicants never contend.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::foundation::ApplicantId;

/// Registry handing out one async mutex per applicant.
#[derive(Debug, Clone, Default)]
pub struct ApplicantLockRegistry {
    locks: Arc<Mutex<HashMap<ApplicantId, Arc<Mutex<()>>>>>,
}

impl ApplicantLockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the lock for an applicant, creating it on first use.
    ///
    /// The guard is owned, so it can be held across await points inside a
    /// handler without borrowing the registry.
    pub async fn acquire(&self, applicant_id: &ApplicantId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            locks
                .entry(*applicant_id)
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }
}
