//! Applicant aggregate - the party requesting a loan.

mod aggregate;
mod profile;

pub use aggregate::Applicant;
pub use profile::{CreditProfile, EmploymentStatus, MaritalStatus};
