//! LoanApplication aggregate - the canonical lifecycle of a loan request.

mod aggregate;
mod status;

pub use aggregate::LoanApplication;
pub use status::ApplicationStatus;
