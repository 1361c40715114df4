//! In-memory repository adapters.
//!
//! Deterministic, strongly read-after-write stores for tests and
//! development. Production deployments swap these for database-backed
//! implementations of the same ports.

mod applicant_repository;
mod document_repository;
mod loan_repository;
mod rate_override_store;

pub use applicant_repository::InMemoryApplicantRepository;
pub use document_repository::InMemoryDocumentRepository;
pub use loan_repository::InMemoryLoanApplicationRepository;
pub use rate_override_store::InMemoryRateOverrideStore;
