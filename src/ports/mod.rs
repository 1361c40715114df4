//! Ports - interfaces the domain consumes and produces to.
//!
//! The core depends on these traits; adapters provide the implementations.
//! Repositories are assumed to give strong read-after-write consistency
//! within a single request. Failures propagate to the caller; retries, if
//! any, belong to the storage collaborator.

mod applicant_repository;
mod blob_storage;
mod document_repository;
mod loan_repository;
mod notification_sink;
mod rate_override_store;

pub use applicant_repository::ApplicantRepository;
pub use blob_storage::{BlobStorage, StorageError};
pub use document_repository::DocumentRepository;
pub use loan_repository::LoanApplicationRepository;
pub use notification_sink::NotificationSink;
pub use rate_override_store::RateOverrideStore;
