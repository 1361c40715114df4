//! Adapters - infrastructure implementations of the ports.

mod memory;
mod notification;
mod storage;

pub use memory::{
    InMemoryApplicantRepository, InMemoryDocumentRepository, InMemoryLoanApplicationRepository,
    InMemoryRateOverrideStore,
};
pub use notification::{RecordingNotificationSink, TracingNotificationSink};
pub use storage::{InMemoryBlobStorage, LocalBlobStorage};
