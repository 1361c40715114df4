//! Blob storage adapters.

mod in_memory;
mod local;

pub use in_memory::InMemoryBlobStorage;
pub use local::LocalBlobStorage;
