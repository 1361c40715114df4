//! Document aggregate - uploaded supporting documents and the gate rule
//! deciding when verification is sufficient to unblock an application.

mod aggregate;
mod gate;
mod status;

pub use aggregate::{BlobHandle, Document};
pub use gate::all_types_verified;
pub use status::DocumentStatus;
