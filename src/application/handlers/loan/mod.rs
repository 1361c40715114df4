//! Loan lifecycle command handlers.

mod approve_application;
mod list_applications;
mod mark_documents_verified;
mod reject_application;
mod submit_application;

pub use approve_application::{
    ApproveApplicationCommand, ApproveApplicationHandler, ApproveApplicationResult,
};
pub use list_applications::{ListApplicationsHandler, ListApplicationsQuery};
pub use mark_documents_verified::{
    MarkDocumentsVerifiedCommand, MarkDocumentsVerifiedHandler, MarkDocumentsVerifiedResult,
};
pub use reject_application::{
    RejectApplicationCommand, RejectApplicationHandler, RejectApplicationResult,
};
pub use submit_application::{
    SubmitApplicationCommand, SubmitApplicationHandler, SubmitApplicationResult,
};
