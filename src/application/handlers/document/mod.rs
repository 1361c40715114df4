//! Document command handlers.

mod download_document;
mod list_documents;
mod reject_document;
mod upload_document;
mod verify_document;

pub use download_document::{DownloadDocumentCommand, DownloadDocumentHandler, DownloadDocumentResult};
pub use list_documents::{ListDocumentsHandler, ListDocumentsQuery};
pub use reject_document::{RejectDocumentCommand, RejectDocumentHandler, RejectDocumentResult};
pub use upload_document::{UploadDocumentCommand, UploadDocumentHandler, UploadDocumentResult};
pub use verify_document::{VerifyDocumentCommand, VerifyDocumentHandler, VerifyDocumentResult};
