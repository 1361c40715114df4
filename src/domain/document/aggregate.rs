//! Document aggregate entity.
//!
//! # Invariants
//!
//! - `application_id` is set at most once (append-only linkage): a document
//!   uploaded before submission is claimed by the next submission; later
//!   uploads stay unlinked until a future submission claims them
//! - Status changes only through officer verify/reject actions

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    ApplicantId, ApplicationId, DocumentId, DomainError, StateMachine, Timestamp, ValidationError,
};

use super::DocumentStatus;

/// Opaque handle to document bytes held by the blob-storage collaborator.
/// The core never holds raw bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlobHandle(String);

impl BlobHandle {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An uploaded supporting document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,

    pub applicant_id: ApplicantId,

    /// The application this document supports. Nullable until a submission
    /// claims it; immutable once set.
    pub application_id: Option<ApplicationId>,

    /// Free-form category, e.g. "id_proof", "payslip".
    pub document_type: String,

    pub file_name: String,

    pub content_type: String,

    pub size_bytes: u64,

    /// Storage handle; bytes live behind the blob-storage port.
    pub blob: BlobHandle,

    pub status: DocumentStatus,

    pub uploaded_at: Timestamp,
}

impl Document {
    /// Records a fresh upload in `Uploaded` status.
    ///
    /// The caller has already stored the bytes and validated them non-empty;
    /// this constructor re-checks the cheap invariants.
    pub fn record_upload(
        id: DocumentId,
        applicant_id: ApplicantId,
        document_type: impl Into<String>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        size_bytes: u64,
        blob: BlobHandle,
    ) -> Result<Self, ValidationError> {
        let document_type = document_type.into();
        if document_type.trim().is_empty() {
            return Err(ValidationError::empty_field("document_type"));
        }
        if size_bytes == 0 {
            return Err(ValidationError::invalid_format("file", "file is empty"));
        }
        Ok(Self {
            id,
            applicant_id,
            application_id: None,
            document_type,
            file_name: file_name.into(),
            content_type: content_type.into(),
            size_bytes,
            blob,
            status: DocumentStatus::Uploaded,
            uploaded_at: Timestamp::now(),
        })
    }

    /// Links this document to an application. The linkage is append-only:
    /// linking an already-linked document is an illegal state, not an update.
    pub fn link_to_application(&mut self, application_id: ApplicationId) -> Result<(), DomainError> {
        if let Some(existing) = self.application_id {
            return Err(DomainError::illegal_state(
                format!("Document is already linked to application {}", existing),
                self.status.label(),
            ));
        }
        self.application_id = Some(application_id);
        Ok(())
    }

    /// Officer accepts the document.
    pub fn verify(&mut self) -> Result<(), DomainError> {
        self.status = self.status.transition_to(DocumentStatus::Verified)?;
        Ok(())
    }

    /// Officer declines the document. Also legal on a verified document:
    /// rejection retracts the earlier verification.
    pub fn reject(&mut self) -> Result<(), DomainError> {
        self.status = self.status.transition_to(DocumentStatus::Rejected)?;
        Ok(())
    }

    pub fn is_verified(&self) -> bool {
        self.status == DocumentStatus::Verified
    }

    pub fn is_unlinked(&self) -> bool {
        self.application_id.is_none()
    }
}
