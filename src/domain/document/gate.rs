//! The gate rule: when is document verification sufficient?
//!
//! An applicant clears the gate when every distinct document type they have
//! uploaded has at least one verified member. The rule is evaluated over the
//! applicant's whole document set, so verifying one document can unblock
//! several pending applications at once.

use std::collections::HashMap;

use super::Document;

/// Returns true if every distinct document type in `documents` has at least
/// one verified member. An empty set does not clear the gate.
pub fn all_types_verified(documents: &[Document]) -> bool {
    if documents.is_empty() {
        return false;
    }

    let mut by_type: HashMap<&str, bool> = HashMap::new();
    for doc in documents {
        let entry = by_type.entry(doc.document_type.as_str()).or_insert(false);
        *entry |= doc.is_verified();
    }

    by_type.values().all(|verified| *verified)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::BlobHandle;
    use crate::domain::foundation::{ApplicantId, DocumentId};

    fn doc(applicant: ApplicantId, document_type: &str, verified: bool) -> Document {
        let mut doc = Document::record_upload(
            DocumentId::new(),
            applicant,
            document_type,
            "file.pdf",
            "application/pdf",
            256,
            BlobHandle::new("blob"),
        )
        .unwrap();
        if verified {
            doc.verify().unwrap();
        }
        doc
    }

    #[test]
    fn empty_set_does_not_clear_gate() {
        assert!(!all_types_verified(&[]));
    }

    #[test]
    fn single_type_clears_once_any_member_verified() {
        let applicant = ApplicantId::new();
        let docs = vec![
            doc(applicant, "payslip", false),
            doc(applicant, "payslip", true),
        ];
        assert!(all_types_verified(&docs));
    }

    #[test]
    fn unverified_type_blocks_gate() {
        let applicant = ApplicantId::new();
        let docs = vec![
            doc(applicant, "payslip", true),
            doc(applicant, "id_proof", false),
        ];
        assert!(!all_types_verified(&docs));
    }

    #[test]
    fn rejected_member_does_not_count_but_verified_sibling_does() {
        let applicant = ApplicantId::new();
        let mut rejected = doc(applicant, "id_proof", false);
        rejected.reject().unwrap();

        let docs = vec![rejected, doc(applicant, "id_proof", true)];
        assert!(all_types_verified(&docs));
    }
}
