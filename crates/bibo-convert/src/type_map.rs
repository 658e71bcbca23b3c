//! Entry type ↔ document type table
//!
//! Both directions live here so they cannot drift apart: every entry type
//! whose document type has a canonical entry type maps back to itself or
//! to a sibling with the same document type.

use bibo_bibtex::EntryType;
use bibo_domain::DocumentType;

/// Document type for a BibTeX entry type; `None` for unknown types
pub fn document_type_for(entry_type: &EntryType) -> Option<DocumentType> {
    let document_type = match entry_type {
        EntryType::Article => DocumentType::Article,
        EntryType::Book => DocumentType::Book,
        EntryType::InBook | EntryType::InCollection => DocumentType::BookSection,
        EntryType::InProceedings | EntryType::Proceedings => DocumentType::ConferencePaper,
        EntryType::MastersThesis | EntryType::PhdThesis => DocumentType::Thesis,
        EntryType::TechReport => DocumentType::Report,
        EntryType::Online => DocumentType::Webpage,
        EntryType::Booklet | EntryType::Manual | EntryType::Unpublished | EntryType::Misc => {
            DocumentType::Other
        }
        EntryType::Unknown(_) => return None,
    };
    Some(document_type)
}

/// Canonical BibTeX entry type for a document type.
///
/// Webpages have no BibTeX analogue here; callers decide on a fallback.
pub fn entry_type_for(document_type: DocumentType) -> Option<EntryType> {
    match document_type {
        DocumentType::Article => Some(EntryType::Article),
        DocumentType::Book => Some(EntryType::Book),
        DocumentType::BookSection => Some(EntryType::InCollection),
        DocumentType::ConferencePaper => Some(EntryType::InProceedings),
        DocumentType::Thesis => Some(EntryType::PhdThesis),
        DocumentType::Report => Some(EntryType::TechReport),
        DocumentType::Other => Some(EntryType::Misc),
        DocumentType::Webpage => None,
    }
}
