//! Error types for graph decoding

use bibo_domain::{DateError, ValidationError};
use thiserror::Error;

/// Reasons a subject cannot be decoded into a document
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("No statements about subject {subject}")]
    SubjectNotFound { subject: String },

    #[error("Subject {subject} has no rdf:type")]
    MissingType { subject: String },

    #[error("Subject {subject} has no known document class (found {found})")]
    UnknownType { subject: String, found: String },

    #[error("Broken contributor list at {node}: {reason}")]
    BrokenList { node: String, reason: &'static str },

    #[error("Expected a literal for <{predicate}> on {subject}")]
    InvalidLiteral { subject: String, predicate: String },

    #[error("Invalid issued date: {0}")]
    InvalidDate(#[from] DateError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl DecodeError {
    pub(crate) fn broken_list(node: impl ToString, reason: &'static str) -> Self {
        Self::BrokenList {
            node: node.to_string(),
            reason,
        }
    }
}
