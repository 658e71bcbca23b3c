//! Identifier types and validation errors

use serde::Serialize;
use std::fmt;

/// Kind of identifier attached to a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdentifierType {
    Doi,
    Isbn10,
    Isbn13,
    Issn,
    Handle,
    Uri,
    Url,
    Other,
}

impl IdentifierType {
    pub const ALL: [IdentifierType; 8] = [
        Self::Doi,
        Self::Isbn10,
        Self::Isbn13,
        Self::Issn,
        Self::Handle,
        Self::Uri,
        Self::Url,
        Self::Other,
    ];

    /// Canonical lower-case name, also used as the error field name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Doi => "doi",
            Self::Isbn10 => "isbn10",
            Self::Isbn13 => "isbn13",
            Self::Issn => "issn",
            Self::Handle => "handle",
            Self::Uri => "uri",
            Self::Url => "url",
            Self::Other => "other",
        }
    }

    /// Parse a canonical name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|kind| kind.as_str() == lower)
    }
}

impl fmt::Display for IdentifierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An identifier that failed validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
    #[error("Empty {kind} identifier")]
    Empty { kind: IdentifierType },

    #[error("Invalid {kind} format: '{value}'")]
    InvalidFormat { kind: IdentifierType, value: String },

    #[error("Checksum mismatch for {kind}: '{value}'")]
    InvalidChecksum { kind: IdentifierType, value: String },
}

impl IdentifierError {
    pub fn kind(&self) -> IdentifierType {
        match self {
            Self::Empty { kind }
            | Self::InvalidFormat { kind, .. }
            | Self::InvalidChecksum { kind, .. } => *kind,
        }
    }

    /// Field the error is scoped to (the identifier type name)
    pub fn field(&self) -> Option<&str> {
        Some(self.kind().as_str())
    }

    /// Offending raw value, if there was one
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Empty { .. } => None,
            Self::InvalidFormat { value, .. } | Self::InvalidChecksum { value, .. } => {
                Some(value.as_str())
            }
        }
    }
}
