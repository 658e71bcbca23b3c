//! Validated identifiers

use bibo_identifiers::{validate, IdentifierError};
use serde::Serialize;

pub use bibo_identifiers::IdentifierType;

use crate::error::ValidationError;

/// A typed identifier whose value passed validation
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Identifier {
    #[serde(rename = "type")]
    kind: IdentifierType,
    value: String,
}

impl Identifier {
    /// Validate `raw` (shape and checksum) and keep its normalized form
    pub fn new(kind: IdentifierType, raw: &str) -> Result<Self, IdentifierError> {
        let value = validate(kind, raw)?;
        Ok(Self { kind, value })
    }

    /// Accept a value that was validated earlier (e.g. before it was stored).
    ///
    /// Only trimming and the non-blank rule are applied.
    pub fn trusted(kind: IdentifierType, value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::blank(kind.as_str()));
        }
        Ok(Self {
            kind,
            value: trimmed.to_string(),
        })
    }

    pub fn kind(&self) -> IdentifierType {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}
