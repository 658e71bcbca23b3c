//! Error types for bibo-convert

use bibo_domain::{DateError, ValidationError};
use thiserror::Error;

/// Reasons a whole entry fails to convert
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("Unsupported entry type: {entry_type}")]
    UnsupportedType { entry_type: String },

    #[error("Missing required field: {field}")]
    MissingRequiredField { field: String },

    #[error("Invalid date: {0}")]
    InvalidDate(#[from] DateError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ConversionError {
    /// Field the failure is about, when there is one
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::UnsupportedType { .. } => None,
            Self::MissingRequiredField { field } => Some(field.as_str()),
            Self::InvalidDate(err) => err.field(),
            Self::Validation(err) => err.field(),
        }
    }
}

/// Errors loading a [`ConverterConfig`](crate::ConverterConfig)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Config value base_iri must not be blank")]
    BlankBaseIri,
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
