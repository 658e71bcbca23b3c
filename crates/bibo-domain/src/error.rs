//! Error types for the document model

use bibo_identifiers::IdentifierError;
use thiserror::Error;

/// A required field or shape violation found while building a model value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field '{field}'")]
    MissingField { field: String },

    #[error("Field '{field}' must not be blank")]
    BlankField { field: String },

    #[error("Invalid identifier: {0}")]
    Identifier(#[from] IdentifierError),
}

impl ValidationError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn blank(field: impl Into<String>) -> Self {
        Self::BlankField {
            field: field.into(),
        }
    }

    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField { field } | Self::BlankField { field } => Some(field.as_str()),
            Self::Identifier(err) => err.field(),
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Self::MissingField { .. } | Self::BlankField { .. } => None,
            Self::Identifier(err) => err.value(),
        }
    }
}

/// A calendar or grammar violation in a publication date
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Invalid year '{value}'")]
    InvalidYear { value: String },

    #[error("Invalid month '{value}'")]
    InvalidMonth { value: String },

    #[error("Invalid day '{value}' for {year:04}-{month:02}")]
    InvalidDay { value: String, year: i32, month: u8 },

    #[error("Field '{field}' given without '{requires}'")]
    MissingComponent {
        field: &'static str,
        requires: &'static str,
    },
}

impl DateError {
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidYear { .. } => Some("year"),
            Self::InvalidMonth { .. } => Some("month"),
            Self::InvalidDay { .. } => Some("day"),
            Self::MissingComponent { field, .. } => Some(*field),
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Self::InvalidYear { value }
            | Self::InvalidMonth { value }
            | Self::InvalidDay { value, .. } => Some(value.as_str()),
            Self::MissingComponent { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bibo_identifiers::IdentifierType;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::missing("title");
        assert_eq!(err.to_string(), "Missing required field 'title'");
        assert_eq!(err.field(), Some("title"));
        assert_eq!(err.value(), None);
    }

    #[test]
    fn test_identifier_error_is_field_scoped() {
        let err: ValidationError = IdentifierError::InvalidFormat {
            kind: IdentifierType::Doi,
            value: "nature12373".to_string(),
        }
        .into();
        assert_eq!(err.field(), Some("doi"));
        assert_eq!(err.value(), Some("nature12373"));
    }

    #[test]
    fn test_date_error_display() {
        let err = DateError::InvalidDay {
            value: "29".to_string(),
            year: 2023,
            month: 2,
        };
        assert_eq!(err.to_string(), "Invalid day '29' for 2023-02");
        assert_eq!(err.field(), Some("day"));

        let err = DateError::MissingComponent {
            field: "day",
            requires: "month",
        };
        assert_eq!(err.field(), Some("day"));
        assert_eq!(err.value(), None);
    }
}
