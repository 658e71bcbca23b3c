//! Converter configuration
//!
//! Loaded from TOML; every key is optional.
//!
//! ```toml
//! fallback_entry_type = "online"
//! base_iri = "https://example.org/bib/"
//! ```

use bibo_bibtex::EntryType;
use bibo_graph::{EncoderConfig, DEFAULT_BASE_IRI};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Entry type used for documents without a BibTeX analogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackEntryType {
    Online,
    Misc,
}

impl FallbackEntryType {
    pub fn entry_type(&self) -> EntryType {
        match self {
            Self::Online => EntryType::Online,
            Self::Misc => EntryType::Misc,
        }
    }
}

/// Converter settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Entry type for document types with no mapping; `None` drops them
    pub fallback_entry_type: Option<FallbackEntryType>,
    /// Prefix for subject IRIs minted from document ids
    pub base_iri: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            fallback_entry_type: None,
            base_iri: DEFAULT_BASE_IRI.to_string(),
        }
    }
}

impl ConverterConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        if config.base_iri.trim().is_empty() {
            return Err(ConfigError::BlankBaseIri);
        }
        Ok(config)
    }

    pub fn with_fallback(mut self, fallback: FallbackEntryType) -> Self {
        self.fallback_entry_type = Some(fallback);
        self
    }

    /// Settings for a graph encoder sharing this configuration
    pub fn encoder_config(&self) -> EncoderConfig {
        EncoderConfig {
            base_iri: self.base_iri.clone(),
        }
    }
}
