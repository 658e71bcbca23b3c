//! BibTeX to BIBO conversion
//!
//! [`Converter`] maps [`SourceEntry`] records to [`Document`]s and back.
//! Entry types are translated through one static table ([`type_map`]);
//! invalid identifiers are dropped with a warning while a missing title,
//! an unsupported type or a bad date fail the whole entry.
//!
//! [`convert_batch`] runs the forward direction over many entries in
//! parallel and reports successes, failures and skipped duplicates.
//!
//! [`SourceEntry`]: bibo_bibtex::SourceEntry
//! [`Document`]: bibo_domain::Document

pub mod batch;
pub mod config;
pub mod converter;
pub mod error;
pub mod type_map;

pub use batch::{convert_batch, BatchReport, BatchSummary, EntryFailure, EntryWarning};
pub use config::{ConverterConfig, FallbackEntryType};
pub use converter::{ConversionWarning, Converted, Converter};
pub use error::{ConfigError, ConversionError};
