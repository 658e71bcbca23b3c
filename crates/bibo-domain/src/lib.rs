//! Bibliographic document model
//!
//! This crate provides the target-side model that BibTeX entries are
//! converted into:
//! - Document: an article, book, thesis, etc. built through a validating builder
//! - PersonName and Contributor: ordered authors and editors
//! - Identifier: DOI, ISBN, ISSN, ... validated on construction
//! - PublicationDate: a partial (year, month?, day?) date
//!
//! All types are immutable once built.

pub mod contributor;
pub mod date;
pub mod document;
pub mod error;
pub mod identifier;
pub mod person;
mod text;

pub use contributor::*;
pub use date::*;
pub use document::*;
pub use error::*;
pub use identifier::*;
pub use person::*;
