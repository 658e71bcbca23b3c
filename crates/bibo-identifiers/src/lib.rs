// Allow manual modulo checks since .is_multiple_of() needs a recent toolchain
#![allow(clippy::manual_is_multiple_of)]

//! Identifier validation for bibliographic records
//!
//! This crate provides the checks applied to identifiers before they are
//! attached to a document:
//! - DOI and Handle shape validation
//! - ISBN-10, ISBN-13 and ISSN checksum validation
//! - URL/URI syntax validation
//! - Citation key slugs derived from titles

pub mod cite_key;
pub mod kind;
pub mod validators;

pub use cite_key::*;
pub use kind::*;
pub use validators::*;
