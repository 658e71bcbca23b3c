//! RDF graph form of bibliographic documents
//!
//! Documents are encoded as statements over the BIBO, Dublin Core and FOAF
//! vocabularies and decoded back into [`bibo_domain::Document`]s.
//!
//! - [`Term`] and [`Statement`]: the RDF data model (IRIs, blank nodes, literals)
//! - [`StatementSet`]: the storage seam; [`Graph`] is the in-memory implementation
//! - [`Encoder`]: `Document` to statements, with an ordered contributor list
//! - [`decode`] / [`decode_all`]: statements back to `Document`s
//!
//! `Display` on terms, statements and graphs renders N-Triples.

pub mod decode;
pub mod encode;
pub mod error;
pub mod graph;
pub mod id;
pub mod term;
pub mod vocab;

pub use decode::{decode, decode_all};
pub use encode::{Encoder, EncoderConfig, DEFAULT_BASE_IRI};
pub use error::DecodeError;
pub use graph::{Graph, StatementSet};
pub use id::{SequentialGenerator, SubjectIdGenerator, UuidGenerator};
pub use term::{Statement, Term};
