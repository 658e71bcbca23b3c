//! BibTeX entry model and formatting
//!
//! Parsing `.bib` text is done upstream; this crate holds the parsed
//! form ([`SourceEntry`]) that the converter consumes and produces, and a
//! formatter that writes entries back out as BibTeX text.

mod entry;
mod formatter;

pub use entry::{EntryType, SourceEntry};
pub use formatter::{format_entries, format_entry};
