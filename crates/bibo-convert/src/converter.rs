//! Entry ↔ document conversion
//!
//! Field correspondence, entry → document:
//!
//! | BibTeX field                                      | Document field    |
//! |---------------------------------------------------|-------------------|
//! | citation key                                      | id                |
//! | `journal`, else `booktitle`                       | container title   |
//! | `publisher`, else `school`/`institution`/`organization` | publisher   |
//! | `address`                                         | place             |
//! | `number`, else `issue`                            | issue             |
//! | `note`                                            | notes             |
//! | `doi`, `isbn`, `issn`, `url`                      | identifiers       |
//!
//! Other fields (`subtitle`, `volume`, `pages`, `url`, `language`,
//! `abstract`) keep their names.

use std::fmt;

use bibo_bibtex::{EntryType, SourceEntry};
use bibo_domain::{
    format_name_list, parse_name_list, Contributor, Document, DocumentBuilder, DocumentType,
    Identifier, IdentifierType, PublicationDate,
};
use bibo_graph::Encoder;
use bibo_identifiers::{classify_isbn, slugify_title};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ConverterConfig;
use crate::error::ConversionError;
use crate::type_map;

/// A conversion result with the non-fatal problems met on the way
#[derive(Debug, Clone, PartialEq)]
pub struct Converted<T> {
    pub value: T,
    pub warnings: Vec<ConversionWarning>,
}

impl<T> Converted<T> {
    pub fn into_value(self) -> T {
        self.value
    }
}

/// An entry field that was dropped during conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionWarning {
    pub field: String,
    pub value: String,
    pub message: String,
}

impl fmt::Display for ConversionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dropped {} '{}': {}", self.field, self.value, self.message)
    }
}

/// Stateless BibTeX ↔ document converter
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConverterConfig,
}

impl Converter {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Graph encoder using this converter's base IRI
    pub fn encoder(&self) -> Encoder {
        Encoder::new(self.config.encoder_config())
    }

    /// Convert a BibTeX entry into a document.
    ///
    /// Fails on an unknown entry type, a missing or blank title, or an
    /// invalid date. Invalid identifiers are left out and reported as
    /// warnings instead.
    pub fn to_document(
        &self,
        entry: &SourceEntry,
    ) -> Result<Converted<Document>, ConversionError> {
        debug!(cite_key = %entry.cite_key, entry_type = %entry.entry_type, "Converting entry");

        let document_type = type_map::document_type_for(&entry.entry_type).ok_or_else(|| {
            ConversionError::UnsupportedType {
                entry_type: entry.entry_type.to_string(),
            }
        })?;

        let title = value(entry, "title").ok_or_else(|| ConversionError::MissingRequiredField {
            field: "title".to_string(),
        })?;

        let date = PublicationDate::parse_fields(
            value(entry, "year"),
            value(entry, "month"),
            value(entry, "day"),
        )?;

        let mut builder = Document::builder()
            .document_type(document_type)
            .title(title)
            .id(entry.cite_key.as_str())
            .maybe(value(entry, "subtitle"), DocumentBuilder::subtitle)
            .maybe(date, DocumentBuilder::date)
            .maybe(first_value(entry, &["journal", "booktitle"]), DocumentBuilder::container_title)
            .maybe(
                first_value(entry, &["publisher", "school", "institution", "organization"]),
                DocumentBuilder::publisher,
            )
            .maybe(value(entry, "address"), DocumentBuilder::place)
            .maybe(value(entry, "volume"), DocumentBuilder::volume)
            .maybe(first_value(entry, &["number", "issue"]), DocumentBuilder::issue)
            .maybe(value(entry, "pages"), DocumentBuilder::pages)
            .maybe(value(entry, "url"), DocumentBuilder::url)
            .maybe(value(entry, "language"), DocumentBuilder::language)
            .maybe(value(entry, "abstract"), DocumentBuilder::abstract_text)
            .maybe(value(entry, "note"), DocumentBuilder::notes);

        let authors = entry.author().map(parse_name_list).unwrap_or_default();
        let editors = entry.editor().map(parse_name_list).unwrap_or_default();
        for name in authors {
            builder = builder.add_contributor(Contributor::author(name));
        }
        for name in editors {
            builder = builder.add_contributor(Contributor::editor(name));
        }

        let mut warnings = Vec::new();
        let candidates = [
            ("doi", Some(IdentifierType::Doi)),
            ("isbn", None),
            ("issn", Some(IdentifierType::Issn)),
            ("url", Some(IdentifierType::Url)),
        ];
        for (field, kind) in candidates {
            let Some(raw) = value(entry, field) else {
                continue;
            };
            let kind = kind
                .or_else(|| classify_isbn(raw))
                .unwrap_or(IdentifierType::Isbn13);
            match Identifier::new(kind, raw) {
                Ok(identifier) => builder = builder.add_identifier(identifier),
                Err(err) => {
                    warn!(
                        cite_key = %entry.cite_key,
                        field,
                        value = raw,
                        error = %err,
                        "Dropping invalid identifier"
                    );
                    warnings.push(ConversionWarning {
                        field: field.to_string(),
                        value: raw.to_string(),
                        message: err.to_string(),
                    });
                }
            }
        }

        let document = builder.build()?;
        debug!(
            cite_key = %entry.cite_key,
            document_type = %document.document_type(),
            warnings = warnings.len(),
            "Converted entry"
        );
        Ok(Converted {
            value: document,
            warnings,
        })
    }

    /// Whether documents of this type convert back to an entry
    pub fn supports(&self, document_type: DocumentType) -> bool {
        type_map::entry_type_for(document_type).is_some()
            || self.config.fallback_entry_type.is_some()
    }

    /// Convert a document back into a BibTeX entry.
    ///
    /// Returns `None` when the document type has no BibTeX analogue and no
    /// fallback is configured. Identifiers are written as stored.
    pub fn to_entry(&self, document: &Document) -> Option<SourceEntry> {
        let entry_type = type_map::entry_type_for(document.document_type()).or_else(|| {
            self.config
                .fallback_entry_type
                .map(|fallback| fallback.entry_type())
        });
        let Some(entry_type) = entry_type else {
            debug!(
                document_type = %document.document_type(),
                "No entry type for document"
            );
            return None;
        };

        let cite_key = match document.id() {
            Some(id) => id.to_string(),
            None => slugify_title(document.title()),
        };
        let mut entry = SourceEntry::new(cite_key, entry_type);
        entry.set_field("title", document.title());

        let authors = document.authors();
        if !authors.is_empty() {
            entry.set_field("author", format_name_list(authors));
        }
        let editors = document.editors();
        if !editors.is_empty() {
            entry.set_field("editor", format_name_list(editors));
        }

        if let Some(date) = document.date() {
            entry.set_field("year", format!("{:04}", date.year()));
            if let Some(month) = date.month_abbreviation() {
                entry.set_field("month", month);
            }
            if let Some(day) = date.day() {
                entry.set_field("day", day.to_string());
            }
        }

        if let Some(container) = document.container_title() {
            let field = match entry.entry_type {
                EntryType::Article => "journal",
                _ => "booktitle",
            };
            entry.set_field(field, container);
        }
        if let Some(publisher) = document.publisher() {
            let field = match &entry.entry_type {
                t if t.is_thesis() => "school",
                EntryType::TechReport => "institution",
                _ => "publisher",
            };
            entry.set_field(field, publisher);
        }

        let scalars = [
            ("subtitle", document.subtitle()),
            ("address", document.place()),
            ("volume", document.volume()),
            ("number", document.issue()),
            ("pages", document.pages()),
            ("url", document.url()),
            ("language", document.language()),
            ("abstract", document.abstract_text()),
            ("note", document.notes()),
        ];
        for (field, value) in scalars {
            if let Some(value) = value {
                entry.set_field(field, value);
            }
        }

        let identifiers = [
            ("doi", &[IdentifierType::Doi][..]),
            ("isbn", &[IdentifierType::Isbn13, IdentifierType::Isbn10][..]),
            ("issn", &[IdentifierType::Issn][..]),
            ("url", &[IdentifierType::Url][..]),
        ];
        for (field, kinds) in identifiers {
            if entry.field(field).is_some() {
                continue;
            }
            if let Some(identifier) = kinds.iter().find_map(|kind| document.identifier(*kind)) {
                entry.set_field(field, identifier.value());
            }
        }

        Some(entry)
    }
}

/// Trimmed field value; blank counts as absent
fn value<'a>(entry: &'a SourceEntry, field: &str) -> Option<&'a str> {
    entry.field(field).map(str::trim).filter(|v| !v.is_empty())
}

fn first_value<'a>(entry: &'a SourceEntry, fields: &[&str]) -> Option<&'a str> {
    fields.iter().find_map(|field| value(entry, field))
}
