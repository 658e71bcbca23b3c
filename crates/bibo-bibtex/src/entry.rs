//! BibTeX entry data structures

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// BibTeX entry type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryType {
    Article,
    Book,
    InBook,
    InCollection,
    InProceedings,
    Proceedings,
    Booklet,
    Manual,
    MastersThesis,
    PhdThesis,
    TechReport,
    Unpublished,
    Misc,
    Online,
    /// A type outside the standard set, kept as written (lower-cased)
    Unknown(String),
}

impl EntryType {
    /// Every standard entry type
    pub const STANDARD: [EntryType; 14] = [
        Self::Article,
        Self::Book,
        Self::InBook,
        Self::InCollection,
        Self::InProceedings,
        Self::Proceedings,
        Self::Booklet,
        Self::Manual,
        Self::MastersThesis,
        Self::PhdThesis,
        Self::TechReport,
        Self::Unpublished,
        Self::Misc,
        Self::Online,
    ];

    /// Parse an entry type from a string (case-insensitive)
    pub fn parse(s: &str) -> Self {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "article" => Self::Article,
            "book" => Self::Book,
            "inbook" => Self::InBook,
            "incollection" => Self::InCollection,
            "inproceedings" | "conference" => Self::InProceedings,
            "proceedings" => Self::Proceedings,
            "booklet" => Self::Booklet,
            "manual" => Self::Manual,
            "mastersthesis" => Self::MastersThesis,
            "phdthesis" => Self::PhdThesis,
            "techreport" => Self::TechReport,
            "unpublished" => Self::Unpublished,
            "misc" => Self::Misc,
            "online" | "electronic" | "www" => Self::Online,
            _ => Self::Unknown(lower),
        }
    }

    /// Canonical BibTeX spelling
    pub fn as_str(&self) -> &str {
        match self {
            Self::Article => "article",
            Self::Book => "book",
            Self::InBook => "inbook",
            Self::InCollection => "incollection",
            Self::InProceedings => "inproceedings",
            Self::Proceedings => "proceedings",
            Self::Booklet => "booklet",
            Self::Manual => "manual",
            Self::MastersThesis => "mastersthesis",
            Self::PhdThesis => "phdthesis",
            Self::TechReport => "techreport",
            Self::Unpublished => "unpublished",
            Self::Misc => "misc",
            Self::Online => "online",
            Self::Unknown(raw) => raw,
        }
    }

    pub fn is_thesis(&self) -> bool {
        matches!(self, Self::MastersThesis | Self::PhdThesis)
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed BibTeX entry
///
/// Field names are stored lower-cased; lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceEntry {
    pub cite_key: String,
    pub entry_type: EntryType,
    fields: BTreeMap<String, String>,
}

impl SourceEntry {
    /// Create a new BibTeX entry
    pub fn new(cite_key: impl Into<String>, entry_type: EntryType) -> Self {
        Self {
            cite_key: cite_key.into(),
            entry_type,
            fields: BTreeMap::new(),
        }
    }

    /// Set a field, replacing any previous value under the same name
    pub fn set_field(&mut self, key: impl AsRef<str>, value: impl Into<String>) {
        self.fields
            .insert(key.as_ref().to_lowercase(), value.into());
    }

    /// Builder-style [`set_field`](Self::set_field)
    pub fn with_field(mut self, key: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.set_field(key, value);
        self
    }

    /// Get a field value by key (case-insensitive)
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(&key.to_lowercase()).map(String::as_str)
    }

    /// First present field among `keys`
    pub fn first_field(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|key| self.field(key))
    }

    pub fn remove_field(&mut self, key: &str) -> Option<String> {
        self.fields.remove(&key.to_lowercase())
    }

    /// All fields, sorted by name
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get the title field
    pub fn title(&self) -> Option<&str> {
        self.field("title")
    }

    /// Get the author field
    pub fn author(&self) -> Option<&str> {
        self.field("author")
    }

    /// Get the editor field
    pub fn editor(&self) -> Option<&str> {
        self.field("editor")
    }

    /// Get the year field
    pub fn year(&self) -> Option<&str> {
        self.field("year")
    }

    /// Get the DOI field
    pub fn doi(&self) -> Option<&str> {
        self.field("doi")
    }
}
