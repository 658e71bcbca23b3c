//! Document domain model

use serde::Serialize;
use std::fmt;

use crate::contributor::{Contributor, Role};
use crate::date::PublicationDate;
use crate::error::ValidationError;
use crate::identifier::{Identifier, IdentifierType};
use crate::person::PersonName;
use crate::text::normalize;

/// Kind of bibliographic document
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentType {
    Article,
    Book,
    BookSection,
    Thesis,
    Report,
    ConferencePaper,
    Webpage,
    Other,
}

impl DocumentType {
    pub const ALL: [DocumentType; 8] = [
        Self::Article,
        Self::Book,
        Self::BookSection,
        Self::Thesis,
        Self::Report,
        Self::ConferencePaper,
        Self::Webpage,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Book => "book",
            Self::BookSection => "book-section",
            Self::Thesis => "thesis",
            Self::Report => "report",
            Self::ConferencePaper => "conference-paper",
            Self::Webpage => "webpage",
            Self::Other => "other",
        }
    }

    /// Parse a canonical name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|t| t.as_str() == lower)
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bibliographic document (article, book, thesis, etc.)
///
/// Only constructible through [`DocumentBuilder`]; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Document {
    id: Option<String>,
    #[serde(rename = "type")]
    document_type: DocumentType,
    title: String,
    subtitle: Option<String>,
    contributors: Vec<Contributor>,
    date: Option<PublicationDate>,
    publisher: Option<String>,
    place: Option<String>,
    container_title: Option<String>,
    volume: Option<String>,
    issue: Option<String>,
    pages: Option<String>,
    identifiers: Vec<Identifier>,
    url: Option<String>,
    language: Option<String>,
    abstract_text: Option<String>,
    notes: Option<String>,
}

impl Document {
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::default()
    }

    /// A builder pre-populated with this document's values
    pub fn to_builder(&self) -> DocumentBuilder {
        DocumentBuilder {
            id: self.id.clone(),
            document_type: Some(self.document_type),
            title: Some(self.title.clone()),
            subtitle: self.subtitle.clone(),
            contributors: self.contributors.clone(),
            date: self.date,
            publisher: self.publisher.clone(),
            place: self.place.clone(),
            container_title: self.container_title.clone(),
            volume: self.volume.clone(),
            issue: self.issue.clone(),
            pages: self.pages.clone(),
            identifiers: self.identifiers.clone(),
            url: self.url.clone(),
            language: self.language.clone(),
            abstract_text: self.abstract_text.clone(),
            notes: self.notes.clone(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn document_type(&self) -> DocumentType {
        self.document_type
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    /// All contributors in insertion order
    pub fn contributors(&self) -> &[Contributor] {
        &self.contributors
    }

    /// Authors, in the order they appear among the contributors
    pub fn authors(&self) -> Vec<&PersonName> {
        self.with_role(Role::Author)
    }

    /// Editors, in the order they appear among the contributors
    pub fn editors(&self) -> Vec<&PersonName> {
        self.with_role(Role::Editor)
    }

    fn with_role(&self, role: Role) -> Vec<&PersonName> {
        self.contributors
            .iter()
            .filter(|c| c.role() == role)
            .map(Contributor::name)
            .collect()
    }

    pub fn date(&self) -> Option<PublicationDate> {
        self.date
    }

    pub fn publisher(&self) -> Option<&str> {
        self.publisher.as_deref()
    }

    pub fn place(&self) -> Option<&str> {
        self.place.as_deref()
    }

    pub fn container_title(&self) -> Option<&str> {
        self.container_title.as_deref()
    }

    pub fn volume(&self) -> Option<&str> {
        self.volume.as_deref()
    }

    pub fn issue(&self) -> Option<&str> {
        self.issue.as_deref()
    }

    pub fn pages(&self) -> Option<&str> {
        self.pages.as_deref()
    }

    pub fn identifiers(&self) -> &[Identifier] {
        &self.identifiers
    }

    /// First identifier of the given type
    pub fn identifier(&self, kind: IdentifierType) -> Option<&Identifier> {
        self.identifiers.iter().find(|i| i.kind() == kind)
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn abstract_text(&self) -> Option<&str> {
        self.abstract_text.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

/// Builder for [`Document`].
///
/// Setters never fail; `type` and `title` are checked in [`build`](Self::build),
/// where every optional text value is trimmed and blank becomes absent.
#[derive(Clone, Debug, Default)]
pub struct DocumentBuilder {
    id: Option<String>,
    document_type: Option<DocumentType>,
    title: Option<String>,
    subtitle: Option<String>,
    contributors: Vec<Contributor>,
    date: Option<PublicationDate>,
    publisher: Option<String>,
    place: Option<String>,
    container_title: Option<String>,
    volume: Option<String>,
    issue: Option<String>,
    pages: Option<String>,
    identifiers: Vec<Identifier>,
    url: Option<String>,
    language: Option<String>,
    abstract_text: Option<String>,
    notes: Option<String>,
}

impl DocumentBuilder {
    /// Apply a setter only when a value is present
    pub fn maybe<T>(self, value: Option<T>, apply: impl FnOnce(Self, T) -> Self) -> Self {
        match value {
            Some(v) => apply(self, v),
            None => self,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn document_type(mut self, document_type: DocumentType) -> Self {
        self.document_type = Some(document_type);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn add_contributor(mut self, contributor: Contributor) -> Self {
        self.contributors.push(contributor);
        self
    }

    pub fn add_author(self, name: PersonName) -> Self {
        self.add_contributor(Contributor::author(name))
    }

    pub fn add_editor(self, name: PersonName) -> Self {
        self.add_contributor(Contributor::editor(name))
    }

    pub fn date(mut self, date: PublicationDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = Some(publisher.into());
        self
    }

    pub fn place(mut self, place: impl Into<String>) -> Self {
        self.place = Some(place.into());
        self
    }

    pub fn container_title(mut self, container_title: impl Into<String>) -> Self {
        self.container_title = Some(container_title.into());
        self
    }

    pub fn volume(mut self, volume: impl Into<String>) -> Self {
        self.volume = Some(volume.into());
        self
    }

    pub fn issue(mut self, issue: impl Into<String>) -> Self {
        self.issue = Some(issue.into());
        self
    }

    pub fn pages(mut self, pages: impl Into<String>) -> Self {
        self.pages = Some(pages.into());
        self
    }

    pub fn add_identifier(mut self, identifier: Identifier) -> Self {
        self.identifiers.push(identifier);
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn abstract_text(mut self, abstract_text: impl Into<String>) -> Self {
        self.abstract_text = Some(abstract_text.into());
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn build(self) -> Result<Document, ValidationError> {
        let document_type = self
            .document_type
            .ok_or_else(|| ValidationError::missing("type"))?;
        let title = match self.title {
            None => return Err(ValidationError::missing("title")),
            Some(raw) => normalize(Some(raw)).ok_or_else(|| ValidationError::blank("title"))?,
        };

        Ok(Document {
            id: normalize(self.id),
            document_type,
            title,
            subtitle: normalize(self.subtitle),
            contributors: self.contributors,
            date: self.date,
            publisher: normalize(self.publisher),
            place: normalize(self.place),
            container_title: normalize(self.container_title),
            volume: normalize(self.volume),
            issue: normalize(self.issue),
            pages: normalize(self.pages),
            identifiers: self.identifiers,
            url: normalize(self.url),
            language: normalize(self.language),
            abstract_text: normalize(self.abstract_text),
            notes: normalize(self.notes),
        })
    }
}
