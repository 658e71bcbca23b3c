//! Document to RDF statements

use bibo_domain::{Document, PublicationDate, Role};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::graph::{Graph, StatementSet};
use crate::id::{SubjectIdGenerator, UuidGenerator};
use crate::term::{Statement, Term};
use crate::vocab::{self, bibo, dcterms, foaf, rdf, skos, xsd};

/// Prefix for subjects minted from document ids that are not IRIs
pub const DEFAULT_BASE_IRI: &str = "urn:bibo:document:";

/// Encoder settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    pub base_iri: String,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            base_iri: DEFAULT_BASE_IRI.to_string(),
        }
    }
}

/// Writes documents as statements over the BIBO vocabulary.
///
/// Contributors become a single `rdf:List` under `bibo:contributorList`,
/// so author and editor order survives the trip through an unordered graph.
/// Each list member is a `foaf:Person` blank node, linked from the document
/// by `dcterms:creator` (authors) or `bibo:editor` (editors).
#[derive(Debug)]
pub struct Encoder<G = UuidGenerator> {
    config: EncoderConfig,
    generator: G,
}

impl Encoder {
    pub fn new(config: EncoderConfig) -> Self {
        Self::with_generator(config, UuidGenerator)
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new(EncoderConfig::default())
    }
}

impl<G: SubjectIdGenerator> Encoder<G> {
    pub fn with_generator(config: EncoderConfig, generator: G) -> Self {
        Self { config, generator }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Subject IRI for a document.
    ///
    /// An id is used as is when it is an absolute IRI with an authority
    /// (`https://...`) or in the `urn`, `info`, `tag` or `doi` scheme. Any
    /// other id, including citation keys such as `smith:2023`, is
    /// percent-encoded under the base IRI. Without an id the subject is `urn:uuid:<token>`.
    pub fn subject_iri(&self, id: Option<&str>, token: &str) -> String {
        match id {
            Some(id) if is_subject_iri(id) => id.to_string(),
            Some(id) => format!("{}{}", self.config.base_iri, urlencoding::encode(id)),
            None => format!("urn:uuid:{}", token),
        }
    }

    /// Encode one document into `out` and return its subject
    pub fn encode<S: StatementSet + ?Sized>(&self, document: &Document, out: &mut S) -> Term {
        let token = self.generator.next_id();
        let subject = Term::iri(self.subject_iri(document.id(), &token));
        debug!(subject = %subject, token = %token, "Encoding document");

        let before = out.len();
        emit(
            out,
            &subject,
            rdf::TYPE,
            Term::iri(vocab::class_for(document.document_type())),
        );
        if let Some(id) = document.id() {
            emit(out, &subject, dcterms::IDENTIFIER, Term::literal(id));
        }
        emit(out, &subject, dcterms::TITLE, Term::literal(document.title()));

        let scalars = [
            (dcterms::ALTERNATIVE, document.subtitle()),
            (dcterms::PUBLISHER, document.publisher()),
            (dcterms::SPATIAL, document.place()),
            (dcterms::IS_PART_OF, document.container_title()),
            (bibo::VOLUME, document.volume()),
            (bibo::ISSUE, document.issue()),
            (bibo::PAGES, document.pages()),
            (dcterms::LANGUAGE, document.language()),
            (bibo::ABSTRACT, document.abstract_text()),
            (skos::NOTE, document.notes()),
        ];
        for (predicate, value) in scalars {
            if let Some(value) = value {
                emit(out, &subject, predicate, Term::literal(value));
            }
        }

        if let Some(url) = document.url() {
            let object = if parse_iri(url).is_some() {
                Term::iri(url)
            } else {
                Term::literal(url)
            };
            emit(out, &subject, foaf::HOMEPAGE, object);
        }

        if let Some(date) = document.date() {
            emit(out, &subject, dcterms::ISSUED, date_literal(&date));
        }

        for identifier in document.identifiers() {
            emit(
                out,
                &subject,
                vocab::identifier_property(identifier.kind()),
                Term::literal(identifier.value()),
            );
        }

        let contributors = document.contributors();
        if !contributors.is_empty() {
            let cells: Vec<Term> = (0..contributors.len())
                .map(|i| Term::blank(format!("{}-c{}", token, i)))
                .collect();
            emit(out, &subject, bibo::CONTRIBUTOR_LIST, cells[0].clone());

            for (i, contributor) in contributors.iter().enumerate() {
                let person = Term::blank(format!("{}-p{}", token, i));
                let rest = cells
                    .get(i + 1)
                    .cloned()
                    .unwrap_or_else(|| Term::iri(rdf::NIL));
                emit(out, &cells[i], rdf::FIRST, person.clone());
                emit(out, &cells[i], rdf::REST, rest);

                let name = contributor.name();
                emit(out, &person, rdf::TYPE, Term::iri(foaf::PERSON));
                emit(out, &person, foaf::NAME, Term::literal(name.full_name()));
                if let Some(given) = name.given_name() {
                    emit(out, &person, foaf::GIVEN_NAME, Term::literal(given));
                }
                if let Some(family) = name.family_name() {
                    emit(out, &person, foaf::FAMILY_NAME, Term::literal(family));
                }

                let role = match contributor.role() {
                    Role::Author => dcterms::CREATOR,
                    Role::Editor => bibo::EDITOR,
                };
                emit(out, &subject, role, person);
            }
        }

        debug!(
            subject = %subject,
            statements = out.len().saturating_sub(before),
            "Encoded document"
        );
        subject
    }

    /// Encode one document into a fresh graph
    pub fn encode_to_graph(&self, document: &Document) -> (Graph, Term) {
        let mut graph = Graph::new();
        let subject = self.encode(document, &mut graph);
        (graph, subject)
    }

    /// Encode several documents into one graph, returning subjects in input order
    pub fn encode_all<'a>(
        &self,
        documents: impl IntoIterator<Item = &'a Document>,
    ) -> (Graph, Vec<Term>) {
        let mut graph = Graph::new();
        let subjects = documents
            .into_iter()
            .map(|document| self.encode(document, &mut graph))
            .collect();
        (graph, subjects)
    }
}

/// Schemes whose ids are taken as subject IRIs without an authority
const VERBATIM_SCHEMES: [&str; 4] = ["urn", "info", "tag", "doi"];

/// An absolute IRI that can be written between `<` and `>` unchanged
fn parse_iri(value: &str) -> Option<Url> {
    let forbidden = |c: char| {
        c.is_whitespace()
            || c.is_control()
            || matches!(c, '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\')
    };
    if value.is_empty() || value.contains(forbidden) {
        return None;
    }
    Url::parse(value).ok()
}

fn is_subject_iri(id: &str) -> bool {
    parse_iri(id).is_some_and(|url| url.has_host() || VERBATIM_SCHEMES.contains(&url.scheme()))
}

fn emit<S: StatementSet + ?Sized>(out: &mut S, subject: &Term, predicate: &str, object: Term) {
    out.add(Statement::new(subject.clone(), predicate, object));
}

/// `dcterms:issued` value typed by the precision of the date
fn date_literal(date: &PublicationDate) -> Term {
    let datatype = match (date.month(), date.day()) {
        (Some(_), Some(_)) => xsd::DATE,
        (Some(_), None) => xsd::G_YEAR_MONTH,
        _ => xsd::G_YEAR,
    };
    Term::typed_literal(date.to_string(), datatype)
}
