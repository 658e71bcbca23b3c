//! RDF statements back to documents

use std::collections::HashSet;

use bibo_domain::{
    Contributor, Document, DocumentBuilder, Identifier, PersonName, PublicationDate, Role,
};
use tracing::debug;

use crate::error::DecodeError;
use crate::graph::StatementSet;
use crate::term::{Statement, Term};
use crate::vocab::{self, bibo, dcterms, foaf, rdf, skos};

/// Decode the document described by `subject`.
///
/// The subject's `rdf:type` must include a BIBO class known to
/// [`vocab::document_type_for`]. Contributors are read from the
/// `bibo:contributorList` in list order; a list that is cyclic, lacks
/// `rdf:first`/`rdf:rest`, or whose members carry no author/editor link
/// fails with [`DecodeError::BrokenList`].
pub fn decode<S: StatementSet + ?Sized>(graph: &S, subject: &Term) -> Result<Document, DecodeError> {
    if !graph.has_subject(subject) {
        return Err(DecodeError::SubjectNotFound {
            subject: subject.to_string(),
        });
    }

    let types = graph.objects(subject, rdf::TYPE);
    if types.is_empty() {
        return Err(DecodeError::MissingType {
            subject: subject.to_string(),
        });
    }
    let document_type = types
        .iter()
        .filter_map(|t| t.as_iri())
        .find_map(vocab::document_type_for)
        .ok_or_else(|| DecodeError::UnknownType {
            subject: subject.to_string(),
            found: types
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        })?;

    let date = literal(graph, subject, dcterms::ISSUED)?
        .map(|value| PublicationDate::from_iso(&value))
        .transpose()?;

    let mut builder = Document::builder()
        .document_type(document_type)
        .maybe(literal(graph, subject, dcterms::IDENTIFIER)?, DocumentBuilder::id)
        .maybe(literal(graph, subject, dcterms::TITLE)?, DocumentBuilder::title)
        .maybe(literal(graph, subject, dcterms::ALTERNATIVE)?, DocumentBuilder::subtitle)
        .maybe(literal(graph, subject, dcterms::PUBLISHER)?, DocumentBuilder::publisher)
        .maybe(literal(graph, subject, dcterms::SPATIAL)?, DocumentBuilder::place)
        .maybe(
            literal(graph, subject, dcterms::IS_PART_OF)?,
            DocumentBuilder::container_title,
        )
        .maybe(literal(graph, subject, bibo::VOLUME)?, DocumentBuilder::volume)
        .maybe(literal(graph, subject, bibo::ISSUE)?, DocumentBuilder::issue)
        .maybe(literal(graph, subject, bibo::PAGES)?, DocumentBuilder::pages)
        .maybe(homepage(graph, subject)?, DocumentBuilder::url)
        .maybe(literal(graph, subject, dcterms::LANGUAGE)?, DocumentBuilder::language)
        .maybe(literal(graph, subject, bibo::ABSTRACT)?, DocumentBuilder::abstract_text)
        .maybe(literal(graph, subject, skos::NOTE)?, DocumentBuilder::notes)
        .maybe(date, DocumentBuilder::date);

    for statement in graph.iter().filter(|s| &s.subject == subject) {
        if let Some(kind) = vocab::identifier_type_for(&statement.predicate) {
            let value = expect_literal(statement)?;
            builder = builder.add_identifier(Identifier::trusted(kind, value)?);
        }
    }

    for contributor in contributors(graph, subject)? {
        builder = builder.add_contributor(contributor);
    }

    Ok(builder.build()?)
}

/// Decode every subject typed with a known document class, in graph order
pub fn decode_all<S: StatementSet + ?Sized>(graph: &S) -> Vec<Result<Document, DecodeError>> {
    let mut seen = HashSet::new();
    let subjects: Vec<&Term> = graph
        .iter()
        .filter(|s| {
            s.predicate == rdf::TYPE
                && s.object
                    .as_iri()
                    .and_then(vocab::document_type_for)
                    .is_some()
        })
        .map(|s| &s.subject)
        .filter(|subject| seen.insert(*subject))
        .collect();

    debug!(documents = subjects.len(), "Decoding graph");
    subjects
        .into_iter()
        .map(|subject| decode(graph, subject))
        .collect()
}

fn literal<S: StatementSet + ?Sized>(
    graph: &S,
    subject: &Term,
    predicate: &str,
) -> Result<Option<String>, DecodeError> {
    match graph.object(subject, predicate) {
        None => Ok(None),
        Some(Term::Literal { value, .. }) => Ok(Some(value.clone())),
        Some(_) => Err(DecodeError::InvalidLiteral {
            subject: subject.to_string(),
            predicate: predicate.to_string(),
        }),
    }
}

fn expect_literal(statement: &Statement) -> Result<&str, DecodeError> {
    statement
        .object
        .as_literal()
        .ok_or_else(|| DecodeError::InvalidLiteral {
            subject: statement.subject.to_string(),
            predicate: statement.predicate.clone(),
        })
}

/// `foaf:homepage` may be an IRI or, for unparseable URLs, a literal
fn homepage<S: StatementSet + ?Sized>(
    graph: &S,
    subject: &Term,
) -> Result<Option<String>, DecodeError> {
    match graph.object(subject, foaf::HOMEPAGE) {
        Some(Term::Iri { iri }) => Ok(Some(iri.clone())),
        _ => literal(graph, subject, foaf::HOMEPAGE),
    }
}

fn contributors<S: StatementSet + ?Sized>(
    graph: &S,
    subject: &Term,
) -> Result<Vec<Contributor>, DecodeError> {
    let Some(head) = graph.object(subject, bibo::CONTRIBUTOR_LIST) else {
        return Ok(Vec::new());
    };

    let mut members = Vec::new();
    let mut visited = HashSet::new();
    let mut cell = head;
    while !cell.is_iri(rdf::NIL) {
        if !cell.is_node() {
            return Err(DecodeError::broken_list(cell, "list cell is a literal"));
        }
        if !visited.insert(cell) {
            return Err(DecodeError::broken_list(cell, "list cycles back on itself"));
        }
        let first = graph
            .object(cell, rdf::FIRST)
            .ok_or_else(|| DecodeError::broken_list(cell, "missing rdf:first"))?;
        if !first.is_node() {
            return Err(DecodeError::broken_list(cell, "list member is a literal"));
        }
        members.push(first);
        cell = graph
            .object(cell, rdf::REST)
            .ok_or_else(|| DecodeError::broken_list(cell, "missing rdf:rest"))?;
    }
    debug!(subject = %subject, contributors = members.len(), "Decoded contributor list");

    members
        .into_iter()
        .map(|node| contributor(graph, subject, node))
        .collect()
}

fn contributor<S: StatementSet + ?Sized>(
    graph: &S,
    subject: &Term,
    node: &Term,
) -> Result<Contributor, DecodeError> {
    let links = |predicate: &str| {
        graph.contains(&Statement::new(subject.clone(), predicate, node.clone()))
    };
    let role = if links(dcterms::CREATOR) {
        Role::Author
    } else if links(bibo::EDITOR) {
        Role::Editor
    } else {
        return Err(DecodeError::broken_list(node, "member has no author or editor link"));
    };

    let mut name = PersonName::builder();
    if let Some(full) = literal(graph, node, foaf::NAME)? {
        name = name.full_name(full);
    }
    if let Some(given) = literal(graph, node, foaf::GIVEN_NAME)? {
        name = name.given_name(given);
    }
    if let Some(family) = literal(graph, node, foaf::FAMILY_NAME)? {
        name = name.family_name(family);
    }

    Ok(Contributor::new(name.build()?, role))
}
