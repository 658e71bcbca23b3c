//! Vocabulary IRIs used by the encoder and decoder.
//!
//! Documents are typed with Bibliographic Ontology (BIBO) classes and
//! described with Dublin Core terms; people use FOAF.

use bibo_domain::{DocumentType, IdentifierType};

/// RDF namespace.
pub mod rdf {
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    pub const FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";
    pub const REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";
    pub const NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";
}

/// XML Schema datatypes.
pub mod xsd {
    pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";
    pub const G_YEAR: &str = "http://www.w3.org/2001/XMLSchema#gYear";
    pub const G_YEAR_MONTH: &str = "http://www.w3.org/2001/XMLSchema#gYearMonth";
    pub const DATE: &str = "http://www.w3.org/2001/XMLSchema#date";
}

/// Bibliographic Ontology.
pub mod bibo {
    pub const NS: &str = "http://purl.org/ontology/bibo/";

    // Classes
    pub const ACADEMIC_ARTICLE: &str = "http://purl.org/ontology/bibo/AcademicArticle";
    pub const ARTICLE: &str = "http://purl.org/ontology/bibo/Article";
    pub const BOOK: &str = "http://purl.org/ontology/bibo/Book";
    pub const BOOK_SECTION: &str = "http://purl.org/ontology/bibo/BookSection";
    pub const THESIS: &str = "http://purl.org/ontology/bibo/Thesis";
    pub const REPORT: &str = "http://purl.org/ontology/bibo/Report";
    pub const WEBPAGE: &str = "http://purl.org/ontology/bibo/Webpage";
    pub const DOCUMENT: &str = "http://purl.org/ontology/bibo/Document";

    // Properties
    pub const CONTRIBUTOR_LIST: &str = "http://purl.org/ontology/bibo/contributorList";
    pub const EDITOR: &str = "http://purl.org/ontology/bibo/editor";
    pub const VOLUME: &str = "http://purl.org/ontology/bibo/volume";
    pub const ISSUE: &str = "http://purl.org/ontology/bibo/issue";
    pub const PAGES: &str = "http://purl.org/ontology/bibo/pages";
    pub const ABSTRACT: &str = "http://purl.org/ontology/bibo/abstract";
    pub const DOI: &str = "http://purl.org/ontology/bibo/doi";
    pub const ISBN10: &str = "http://purl.org/ontology/bibo/isbn10";
    pub const ISBN13: &str = "http://purl.org/ontology/bibo/isbn13";
    pub const ISSN: &str = "http://purl.org/ontology/bibo/issn";
    pub const HANDLE: &str = "http://purl.org/ontology/bibo/handle";
    pub const URI: &str = "http://purl.org/ontology/bibo/uri";
    pub const IDENTIFIER: &str = "http://purl.org/ontology/bibo/identifier";
}

/// Dublin Core terms.
pub mod dcterms {
    pub const NS: &str = "http://purl.org/dc/terms/";
    pub const IDENTIFIER: &str = "http://purl.org/dc/terms/identifier";
    pub const TITLE: &str = "http://purl.org/dc/terms/title";
    pub const ALTERNATIVE: &str = "http://purl.org/dc/terms/alternative";
    pub const CREATOR: &str = "http://purl.org/dc/terms/creator";
    pub const ISSUED: &str = "http://purl.org/dc/terms/issued";
    pub const PUBLISHER: &str = "http://purl.org/dc/terms/publisher";
    pub const SPATIAL: &str = "http://purl.org/dc/terms/spatial";
    pub const IS_PART_OF: &str = "http://purl.org/dc/terms/isPartOf";
    pub const LANGUAGE: &str = "http://purl.org/dc/terms/language";
}

/// Friend of a Friend.
pub mod foaf {
    pub const NS: &str = "http://xmlns.com/foaf/0.1/";
    pub const PERSON: &str = "http://xmlns.com/foaf/0.1/Person";
    pub const NAME: &str = "http://xmlns.com/foaf/0.1/name";
    pub const GIVEN_NAME: &str = "http://xmlns.com/foaf/0.1/givenName";
    pub const FAMILY_NAME: &str = "http://xmlns.com/foaf/0.1/familyName";
    pub const HOMEPAGE: &str = "http://xmlns.com/foaf/0.1/homepage";
}

pub mod skos {
    pub const NOTE: &str = "http://www.w3.org/2004/02/skos/core#note";
}

pub mod schema {
    pub const URL: &str = "http://schema.org/url";
}

/// BIBO class for a document type
pub fn class_for(document_type: DocumentType) -> &'static str {
    match document_type {
        DocumentType::Article => bibo::ACADEMIC_ARTICLE,
        DocumentType::Book => bibo::BOOK,
        DocumentType::BookSection => bibo::BOOK_SECTION,
        DocumentType::Thesis => bibo::THESIS,
        DocumentType::Report => bibo::REPORT,
        DocumentType::ConferencePaper => bibo::ARTICLE,
        DocumentType::Webpage => bibo::WEBPAGE,
        DocumentType::Other => bibo::DOCUMENT,
    }
}

/// Document type for a BIBO class; inverse of [`class_for`]
pub fn document_type_for(class: &str) -> Option<DocumentType> {
    DocumentType::ALL
        .into_iter()
        .find(|document_type| class_for(*document_type) == class)
}

/// Property carrying identifiers of the given type
pub fn identifier_property(kind: IdentifierType) -> &'static str {
    match kind {
        IdentifierType::Doi => bibo::DOI,
        IdentifierType::Isbn10 => bibo::ISBN10,
        IdentifierType::Isbn13 => bibo::ISBN13,
        IdentifierType::Issn => bibo::ISSN,
        IdentifierType::Handle => bibo::HANDLE,
        IdentifierType::Uri => bibo::URI,
        IdentifierType::Url => schema::URL,
        IdentifierType::Other => bibo::IDENTIFIER,
    }
}

/// Identifier type carried by a property; inverse of [`identifier_property`]
pub fn identifier_type_for(property: &str) -> Option<IdentifierType> {
    IdentifierType::ALL
        .into_iter()
        .find(|kind| identifier_property(*kind) == property)
}
