//! End-to-end conversion tests

use bibo_bibtex::{format_entry, EntryType, SourceEntry};
use bibo_convert::{
    convert_batch, ConversionError, Converter, ConverterConfig, FallbackEntryType,
};
use bibo_domain::{DocumentType, IdentifierType, Role};
use bibo_graph::{decode, Encoder, SequentialGenerator};
use proptest::prelude::*;
use rstest::rstest;

fn proceedings_entry() -> SourceEntry {
    SourceEntry::new("smith2023", EntryType::InProceedings)
        .with_field("title", "Proceedings Example")
        .with_field("author", "Smith, Alice and Doe, Bob")
        .with_field("editor", "Editor, Evan")
        .with_field("booktitle", "Proc. of Examples")
        .with_field("year", "2023")
        .with_field("month", "feb")
        .with_field("day", "10")
        .with_field("volume", "12")
        .with_field("number", "4")
        .with_field("pages", "10-20")
        .with_field("doi", "10.1000/example-doi")
}

#[test]
fn test_proceedings_round_trip() {
    let converter = Converter::default();
    let document = converter.to_document(&proceedings_entry()).unwrap().value;
    assert_eq!(document.document_type(), DocumentType::ConferencePaper);

    let entry = converter.to_entry(&document).unwrap();
    assert_eq!(entry.entry_type, EntryType::InProceedings);
    assert_eq!(entry.cite_key, "smith2023");

    let author = entry.author().unwrap();
    assert!(author.contains("Smith, Alice"));
    assert!(author.contains("Doe, Bob"));
    assert_eq!(entry.editor(), Some("Editor, Evan"));
    assert_eq!(entry.year(), Some("2023"));
    assert_eq!(entry.field("month"), Some("feb"));
    assert_eq!(entry.field("day"), Some("10"));
    assert_eq!(entry.doi(), Some("10.1000/example-doi"));
    assert_eq!(entry.field("booktitle"), Some("Proc. of Examples"));
    assert_eq!(entry.field("number"), Some("4"));
}

#[test]
fn test_entry_round_trip_is_field_for_field() {
    let converter = Converter::default();
    let original = proceedings_entry();
    let document = converter.to_document(&original).unwrap().value;
    let entry = converter.to_entry(&document).unwrap();
    assert_eq!(entry, original);
    assert_eq!(format_entry(&entry), format_entry(&original));
}

#[test]
fn test_through_the_graph() {
    let converter = Converter::default();
    let document = converter.to_document(&proceedings_entry()).unwrap().value;

    let encoder = Encoder::with_generator(
        converter.config().encoder_config(),
        SequentialGenerator::default(),
    );
    let (graph, subject) = encoder.encode_to_graph(&document);
    let decoded = decode(&graph, &subject).unwrap();
    assert_eq!(decoded, document);

    let roles: Vec<_> = decoded.contributors().iter().map(|c| c.role()).collect();
    assert_eq!(roles, vec![Role::Author, Role::Author, Role::Editor]);
    assert_eq!(converter.to_entry(&decoded), converter.to_entry(&document));
}

#[test]
fn test_missing_title_fails_whatever_else_is_present() {
    let mut entry = proceedings_entry();
    entry.remove_field("title");
    let err = Converter::default().to_document(&entry).unwrap_err();
    assert!(matches!(err, ConversionError::MissingRequiredField { .. }));
    assert_eq!(err.field(), Some("title"));
}

#[test]
fn test_invalid_isbn_is_omitted() {
    let entry = proceedings_entry().with_field("isbn", "978-0-321-12521-8");
    let converted = Converter::default().to_document(&entry).unwrap();
    assert!(converted.value.identifier(IdentifierType::Isbn13).is_none());
    assert!(converted.value.identifier(IdentifierType::Doi).is_some());
    assert_eq!(converted.warnings.len(), 1);
}

#[rstest]
#[case("0378-5955", true)]
#[case("0378-5954", false)]
#[case("2434-561X", true)]
fn test_issn_field(#[case] issn: &str, #[case] kept: bool) {
    let entry = SourceEntry::new("j", EntryType::Article)
        .with_field("title", "T")
        .with_field("issn", issn);
    let document = Converter::default().to_document(&entry).unwrap().value;
    assert_eq!(document.identifier(IdentifierType::Issn).is_some(), kept);
}

#[rstest]
#[case(EntryType::InBook, DocumentType::BookSection, EntryType::InCollection)]
#[case(EntryType::Proceedings, DocumentType::ConferencePaper, EntryType::InProceedings)]
#[case(EntryType::MastersThesis, DocumentType::Thesis, EntryType::PhdThesis)]
#[case(EntryType::TechReport, DocumentType::Report, EntryType::TechReport)]
#[case(EntryType::Booklet, DocumentType::Other, EntryType::Misc)]
#[case(EntryType::Unpublished, DocumentType::Other, EntryType::Misc)]
fn test_type_mapping(
    #[case] source: EntryType,
    #[case] target: DocumentType,
    #[case] back: EntryType,
) {
    let converter = Converter::default();
    let entry = SourceEntry::new("k", source).with_field("title", "T");
    let document = converter.to_document(&entry).unwrap().value;
    assert_eq!(document.document_type(), target);
    assert_eq!(converter.to_entry(&document).unwrap().entry_type, back);
}

#[rstest]
#[case(None, None)]
#[case(Some(FallbackEntryType::Online), Some(EntryType::Online))]
#[case(Some(FallbackEntryType::Misc), Some(EntryType::Misc))]
fn test_webpage_fallback(
    #[case] fallback: Option<FallbackEntryType>,
    #[case] expected: Option<EntryType>,
) {
    let config = ConverterConfig {
        fallback_entry_type: fallback,
        ..ConverterConfig::default()
    };
    let converter = Converter::new(config);
    let entry = SourceEntry::new("w", EntryType::Online).with_field("title", "A Page");
    let document = converter.to_document(&entry).unwrap().value;
    assert_eq!(document.document_type(), DocumentType::Webpage);
    assert_eq!(converter.to_entry(&document).map(|e| e.entry_type), expected);
}

#[test]
fn test_config_from_toml_drives_conversion() {
    let config = ConverterConfig::from_toml_str(
        r#"
        fallback_entry_type = "online"
        base_iri = "https://bib.example.org/"
        "#,
    )
    .unwrap();
    let converter = Converter::new(config);
    assert_eq!(
        converter.config().encoder_config().base_iri,
        "https://bib.example.org/"
    );
    assert!(converter.supports(DocumentType::Webpage));
}

#[test]
fn test_batch_report() {
    let entries = vec![
        proceedings_entry(),
        SourceEntry::new("untitled", EntryType::Misc),
        proceedings_entry().with_field("title", "Again"),
        SourceEntry::new("odd", EntryType::parse("patent")).with_field("title", "T"),
    ];
    let report = convert_batch(&Converter::default(), &entries);
    let summary = report.summary();
    assert_eq!(summary.converted, 1);
    assert_eq!(summary.failed, 2);
    assert_eq!(summary.skipped, 1);
    assert_eq!(report.documents[0].title(), "Proceedings Example");
    assert!(matches!(
        report.failures[1].error,
        ConversionError::UnsupportedType { .. }
    ));
}

fn name_part() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,8}"
}

proptest! {
    #[test]
    fn author_lists_survive_conversion(
        names in prop::collection::vec((name_part(), name_part()), 1..6)
    ) {
        let author = names
            .iter()
            .map(|(family, given)| format!("{}, {}", family, given))
            .collect::<Vec<_>>()
            .join(" and ");
        let entry = SourceEntry::new("p", EntryType::Article)
            .with_field("title", "T")
            .with_field("author", author.as_str());

        let converter = Converter::default();
        let document = converter.to_document(&entry).unwrap().value;
        prop_assert_eq!(document.authors().len(), names.len());
        let back = converter.to_entry(&document).unwrap();
        prop_assert_eq!(back.author(), Some(author.as_str()));
    }
}
