//! Batch conversion of many entries
//!
//! Entries are converted in parallel with rayon. A failing entry is
//! recorded and the batch continues; entries whose citation key repeats an
//! earlier one are skipped, so the first occurrence wins.

use std::collections::HashSet;
use std::fmt;

use bibo_bibtex::SourceEntry;
use bibo_domain::Document;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use crate::converter::{ConversionWarning, Converter};
use crate::error::ConversionError;

/// An entry that failed to convert
#[derive(Debug, Clone, PartialEq)]
pub struct EntryFailure {
    pub cite_key: String,
    pub error: ConversionError,
}

/// A warning raised while converting a particular entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryWarning {
    pub cite_key: String,
    pub warning: ConversionWarning,
}

/// Outcome of [`convert_batch`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    /// Converted documents, in input order
    pub documents: Vec<Document>,
    pub failures: Vec<EntryFailure>,
    /// Citation keys of skipped duplicate entries
    pub skipped: Vec<String>,
    pub warnings: Vec<EntryWarning>,
}

impl BatchReport {
    pub fn summary(&self) -> BatchSummary {
        BatchSummary {
            converted: self.documents.len(),
            failed: self.failures.len(),
            skipped: self.skipped.len(),
            warnings: self.warnings.len(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.skipped.is_empty() && self.warnings.is_empty()
    }
}

/// Counts from a [`BatchReport`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub converted: usize,
    pub failed: usize,
    pub skipped: usize,
    pub warnings: usize,
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} converted, {} failed, {} skipped, {} warnings",
            self.converted, self.failed, self.skipped, self.warnings
        )
    }
}

/// Convert every entry, never aborting on a failing one
pub fn convert_batch(converter: &Converter, entries: &[SourceEntry]) -> BatchReport {
    let mut seen = HashSet::new();
    let mut skipped = Vec::new();
    let mut unique = Vec::with_capacity(entries.len());
    for entry in entries {
        if seen.insert(entry.cite_key.as_str()) {
            unique.push(entry);
        } else {
            debug!(cite_key = %entry.cite_key, "Skipping duplicate citation key");
            skipped.push(entry.cite_key.clone());
        }
    }

    let results: Vec<_> = unique
        .par_iter()
        .map(|entry| (entry.cite_key.as_str(), converter.to_document(entry)))
        .collect();

    let mut report = BatchReport {
        skipped,
        ..BatchReport::default()
    };
    for (cite_key, result) in results {
        match result {
            Ok(converted) => {
                report
                    .warnings
                    .extend(converted.warnings.into_iter().map(|warning| EntryWarning {
                        cite_key: cite_key.to_string(),
                        warning,
                    }));
                report.documents.push(converted.value);
            }
            Err(error) => {
                debug!(cite_key, error = %error, "Entry failed to convert");
                report.failures.push(EntryFailure {
                    cite_key: cite_key.to_string(),
                    error,
                });
            }
        }
    }

    info!(summary = %report.summary(), "Batch conversion finished");
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use bibo_bibtex::EntryType;

    fn entry(key: &str, title: Option<&str>) -> SourceEntry {
        let entry = SourceEntry::new(key, EntryType::Misc);
        match title {
            Some(title) => entry.with_field("title", title),
            None => entry,
        }
    }

    #[test]
    fn test_valid_missing_title_duplicate() {
        let entries = vec![
            entry("a", Some("First")),
            entry("b", None),
            entry("a", Some("Second")),
        ];
        let report = convert_batch(&Converter::default(), &entries);
        assert_eq!(
            report.summary(),
            BatchSummary {
                converted: 1,
                failed: 1,
                skipped: 1,
                warnings: 0,
            }
        );
        assert_eq!(report.documents[0].title(), "First");
        assert_eq!(report.failures[0].cite_key, "b");
        assert_eq!(report.skipped, vec!["a".to_string()]);
        assert_eq!(
            report.summary().to_string(),
            "1 converted, 1 failed, 1 skipped, 0 warnings"
        );
        assert!(!report.is_clean());
    }

    #[test]
    fn test_order_preserved() {
        let entries: Vec<_> = (0..50)
            .map(|i| entry(&format!("k{}", i), Some(&format!("Title {}", i))))
            .collect();
        let report = convert_batch(&Converter::default(), &entries);
        let ids: Vec<_> = report.documents.iter().filter_map(Document::id).collect();
        let expected: Vec<_> = (0..50).map(|i| format!("k{}", i)).collect();
        assert_eq!(ids, expected);
        assert!(report.is_clean());
    }

    #[test]
    fn test_warnings_carry_cite_key() {
        let entries = vec![entry("w", Some("T")).with_field("issn", "0378-5954")];
        let report = convert_batch(&Converter::default(), &entries);
        assert_eq!(report.documents.len(), 1);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].cite_key, "w");
        assert_eq!(report.warnings[0].warning.field, "issn");
    }

    #[test]
    fn test_empty_batch() {
        let report = convert_batch(&Converter::default(), &[]);
        assert_eq!(report.summary(), BatchSummary::default());
    }
}
