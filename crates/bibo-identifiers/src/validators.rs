//! Identifier validation functions

use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

use crate::kind::{IdentifierError, IdentifierType};

lazy_static! {
    // DOI validation regex: 10.<registrant, 4+ digits>/<non-whitespace suffix>
    static ref DOI_PATTERN: Regex = Regex::new(r"^10\.[0-9]{4,}/\S+$").unwrap();

    // Handle: numeric naming authority (dot-separated segments) and local name
    static ref HANDLE_PATTERN: Regex = Regex::new(r"^[0-9]+(\.[0-9]+)*/\S+$").unwrap();
}

const DOI_PREFIXES: [&str; 5] = [
    "https://doi.org/",
    "http://doi.org/",
    "https://dx.doi.org/",
    "http://dx.doi.org/",
    "doi:",
];

/// Validate a raw identifier value and return its normalized form.
///
/// The value is trimmed first; blank input fails for every type. The
/// returned string is what should be stored on the document.
pub fn validate(kind: IdentifierType, raw: &str) -> Result<String, IdentifierError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(IdentifierError::Empty { kind });
    }

    match kind {
        IdentifierType::Doi => validate_doi(trimmed),
        IdentifierType::Isbn10 => validate_isbn10(trimmed),
        IdentifierType::Isbn13 => validate_isbn13(trimmed),
        IdentifierType::Issn => validate_issn(trimmed),
        IdentifierType::Handle => validate_handle(trimmed),
        IdentifierType::Uri => validate_uri(trimmed),
        IdentifierType::Url => validate_url(trimmed),
        IdentifierType::Other => Ok(trimmed.to_string()),
    }
}

/// Check validity without keeping the normalized value
pub fn is_valid(kind: IdentifierType, raw: &str) -> bool {
    validate(kind, raw).is_ok()
}

/// Pick ISBN-10 or ISBN-13 from the separator-free length.
///
/// Returns `None` when the length matches neither.
pub fn classify_isbn(raw: &str) -> Option<IdentifierType> {
    match strip_separators(raw).chars().count() {
        10 => Some(IdentifierType::Isbn10),
        13 => Some(IdentifierType::Isbn13),
        _ => None,
    }
}

/// Strip resolver and `doi:` prefixes from a DOI
pub fn normalize_doi(doi: &str) -> String {
    let trimmed = doi.trim();
    for prefix in DOI_PREFIXES {
        if trimmed.len() >= prefix.len()
            && trimmed.is_char_boundary(prefix.len())
            && trimmed[..prefix.len()].eq_ignore_ascii_case(prefix)
        {
            return trimmed[prefix.len()..].trim().to_string();
        }
    }
    trimmed.to_string()
}

fn validate_doi(value: &str) -> Result<String, IdentifierError> {
    let normalized = normalize_doi(value);
    if DOI_PATTERN.is_match(&normalized) {
        Ok(normalized)
    } else {
        Err(invalid_format(IdentifierType::Doi, value))
    }
}

fn validate_handle(value: &str) -> Result<String, IdentifierError> {
    if HANDLE_PATTERN.is_match(value) {
        Ok(value.to_string())
    } else {
        Err(invalid_format(IdentifierType::Handle, value))
    }
}

fn validate_uri(value: &str) -> Result<String, IdentifierError> {
    // Url::parse only accepts absolute references, so a scheme is guaranteed
    match Url::parse(value) {
        Ok(_) => Ok(value.to_string()),
        Err(_) => Err(invalid_format(IdentifierType::Uri, value)),
    }
}

fn validate_url(value: &str) -> Result<String, IdentifierError> {
    match Url::parse(value) {
        Ok(parsed) if parsed.has_host() => Ok(value.to_string()),
        _ => Err(invalid_format(IdentifierType::Url, value)),
    }
}

/// Validate ISBN-10 checksum (weights 10..1, sum divisible by 11)
fn validate_isbn10(value: &str) -> Result<String, IdentifierError> {
    let kind = IdentifierType::Isbn10;
    let normalized = strip_separators(value).to_uppercase();
    let chars: Vec<char> = normalized.chars().collect();
    if chars.len() != 10 {
        return Err(invalid_format(kind, value));
    }

    let mut sum = 0u32;
    for (i, &c) in chars.iter().enumerate() {
        let digit = match (i, c) {
            (9, 'X') => 10,
            _ => c.to_digit(10).ok_or_else(|| invalid_format(kind, value))?,
        };
        sum += digit * (10 - i as u32);
    }

    if sum % 11 == 0 {
        Ok(normalized)
    } else {
        Err(invalid_checksum(kind, value))
    }
}

/// Validate ISBN-13 checksum (alternating weights 1 and 3, sum divisible by 10)
fn validate_isbn13(value: &str) -> Result<String, IdentifierError> {
    let kind = IdentifierType::Isbn13;
    let normalized = strip_separators(value);
    if normalized.chars().count() != 13 || !normalized.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid_format(kind, value));
    }

    let sum: u32 = normalized
        .chars()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(i, digit)| if i % 2 == 0 { digit } else { digit * 3 })
        .sum();

    if sum % 10 == 0 {
        Ok(normalized)
    } else {
        Err(invalid_checksum(kind, value))
    }
}

/// Validate ISSN check digit (weights 8..2, check = (11 - sum mod 11) mod 11, 10 is 'X')
fn validate_issn(value: &str) -> Result<String, IdentifierError> {
    let kind = IdentifierType::Issn;
    let normalized = strip_separators(value).to_uppercase();
    let chars: Vec<char> = normalized.chars().collect();
    if chars.len() != 8 {
        return Err(invalid_format(kind, value));
    }

    let mut sum = 0u32;
    for (i, c) in chars[..7].iter().enumerate() {
        let digit = c.to_digit(10).ok_or_else(|| invalid_format(kind, value))?;
        sum += digit * (8 - i as u32);
    }

    let expected = match (11 - sum % 11) % 11 {
        10 => 'X',
        n => char::from_digit(n, 10).ok_or_else(|| invalid_format(kind, value))?,
    };
    let actual = chars[7];
    if actual != 'X' && !actual.is_ascii_digit() {
        return Err(invalid_format(kind, value));
    }

    if actual == expected {
        Ok(format!("{}-{}", &normalized[..4], &normalized[4..]))
    } else {
        Err(invalid_checksum(kind, value))
    }
}

fn strip_separators(value: &str) -> String {
    value.chars().filter(|c| *c != '-' && *c != ' ').collect()
}

fn invalid_format(kind: IdentifierType, value: &str) -> IdentifierError {
    IdentifierError::InvalidFormat {
        kind,
        value: value.to_string(),
    }
}

fn invalid_checksum(kind: IdentifierType, value: &str) -> IdentifierError {
    IdentifierError::InvalidChecksum {
        kind,
        value: value.to_string(),
    }
}
