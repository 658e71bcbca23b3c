//! Citation key generation
//!
//! Documents that carry no external id still need a citation key when they
//! are written back out as BibTeX entries. The key is a deterministic slug of
//! the title; collision handling is left to the caller.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

const SEPARATOR: char = '-';
const EMPTY_SLUG: &str = "untitled";

/// Derive a citation key from a title.
///
/// Diacritics are folded to ASCII, letters are lower-cased and every run of
/// other characters collapses to a single `-`.
pub fn slugify_title(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_separator = false;

    for c in title.nfkd() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push(SEPARATOR);
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else if !is_combining_mark(c) {
            pending_separator = true;
        }
    }

    if slug.is_empty() {
        EMPTY_SLUG.to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_collapses_runs() {
        assert_eq!(slugify_title("Proceedings Example"), "proceedings-example");
        assert_eq!(
            slugify_title("  On the -- Electrodynamics of Moving Bodies!! "),
            "on-the-electrodynamics-of-moving-bodies"
        );
    }

    #[test]
    fn test_slug_folds_diacritics() {
        assert_eq!(slugify_title("Über Schrödinger"), "uber-schrodinger");
        assert_eq!(slugify_title("Café"), "cafe");
    }

    #[test]
    fn test_slug_of_symbols_only() {
        assert_eq!(slugify_title("?!"), "untitled");
        assert_eq!(slugify_title(""), "untitled");
    }

    #[test]
    fn test_slug_is_deterministic() {
        let title = "A {LaTeX} Guide: 2nd Edition";
        assert_eq!(slugify_title(title), slugify_title(title));
        assert_eq!(slugify_title(title), "a-latex-guide-2nd-edition");
    }
}
