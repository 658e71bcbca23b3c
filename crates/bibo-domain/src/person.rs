//! Person names and BibTeX name lists

use serde::Serialize;

use crate::error::ValidationError;
use crate::text::normalize;

/// Separator between people in a BibTeX name list
pub const NAME_LIST_SEPARATOR: &str = " and ";

/// The name of an author or editor
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct PersonName {
    full_name: String,
    given_name: Option<String>,
    family_name: Option<String>,
}

impl PersonName {
    pub fn builder() -> PersonNameBuilder {
        PersonNameBuilder::default()
    }

    /// A name known only as a single string
    pub fn new(full_name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::builder().full_name(full_name).build()
    }

    /// A name with family and given parts; the full name is "Family, Given"
    pub fn from_parts(
        family_name: impl Into<String>,
        given_name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::builder()
            .family_name(family_name)
            .given_name(given_name)
            .build()
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn given_name(&self) -> Option<&str> {
        self.given_name.as_deref()
    }

    pub fn family_name(&self) -> Option<&str> {
        self.family_name.as_deref()
    }

    /// Format as "Family, Given" for BibTeX, or the full name verbatim
    pub fn to_bibtex_format(&self) -> String {
        match (&self.family_name, &self.given_name) {
            (Some(family), Some(given)) => format!("{}, {}", family, given),
            _ => self.full_name.clone(),
        }
    }

    /// Format as "Given Family" for display
    pub fn display_name(&self) -> String {
        match (&self.family_name, &self.given_name) {
            (Some(family), Some(given)) => format!("{} {}", given, family),
            _ => self.full_name.clone(),
        }
    }
}

/// Builder for [`PersonName`]; values are trimmed and blank means absent
#[derive(Clone, Debug, Default)]
pub struct PersonNameBuilder {
    full_name: Option<String>,
    given_name: Option<String>,
    family_name: Option<String>,
}

impl PersonNameBuilder {
    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    pub fn given_name(mut self, given: impl Into<String>) -> Self {
        self.given_name = Some(given.into());
        self
    }

    pub fn family_name(mut self, family: impl Into<String>) -> Self {
        self.family_name = Some(family.into());
        self
    }

    /// Build the name.
    ///
    /// Without an explicit full name one is synthesized from the parts;
    /// with neither, the build fails.
    pub fn build(self) -> Result<PersonName, ValidationError> {
        let given_name = normalize(self.given_name);
        let family_name = normalize(self.family_name);
        let full_name = match (normalize(self.full_name), &family_name, &given_name) {
            (Some(full), _, _) => full,
            (None, Some(family), Some(given)) => format!("{}, {}", family, given),
            (None, Some(family), None) => family.clone(),
            (None, None, _) => return Err(ValidationError::missing("full_name")),
        };

        Ok(PersonName {
            full_name,
            given_name,
            family_name,
        })
    }
}

/// Parse a BibTeX name list ("Family, Given and Family2, Given2").
///
/// People are separated by the literal `" and "`; each token is split on
/// its first comma into family and given parts. Tokens without a comma are
/// kept whole as the full name.
pub fn parse_name_list(input: &str) -> Vec<PersonName> {
    input
        .split(NAME_LIST_SEPARATOR)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| parse_single_name(token).ok())
        .collect()
}

/// Join names back into a BibTeX name list; inverse of [`parse_name_list`]
pub fn format_name_list<'a>(names: impl IntoIterator<Item = &'a PersonName>) -> String {
    names
        .into_iter()
        .map(PersonName::to_bibtex_format)
        .collect::<Vec<_>>()
        .join(NAME_LIST_SEPARATOR)
}

fn parse_single_name(token: &str) -> Result<PersonName, ValidationError> {
    let Some((family, given)) = token.split_once(',') else {
        return PersonName::new(token);
    };

    let family = family.trim();
    let given = given.trim();
    let full_name = if !family.is_empty() && !given.is_empty() {
        format!("{}, {}", family, given)
    } else {
        token.to_string()
    };

    PersonName::builder()
        .full_name(full_name)
        .family_name(family)
        .given_name(given)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_trims_and_drops_blank_parts() {
        let name = PersonName::builder()
            .full_name("  Smith, Alice ")
            .given_name("   ")
            .family_name(" Smith ")
            .build()
            .unwrap();
        assert_eq!(name.full_name(), "Smith, Alice");
        assert_eq!(name.family_name(), Some("Smith"));
        assert_eq!(name.given_name(), None);
    }

    #[test]
    fn test_builder_synthesizes_full_name() {
        let name = PersonName::from_parts("Einstein", "Albert").unwrap();
        assert_eq!(name.full_name(), "Einstein, Albert");
        assert_eq!(name.display_name(), "Albert Einstein");
    }

    #[test]
    fn test_builder_requires_a_name() {
        let err = PersonName::builder().given_name("Albert").build().unwrap_err();
        assert_eq!(err, ValidationError::missing("full_name"));
        assert!(PersonName::new("  ").is_err());
    }

    #[test]
    fn test_parse_name_list() {
        let names = parse_name_list("Smith, Alice and Doe, Bob");
        assert_eq!(names.len(), 2);
        assert_eq!(names[0].family_name(), Some("Smith"));
        assert_eq!(names[0].given_name(), Some("Alice"));
        assert_eq!(names[1].full_name(), "Doe, Bob");
    }

    #[test]
    fn test_parse_name_without_comma() {
        let names = parse_name_list("Albert Einstein and {World Health Organization}");
        assert_eq!(names[0].full_name(), "Albert Einstein");
        assert_eq!(names[0].family_name(), None);
        assert_eq!(names[1].full_name(), "{World Health Organization}");
    }

    #[test]
    fn test_separator_is_case_sensitive() {
        let names = parse_name_list("Smith, Alice AND Doe, Bob");
        assert_eq!(names.len(), 1);
        assert_eq!(names[0].given_name(), Some("Alice AND Doe, Bob"));
    }

    #[test]
    fn test_parse_skips_empty_tokens() {
        let names = parse_name_list("Smith, Alice and  and Doe, Bob");
        assert_eq!(names.len(), 2);
        assert!(parse_name_list("   ").is_empty());
    }

    #[test]
    fn test_half_name_keeps_raw_token() {
        let names = parse_name_list("Smith,");
        assert_eq!(names[0].full_name(), "Smith,");
        assert_eq!(names[0].family_name(), Some("Smith"));
        assert_eq!(format_name_list(&names), "Smith,");
    }

    #[test]
    fn test_format_name_list() {
        let names = vec![
            PersonName::from_parts("Smith", "Alice").unwrap(),
            PersonName::new("Plato").unwrap(),
        ];
        assert_eq!(format_name_list(&names), "Smith, Alice and Plato");
    }
}
