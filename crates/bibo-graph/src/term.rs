//! RDF terms and statements

use serde::Serialize;
use std::fmt;

/// A node or value in an RDF graph
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Term {
    Iri {
        iri: String,
    },
    Blank {
        label: String,
    },
    Literal {
        value: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        datatype: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        language: Option<String>,
    },
}

impl Term {
    pub fn iri(iri: impl Into<String>) -> Self {
        Self::Iri { iri: iri.into() }
    }

    pub fn blank(label: impl Into<String>) -> Self {
        Self::Blank {
            label: label.into(),
        }
    }

    /// Plain string literal
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal {
            value: value.into(),
            datatype: None,
            language: None,
        }
    }

    pub fn typed_literal(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self::Literal {
            value: value.into(),
            datatype: Some(datatype.into()),
            language: None,
        }
    }

    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Self::Iri { iri } => Some(iri),
            _ => None,
        }
    }

    /// Lexical value of a literal
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Literal { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn datatype(&self) -> Option<&str> {
        match self {
            Self::Literal { datatype, .. } => datatype.as_deref(),
            _ => None,
        }
    }

    /// IRIs and blank nodes can be subjects; literals cannot
    pub fn is_node(&self) -> bool {
        !matches!(self, Self::Literal { .. })
    }

    pub fn is_iri(&self, iri: &str) -> bool {
        self.as_iri() == Some(iri)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri { iri } => write!(f, "<{}>", iri),
            Self::Blank { label } => write!(f, "_:{}", label),
            Self::Literal {
                value,
                datatype,
                language,
            } => {
                write!(f, "\"{}\"", escape_literal(value))?;
                if let Some(language) = language {
                    write!(f, "@{}", language)
                } else if let Some(datatype) = datatype {
                    write!(f, "^^<{}>", datatype)
                } else {
                    Ok(())
                }
            }
        }
    }
}

fn escape_literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// One subject-predicate-object triple
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Statement {
    pub subject: Term,
    pub predicate: String,
    pub object: Term,
}

impl Statement {
    pub fn new(subject: Term, predicate: impl Into<String>, object: Term) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object,
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}> {} .", self.subject, self.predicate, self.object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_display() {
        assert_eq!(Term::iri("http://x.org/a").to_string(), "<http://x.org/a>");
        assert_eq!(Term::blank("b0").to_string(), "_:b0");
        assert_eq!(Term::literal("plain").to_string(), "\"plain\"");
        assert_eq!(
            Term::typed_literal("2023", "http://www.w3.org/2001/XMLSchema#gYear").to_string(),
            "\"2023\"^^<http://www.w3.org/2001/XMLSchema#gYear>"
        );
        let tagged = Term::Literal {
            value: "chat".to_string(),
            datatype: None,
            language: Some("fr".to_string()),
        };
        assert_eq!(tagged.to_string(), "\"chat\"@fr");
    }

    #[test]
    fn test_literal_escaping() {
        let term = Term::literal("say \"hi\"\\\nbye");
        assert_eq!(term.to_string(), "\"say \\\"hi\\\"\\\\\\nbye\"");
    }

    #[test]
    fn test_statement_display() {
        let statement = Statement::new(
            Term::iri("urn:a"),
            "http://purl.org/dc/terms/title",
            Term::literal("T"),
        );
        assert_eq!(
            statement.to_string(),
            "<urn:a> <http://purl.org/dc/terms/title> \"T\" ."
        );
    }

    #[test]
    fn test_accessors() {
        let literal = Term::typed_literal("1", "urn:dt");
        assert_eq!(literal.as_literal(), Some("1"));
        assert_eq!(literal.datatype(), Some("urn:dt"));
        assert!(!literal.is_node());
        assert!(Term::blank("x").is_node());
        assert!(Term::iri("urn:a").is_iri("urn:a"));
        assert_eq!(Term::blank("x").as_iri(), None);
    }

    #[test]
    fn test_serializes_tagged() {
        let json = serde_json::to_value(Term::literal("v")).unwrap();
        assert_eq!(json["kind"], "literal");
        assert_eq!(json["value"], "v");
        assert!(json.get("datatype").is_none());
    }
}
