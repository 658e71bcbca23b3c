//! Statement storage
//!
//! [`StatementSet`] is the seam between the encoder/decoder and wherever
//! statements live. [`Graph`] keeps them in memory in insertion order.

use std::collections::HashSet;
use std::fmt;

use crate::term::{Statement, Term};

/// A set of RDF statements that can be written to and queried
pub trait StatementSet {
    /// Add a statement. Returns false if it was already present.
    fn add(&mut self, statement: Statement) -> bool;

    /// All statements, in storage order
    fn iter(&self) -> Box<dyn Iterator<Item = &Statement> + '_>;

    fn len(&self) -> usize {
        self.iter().count()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, statement: &Statement) -> bool {
        self.iter().any(|s| s == statement)
    }

    /// Objects of every `(subject, predicate, _)` statement
    fn objects(&self, subject: &Term, predicate: &str) -> Vec<&Term> {
        self.iter()
            .filter(|s| &s.subject == subject && s.predicate == predicate)
            .map(|s| &s.object)
            .collect()
    }

    /// First object of `(subject, predicate, _)`
    fn object(&self, subject: &Term, predicate: &str) -> Option<&Term> {
        self.iter()
            .find(|s| &s.subject == subject && s.predicate == predicate)
            .map(|s| &s.object)
    }

    /// Subjects of every `(_, predicate, object)` statement
    fn subjects_with(&self, predicate: &str, object: &Term) -> Vec<&Term> {
        self.iter()
            .filter(|s| s.predicate == predicate && &s.object == object)
            .map(|s| &s.subject)
            .collect()
    }

    /// Whether any statement has `subject` as its subject
    fn has_subject(&self, subject: &Term) -> bool {
        self.iter().any(|s| &s.subject == subject)
    }
}

/// In-memory, insertion-ordered statement set
#[derive(Debug, Clone, Default)]
pub struct Graph {
    statements: Vec<Statement>,
    seen: HashSet<Statement>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a statement built from its parts
    pub fn insert(&mut self, subject: Term, predicate: &str, object: Term) -> bool {
        self.add(Statement::new(subject, predicate, object))
    }

    /// Remove every statement matching the predicate and return how many went
    pub fn remove_where(&mut self, mut matches: impl FnMut(&Statement) -> bool) -> usize {
        let before = self.statements.len();
        let seen = &mut self.seen;
        self.statements.retain(|s| {
            if matches(s) {
                seen.remove(s);
                false
            } else {
                true
            }
        });
        before - self.statements.len()
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }
}

impl StatementSet for Graph {
    fn add(&mut self, statement: Statement) -> bool {
        if self.seen.contains(&statement) {
            return false;
        }
        self.seen.insert(statement.clone());
        self.statements.push(statement);
        true
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &Statement> + '_> {
        Box::new(self.statements.iter())
    }

    fn len(&self) -> usize {
        self.statements.len()
    }

    fn contains(&self, statement: &Statement) -> bool {
        self.seen.contains(statement)
    }
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.statements == other.statements
    }
}

impl Eq for Graph {}

impl Extend<Statement> for Graph {
    fn extend<I: IntoIterator<Item = Statement>>(&mut self, iter: I) {
        for statement in iter {
            self.add(statement);
        }
    }
}

impl FromIterator<Statement> for Graph {
    fn from_iter<I: IntoIterator<Item = Statement>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

/// N-Triples, one statement per line
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            writeln!(f, "{}", statement)?;
        }
        Ok(())
    }
}
