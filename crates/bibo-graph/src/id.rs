//! Opaque tokens for subjects and blank nodes

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Source of fresh, unique tokens.
///
/// The encoder draws one token per document; it names the document when
/// the document has no id and prefixes the labels of its blank nodes.
/// Tokens must be usable as blank-node labels (`[A-Za-z0-9_-]`).
pub trait SubjectIdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random v4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl SubjectIdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic `<prefix><n>` tokens starting at 1
#[derive(Debug)]
pub struct SequentialGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl Default for SequentialGenerator {
    fn default() -> Self {
        Self::new("n")
    }
}

impl SubjectIdGenerator for SequentialGenerator {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}{}", self.prefix, n)
    }
}

impl<G: SubjectIdGenerator + ?Sized> SubjectIdGenerator for Box<G> {
    fn next_id(&self) -> String {
        (**self).next_id()
    }
}
