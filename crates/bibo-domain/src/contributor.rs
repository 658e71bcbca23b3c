//! Contributors: a person together with the role they played

use serde::Serialize;
use std::fmt;

use crate::person::PersonName;

/// Role of a contributor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Author,
    Editor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Author => "author",
            Self::Editor => "editor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A person credited on a document
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Contributor {
    name: PersonName,
    role: Role,
}

impl Contributor {
    pub fn new(name: PersonName, role: Role) -> Self {
        Self { name, role }
    }

    pub fn author(name: PersonName) -> Self {
        Self::new(name, Role::Author)
    }

    pub fn editor(name: PersonName) -> Self {
        Self::new(name, Role::Editor)
    }

    pub fn name(&self) -> &PersonName {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }
}
