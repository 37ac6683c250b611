//! Module identifiers: the key under which a module is loaded, stored and ordered.

use std::borrow::Borrow;
use std::fmt;

use crate::ast::{ModuleDecl, Name};

/// Identity of a module, derived from its declared name.
///
/// Equality, hashing and ordering are by name only, so two identifiers obtained from an import reference and
/// from the module's own declaration compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleIdentifier(String);

impl ModuleIdentifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn of(module: &ModuleDecl) -> Self {
        Self::from(module.name())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&Name> for ModuleIdentifier {
    fn from(name: &Name) -> Self {
        Self(name.text.clone())
    }
}

impl From<&str> for ModuleIdentifier {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl Borrow<str> for ModuleIdentifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
