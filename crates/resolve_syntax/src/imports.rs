//! Import collections: the per-module record of which other modules (or non-native artifacts) a module depends
//! on, and why.
//!
//! ## Notes
//! - A name's classification says where the dependency came from: an explicit `uses` clause, a facility
//!   declaration or module header naming a concept/realization/enhancement, or an `externally realized by`
//!   artifact that is not a RESOLVE module at all.
//! - The same name may be recorded under more than one classification. Queries treat the classes
//!   independently: [`ImportCollection::imports_excluding`] keeps a name as long as it appears in at least one
//!   class that is not excluded.
//! - Insertion order is preserved, so dependency discovery is deterministic for a given source.

use indexmap::{IndexMap, IndexSet};

use crate::ast::{impl_node, Block, FacilityDecl, Name, Span};
use crate::visitor::Visitor;
use crate::walker::walk;

/// Why a module name appears in an import collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ImportClassification {
    /// Named in a `uses` clause.
    Explicit,
    /// Named by a facility declaration or a realization/enhancement header.
    Implicit,
    /// A non-native (e.g. Java or C) artifact realizing a facility.
    External,
}

impl ImportClassification {
    pub const ALL: [ImportClassification; 3] = [
        ImportClassification::Explicit,
        ImportClassification::Implicit,
        ImportClassification::External,
    ];
}

impl std::fmt::Display for ImportClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ImportClassification::Explicit => "explicit",
            ImportClassification::Implicit => "implicit",
            ImportClassification::External => "external",
        };
        f.write_str(s)
    }
}

/// The classified imports of one module. Always the first child of its module node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImportCollection {
    pub span: Span,
    entries: IndexMap<ImportClassification, IndexMap<String, Span>>,
}

impl_node!(ImportCollection);

impl ImportCollection {
    /// Names recorded under `class`, in insertion order.
    pub fn imports_of_type(&self, class: ImportClassification) -> IndexSet<&str> {
        self.entries
            .get(&class)
            .map(|names| names.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Union of every class not listed in `excluded`.
    pub fn imports_excluding(&self, excluded: &[ImportClassification]) -> IndexSet<&str> {
        self.entries
            .iter()
            .filter(|(class, _)| !excluded.contains(*class))
            .flat_map(|(_, names)| names.keys().map(String::as_str))
            .collect()
    }

    pub fn is_in_category(&self, class: ImportClassification, name: &str) -> bool {
        self.entries.get(&class).is_some_and(|names| names.contains_key(name))
    }

    /// Position of the first recorded occurrence of `name`, in any class.
    pub fn span_of(&self, name: &str) -> Option<Span> {
        self.entries.values().find_map(|names| names.get(name).copied())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.values().all(IndexMap::is_empty)
    }

    /// Every `(class, name, span)` entry, grouped by class in first-use order.
    pub fn iter(&self) -> impl Iterator<Item = (ImportClassification, &str, Span)> + '_ {
        self.entries
            .iter()
            .flat_map(|(class, names)| names.iter().map(move |(name, span)| (*class, name.as_str(), *span)))
    }
}

/// Accumulates imports while one module is being assembled.
///
/// A fresh builder is created per module and consumed by [`build`](Self::build); nothing is shared between
/// modules.
#[derive(Debug, Clone, Default)]
pub struct ImportCollectionBuilder {
    span: Span,
    entries: IndexMap<ImportClassification, IndexMap<String, Span>>,
}

impl ImportCollectionBuilder {
    pub fn new(span: Span) -> Self {
        Self {
            span,
            entries: IndexMap::new(),
        }
    }

    /// Record one name. Re-recording a name under the same class keeps the first position.
    pub fn import(mut self, class: ImportClassification, name: &Name) -> Self {
        self.entries
            .entry(class)
            .or_default()
            .entry(name.text.clone())
            .or_insert(name.span);
        self
    }

    pub fn imports<'n>(mut self, class: ImportClassification, names: impl IntoIterator<Item = &'n Name>) -> Self {
        for name in names {
            self = self.import(class, name);
        }
        self
    }

    /// Record what a facility declaration depends on: its concept and enhancements implicitly, its realization
    /// implicitly or, when externally realized, as an external artifact.
    pub fn facility(self, decl: &FacilityDecl) -> Self {
        let realization_class = |external: bool| {
            if external {
                ImportClassification::External
            } else {
                ImportClassification::Implicit
            }
        };
        let mut builder = self
            .import(ImportClassification::Implicit, &decl.concept)
            .import(realization_class(decl.externally_realized), &decl.realization);
        for pair in &decl.enhancements {
            builder = builder
                .import(ImportClassification::Implicit, &pair.enhancement)
                .import(realization_class(pair.externally_realized), &pair.realization);
        }
        builder
    }

    /// Record the imports implied by every facility declaration anywhere in `block`, including those local to
    /// procedures and initialization sections.
    pub fn facilities_in(self, block: &Block) -> Self {
        let mut scanner = FacilityScanner { builder: self };
        match walk(&mut scanner, block) {
            Ok(()) => scanner.builder,
            Err(never) => match never {},
        }
    }

    pub fn build(self) -> ImportCollection {
        ImportCollection {
            span: self.span,
            entries: self.entries,
        }
    }
}

struct FacilityScanner {
    builder: ImportCollectionBuilder,
}

impl<'a> Visitor<'a> for FacilityScanner {
    type Error = std::convert::Infallible;

    fn enter_facility_decl(&mut self, node: &'a FacilityDecl) -> Result<(), Self::Error> {
        self.builder = std::mem::take(&mut self.builder).facility(node);
        Ok(())
    }
}
