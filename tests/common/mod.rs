//! Shared fixtures for the resolver integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

use resolvec::ast::*;
use resolvec::imports::{ImportClassification, ImportCollection, ImportCollectionBuilder};
use resolvec::{ExternalFileLocator, LoadError};

pub fn sp() -> Span {
    Span::default()
}

pub fn name_at(text: &str, at: usize) -> Name {
    Name::new(text, Span::new(at, at + text.len()))
}

pub fn name(text: &str) -> Name {
    name_at(text, 0)
}

fn block() -> Block {
    Block {
        span: sp(),
        items: vec![],
    }
}

/// Imports laid out like a source `uses` list: each name gets its own span.
pub fn imports(explicit: &[&str], implicit: &[&str], external: &[&str]) -> ImportCollection {
    let mut builder = ImportCollectionBuilder::new(sp());
    let mut at = 0;
    for (class, names) in [
        (ImportClassification::Explicit, explicit),
        (ImportClassification::Implicit, implicit),
        (ImportClassification::External, external),
    ] {
        for n in names {
            builder = builder.import(class, &name_at(n, at));
            at += n.len() + 2;
        }
    }
    builder.build()
}

pub fn uses(explicit: &[&str]) -> ImportCollection {
    imports(explicit, &[], &[])
}

pub fn facility(name_text: &str, imports: ImportCollection) -> ModuleDecl {
    ModuleDecl::Facility(FacilityModule {
        span: sp(),
        name: name(name_text),
        imports,
        requires: None,
        block: block(),
    })
}

pub fn precis(name_text: &str, imports: ImportCollection) -> ModuleDecl {
    ModuleDecl::Precis(PrecisModule {
        span: sp(),
        name: name(name_text),
        imports,
        block: block(),
    })
}

pub fn concept(name_text: &str, imports: ImportCollection) -> ModuleDecl {
    ModuleDecl::Concept(ConceptModule {
        span: sp(),
        name: name(name_text),
        imports,
        parameters: vec![],
        requires: None,
        block: block(),
    })
}

pub fn realization(name_text: &str, concept_name: &str, imports: ImportCollection) -> ModuleDecl {
    ModuleDecl::ConceptRealiz(ConceptRealizModule {
        span: sp(),
        name: name(name_text),
        concept: name(concept_name),
        imports,
        parameters: vec![],
        requires: None,
        block: block(),
    })
}

/// External-file locator backed by a fixed table; records every lookup.
#[derive(Default)]
pub struct StaticLocator {
    files: HashMap<String, Vec<PathBuf>>,
    pub lookups: RefCell<Vec<String>>,
}

impl StaticLocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, name: &str, path: &str) -> Self {
        self.files.entry(name.to_string()).or_default().push(PathBuf::from(path));
        self
    }
}

impl ExternalFileLocator for StaticLocator {
    fn locate(&self, name: &str, _extensions: &[String]) -> Result<Vec<PathBuf>, LoadError> {
        self.lookups.borrow_mut().push(name.to_string());
        Ok(self.files.get(name).cloned().unwrap_or_default())
    }
}
