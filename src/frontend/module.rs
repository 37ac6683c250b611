//! Module loading: turning an import name into a module AST.
//!
//! The resolver never reads files itself; it asks a [`ModuleLoader`]. Two loaders are provided:
//! [`InMemoryModuleLoader`] for callers that already hold ASTs (tooling, tests) and [`SearchPathLoader`],
//! which finds `<name>.<ext>` on disk and hands the text to an injected [`ModuleParser`].

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use resolve_core::lang::module_kinds;
use resolve_syntax::ModuleIdentifier;
use resolve_syntax::ast::ModuleDecl;

use super::files::find_files;
use crate::config::ResolverConfig;
use crate::errors::LoadError;

/// A module produced by a loader
#[derive(Debug, Clone)]
pub struct LoadedModule {
    pub module: ModuleDecl,
    /// Where the module was read from, if it came from disk
    pub path: Option<PathBuf>,
}

/// Produces the AST of a named module.
pub trait ModuleLoader {
    fn load_module(&mut self, name: &ModuleIdentifier) -> Result<LoadedModule, LoadError>;
}

impl<L: ModuleLoader + ?Sized> ModuleLoader for &mut L {
    fn load_module(&mut self, name: &ModuleIdentifier) -> Result<LoadedModule, LoadError> {
        (**self).load_module(name)
    }
}

impl<L: ModuleLoader + ?Sized> ModuleLoader for Box<L> {
    fn load_module(&mut self, name: &ModuleIdentifier) -> Result<LoadedModule, LoadError> {
        (**self).load_module(name)
    }
}

// ============================================================================
// In-memory loader
// ============================================================================

/// Serves modules from a name → AST table and counts how often each name was requested.
#[derive(Debug, Default)]
pub struct InMemoryModuleLoader {
    modules: HashMap<ModuleIdentifier, ModuleDecl>,
    loads: HashMap<ModuleIdentifier, usize>,
}

impl InMemoryModuleLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module under its declared name.
    pub fn insert(&mut self, module: ModuleDecl) {
        self.modules.insert(ModuleIdentifier::of(&module), module);
    }

    pub fn with_module(mut self, module: ModuleDecl) -> Self {
        self.insert(module);
        self
    }

    /// How many times `name` was requested (including failed requests).
    pub fn load_count(&self, name: &str) -> usize {
        self.loads.get(name).copied().unwrap_or(0)
    }

    pub fn total_loads(&self) -> usize {
        self.loads.values().sum()
    }
}

impl ModuleLoader for InMemoryModuleLoader {
    fn load_module(&mut self, name: &ModuleIdentifier) -> Result<LoadedModule, LoadError> {
        *self.loads.entry(name.clone()).or_insert(0) += 1;
        match self.modules.get(name) {
            Some(module) => Ok(LoadedModule {
                module: module.clone(),
                path: None,
            }),
            None => Err(LoadError::NotFound {
                name: name.clone(),
                searched: Vec::new(),
            }),
        }
    }
}

// ============================================================================
// Search-path loader
// ============================================================================

/// Parser + AST builder for one RESOLVE source file.
pub trait ModuleParser {
    fn parse(&mut self, path: &Path, source: &str) -> Result<ModuleDecl, LoadError>;
}

impl<F> ModuleParser for F
where
    F: FnMut(&Path, &str) -> Result<ModuleDecl, LoadError>,
{
    fn parse(&mut self, path: &Path, source: &str) -> Result<ModuleDecl, LoadError> {
        self(path, source)
    }
}

/// Loads `<name>.<ext>` from an ordered list of directories.
///
/// ## Notes
/// - Each directory is searched recursively for every RESOLVE extension (`mt`, `co`, `en`, `rb`, `fa`).
/// - The first directory with at least one match wins; several matches inside that directory are an error
///   rather than a silent pick.
pub struct SearchPathLoader<P> {
    search_path: Vec<PathBuf>,
    extensions: Vec<&'static str>,
    parser: P,
}

impl<P: ModuleParser> SearchPathLoader<P> {
    pub fn new(search_path: Vec<PathBuf>, parser: P) -> Self {
        Self {
            search_path,
            extensions: module_kinds::all_extensions(),
            parser,
        }
    }

    pub fn from_config(config: &ResolverConfig, parser: P) -> Self {
        Self::new(config.search_path.clone(), parser)
    }

    fn locate(&self, name: &ModuleIdentifier) -> Result<PathBuf, LoadError> {
        for dir in &self.search_path {
            let mut found = find_files(dir, name.as_str(), &self.extensions).map_err(|source| LoadError::Io {
                path: dir.clone(),
                source,
            })?;
            match found.len() {
                0 => continue,
                1 => return Ok(found.remove(0)),
                _ => {
                    return Err(LoadError::Ambiguous {
                        name: name.clone(),
                        candidates: found,
                    });
                }
            }
        }
        Err(LoadError::NotFound {
            name: name.clone(),
            searched: self.search_path.clone(),
        })
    }
}

impl<P: ModuleParser> ModuleLoader for SearchPathLoader<P> {
    #[tracing::instrument(skip_all, fields(module = %name))]
    fn load_module(&mut self, name: &ModuleIdentifier) -> Result<LoadedModule, LoadError> {
        let path = self.locate(name)?;
        tracing::debug!(path = %path.display(), "reading module source");
        let source = fs::read_to_string(&path).map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        })?;
        let module = self.parser.parse(&path, &source)?;
        Ok(LoadedModule {
            module,
            path: Some(path),
        })
    }
}
