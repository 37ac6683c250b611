//! Error taxonomy for module loading, dependency resolution and the compile driver.
//!
//! All errors are structured values; rendering is left to `miette` at the edge of the program. Spans are
//! byte ranges into the importing module's source, so a caller holding that source can attach it with
//! `miette::Report::with_source_code`.

use std::path::PathBuf;

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use resolve_core::lang::module_kinds::ModuleKind;
use resolve_syntax::ModuleIdentifier;
use resolve_syntax::diagnostics::SyntaxError;

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "(nowhere)".to_string();
    }
    paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ")
}

/// Failure to produce a module AST for a name.
#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    #[error("module `{name}` not found; searched {}", display_paths(.searched))]
    #[diagnostic(
        code(resolve::load::not_found),
        help("check the spelling of the import and the configured search path")
    )]
    NotFound { name: ModuleIdentifier, searched: Vec<PathBuf> },

    #[error("module `{name}` is ambiguous: {}", display_paths(.candidates))]
    #[diagnostic(code(resolve::load::ambiguous))]
    Ambiguous { name: ModuleIdentifier, candidates: Vec<PathBuf> },

    #[error("cannot read `{}`", .path.display())]
    #[diagnostic(code(resolve::load::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse `{}`: {message}", .path.display())]
    #[diagnostic(code(resolve::load::parse))]
    Parse { path: PathBuf, message: String },

    #[error("malformed module in `{}`", .path.display())]
    #[diagnostic(code(resolve::load::syntax))]
    Syntax {
        path: PathBuf,
        #[source]
        #[diagnostic_source]
        source: SyntaxError,
    },

    #[error("loading `{requested}` produced module `{found}`")]
    #[diagnostic(
        code(resolve::load::name_mismatch),
        help("a module must be stored under its own name")
    )]
    NameMismatch {
        requested: ModuleIdentifier,
        found: ModuleIdentifier,
    },
}

/// Failure while building the dependency graph or ordering it.
#[derive(Debug, Error, Diagnostic)]
pub enum ResolveError {
    #[error("circular dependency detected: `{importer}` imports `{imported}`, which already depends on `{importer}`")]
    #[diagnostic(code(resolve::resolve::circular_dependency))]
    CircularDependency {
        importer: ModuleIdentifier,
        imported: ModuleIdentifier,
        #[label("this import closes the cycle")]
        span: Option<SourceSpan>,
    },

    #[error("invalid import `{imported}` in `{importer}`; cannot import module of type: {kind}")]
    #[diagnostic(
        code(resolve::resolve::invalid_import),
        help("facility declarations may only name concepts, enhancements and their realizations")
    )]
    InvalidImport {
        importer: ModuleIdentifier,
        imported: ModuleIdentifier,
        kind: ModuleKind,
        #[label("implicitly imported here")]
        span: Option<SourceSpan>,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Load(#[from] LoadError),

    #[error("external import `{name}` matches more than one file: {}", display_paths(.candidates))]
    #[diagnostic(code(resolve::resolve::ambiguous_external_import))]
    AmbiguousExternalImport { name: ModuleIdentifier, candidates: Vec<PathBuf> },

    #[error("internal resolver error: {0}")]
    #[diagnostic(code(resolve::internal))]
    Internal(String),
}

/// A pipeline stage's complaint about one module.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct StageError {
    pub message: String,
}

impl StageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Failure of a compile request.
#[derive(Debug, Error, Diagnostic)]
pub enum CompileError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Resolve(#[from] ResolveError),

    #[error("stage `{stage}` failed on module `{module}`")]
    #[diagnostic(code(resolve::compile::stage))]
    Stage {
        stage: &'static str,
        module: ModuleIdentifier,
        #[source]
        source: StageError,
    },

    #[error("module `{module}` was not compiled because its dependency `{dependency}` failed")]
    #[diagnostic(
        code(resolve::compile::dependency_failed),
        help("fix the errors reported for `{dependency}` first")
    )]
    DependencyFailed {
        module: ModuleIdentifier,
        dependency: ModuleIdentifier,
    },

    #[error("{} modules failed to compile", .errors.len())]
    #[diagnostic(code(resolve::compile::multiple))]
    Multiple {
        #[related]
        errors: Vec<CompileError>,
    },
}
