#![forbid(unsafe_code)]
//! RESOLVE compiler frontend
//!
//! Given the AST of a root module, this crate discovers every module it (transitively) imports, builds the
//! "imports" dependency graph while refusing cycles and illegal implicit imports, and computes a compile order
//! in which each module follows everything it depends on. The [`driver`] then runs per-module pipeline stages
//! in that order.
//!
//! Parsing is not part of this crate: module ASTs come from a [`ModuleLoader`], either an in-memory table or a
//! [`SearchPathLoader`] wrapping an external parser.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **True invariants**: If a panic represents a compiler bug (logic error), use `.expect("INVARIANT: reason")`
//!   with a clear explanation.
//!
//! ## Examples
//! ```rust
//! use resolvec::ast::{Block, FacilityModule, ModuleDecl, Name, Span};
//! use resolvec::imports::ImportCollectionBuilder;
//! use resolvec::{DependencyGraph, InMemoryModuleLoader, ModuleTables, ResolverConfig, WorkspaceFileLocator};
//!
//! let root = ModuleDecl::Facility(FacilityModule {
//!     span: Span::default(),
//!     name: Name::new("Hello_World_Fac", Span::default()),
//!     imports: ImportCollectionBuilder::new(Span::default()).build(),
//!     requires: None,
//!     block: Block { span: Span::default(), items: vec![] },
//! });
//!
//! let config = ResolverConfig::default();
//! let mut tables = ModuleTables::new();
//! let graph: DependencyGraph = resolvec::build_dependency_graph(
//!     &root,
//!     &config,
//!     &mut InMemoryModuleLoader::new(),
//!     &WorkspaceFileLocator::new("."),
//!     &mut tables,
//! )
//! .unwrap();
//! assert_eq!(graph.compile_order().unwrap().len(), 1);
//! ```

pub mod config;
pub mod driver;
pub mod errors;
pub mod frontend;
pub mod logging;

pub use frontend::{ast, diagnostics, imports, visitor, walker};

pub use config::{ErrorMode, ResolverConfig};
pub use driver::{AstDumpStage, CompileEnvironment, CompileReport, Compiler, PipelineStage, render_outline};
pub use errors::{CompileError, LoadError, ResolveError, StageError};
pub use frontend::files::{ExternalFileLocator, WorkspaceFileLocator};
pub use frontend::module::{InMemoryModuleLoader, LoadedModule, ModuleLoader, ModuleParser, SearchPathLoader};
pub use frontend::resolver::{DependencyGraph, ModuleTables, build_dependency_graph};
pub use logging::{init_tracing, init_tracing_with_default};
pub use resolve_syntax::ModuleIdentifier;
