//! Shared syntax layer for the RESOLVE frontend: AST model, generic child extraction, tree walker, visitor
//! surface, module identifiers and import collections.
//!
//! This crate is intentionally parser-free. The concrete parser and the parse-tree → AST translation live
//! outside of it; they produce values of the types defined here and rely on [`diagnostics`] for the few
//! structural checks (block end names, required children) that must be reported the same way everywhere.
//!
//! ## Examples
//! ```rust
//! use resolve_syntax::ast::{Block, Name, PrecisModule, Span};
//! use resolve_syntax::imports::ImportCollectionBuilder;
//! use resolve_syntax::visitor::Visitor;
//! use resolve_syntax::walker::walk;
//!
//! struct Counter(usize);
//!
//! impl<'a> Visitor<'a> for Counter {
//!     type Error = std::convert::Infallible;
//!
//!     fn enter_any(&mut self, _node: resolve_syntax::ast::NodeRef<'a>) -> Result<(), Self::Error> {
//!         self.0 += 1;
//!         Ok(())
//!     }
//! }
//!
//! let module = PrecisModule {
//!     span: Span::default(),
//!     name: Name::new("Empty_Theory", Span::default()),
//!     imports: ImportCollectionBuilder::new(Span::default()).build(),
//!     block: Block { span: Span::default(), items: vec![] },
//! };
//! let mut counter = Counter(0);
//! walk(&mut counter, &module).unwrap();
//! assert_eq!(counter.0, 3); // module, import collection, block
//! ```

pub mod ast;
pub mod diagnostics;
pub mod imports;
pub mod module_id;
pub mod visitor;
pub mod walker;

pub use module_id::ModuleIdentifier;
