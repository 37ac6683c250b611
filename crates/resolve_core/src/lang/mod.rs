//! RESOLVE frontend vocabulary registries.
//!
//! Callers work with **stable IDs** ([`node_kinds::NodeKind`], [`module_kinds::ModuleKind`]) and look up
//! spellings and metadata via registry tables, instead of comparing type names or file suffixes ad hoc.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//!
//! ## Examples
//! ```rust
//! use resolve_core::lang::node_kinds::{self, NodeKind};
//!
//! assert_eq!(node_kinds::as_str(NodeKind::ConceptModule), "ConceptModule");
//! assert_eq!(node_kinds::parent(NodeKind::ConceptModule), Some(NodeKind::SpecModule));
//! ```

pub mod module_kinds;
pub mod node_kinds;
