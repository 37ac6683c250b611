//! Provide the canonical, pure vocabulary shared by the RESOLVE frontend crates.
//!
//! This crate is intentionally small and dependency-free. It holds the registries that both the
//! syntax crate (node model, tree walker) and the compiler crate (dependency resolution) consult:
//!
//! - [`lang::node_kinds`]: every AST node kind, its parent kind, and its precomputed ancestry chain.
//! - [`lang::module_kinds`]: module kinds, their source-file extensions, and whether they may be the
//!   target of an implicit import.
//!
//! ## Notes
//!
//! - This is a “vocabulary core” crate: **no IO**, no AST types, no compiler-specific state.

pub mod lang;
