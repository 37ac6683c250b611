//! RESOLVE compiler frontend
//!
//! This module contains the resolution components:
//! - `ast`, `walker`, `visitor`, `imports`: the shared syntax layer
//! - `module`: module loaders
//! - `files`: locating sources and non-native artifacts on disk
//! - `resolver`: dependency graph construction and compile ordering

// Syntax components are provided by the shared resolve_syntax crate.
pub use resolve_syntax::{ast, diagnostics, imports, visitor, walker};

// Compiler-specific pieces remain local.
pub mod files;
pub mod module;
pub mod resolver;
