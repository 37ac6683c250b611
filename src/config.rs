//! Resolver configuration.
//!
//! Plain data with builder-style setters; every field has a usable default so tests and embedding drivers
//! only override what they care about.

use std::path::PathBuf;

use resolve_core::lang::module_kinds::NON_NATIVE_EXTENSIONS;

/// Module a compilation may import without it ever being loaded or entering the dependency graph.
pub const DEFAULT_BUILTIN_IMPORTS: &[&str] = &["Cls_Theory"];

/// How the compile driver reacts to per-module stage failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Abort the request on the first error.
    #[default]
    FailFast,
    /// Keep compiling the remaining modules and report every stage error at the end.
    ///
    /// Dependency resolution errors still abort immediately.
    Collect,
}

/// Resolver and driver configuration
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Root searched for non-native artifacts of external imports
    pub workspace_dir: PathBuf,
    /// Directories searched, in order, for RESOLVE source files
    pub search_path: Vec<PathBuf>,
    /// Extensions of non-native artifacts (without the dot)
    pub non_native_extensions: Vec<String>,
    /// Import names that are provided by the compiler itself
    pub builtin_imports: Vec<String>,
    pub error_mode: ErrorMode,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        let workspace_dir = PathBuf::from(".");
        Self {
            search_path: vec![workspace_dir.clone()],
            workspace_dir,
            non_native_extensions: NON_NATIVE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            builtin_imports: DEFAULT_BUILTIN_IMPORTS.iter().map(|b| b.to_string()).collect(),
            error_mode: ErrorMode::default(),
        }
    }
}

impl ResolverConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the workspace directory.
    ///
    /// The search path follows the workspace unless it has been set explicitly.
    pub fn with_workspace_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        if self.search_path == [self.workspace_dir.clone()] {
            self.search_path = vec![dir.clone()];
        }
        self.workspace_dir = dir;
        self
    }

    pub fn with_search_path(mut self, dirs: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        self.search_path = dirs.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_non_native_extensions(mut self, exts: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.non_native_extensions = exts.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_builtin_imports(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.builtin_imports = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        self.builtin_imports.iter().any(|b| b == name)
    }
}
