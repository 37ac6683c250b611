//! Compile driver: resolves a target's dependencies and runs pipeline stages over every module in compile order.
//!
//! A [`Compiler`] owns one [`CompileEnvironment`] for its lifetime, so several targets compiled by the same
//! compiler share loaded modules and never process a module twice.

use std::collections::HashSet;
use std::convert::Infallible;
use std::path::Path;

use indexmap::{IndexMap, IndexSet};

use resolve_syntax::ModuleIdentifier;
use resolve_syntax::ast::{ModuleDecl, NodeRef};
use resolve_syntax::visitor::Visitor;
use resolve_syntax::walker::walk;

use crate::config::{ErrorMode, ResolverConfig};
use crate::errors::{CompileError, StageError};
use crate::frontend::files::{ExternalFileLocator, WorkspaceFileLocator};
use crate::frontend::module::ModuleLoader;
use crate::frontend::resolver::{ModuleTables, build_dependency_graph};

/// One per-module pass of the pipeline (population, checking, code generation, dumps, ...).
pub trait PipelineStage {
    fn name(&self) -> &'static str;

    fn process(&mut self, id: &ModuleIdentifier, env: &CompileEnvironment) -> Result<(), StageError>;
}

/// Per-session record of loaded modules, their files and which modules are already compiled.
#[derive(Debug, Default)]
pub struct CompileEnvironment {
    tables: ModuleTables,
    completed: IndexSet<ModuleIdentifier>,
}

impl CompileEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn module(&self, id: &ModuleIdentifier) -> Option<&ModuleDecl> {
        self.tables.module(id)
    }

    pub fn file(&self, id: &ModuleIdentifier) -> Option<&Path> {
        self.tables.file(id).map(|p| p.as_path())
    }

    pub fn contains(&self, id: &ModuleIdentifier) -> bool {
        self.tables.contains(id)
    }

    pub fn is_complete(&self, id: &ModuleIdentifier) -> bool {
        self.completed.contains(id)
    }

    pub fn complete(&mut self, id: ModuleIdentifier) {
        self.completed.insert(id);
    }

    /// Completed modules, in the order they finished.
    pub fn completed(&self) -> impl Iterator<Item = &ModuleIdentifier> {
        self.completed.iter()
    }

    pub fn tables(&self) -> &ModuleTables {
        &self.tables
    }
}

/// What a successful compile request did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileReport {
    /// Full compile order of the target
    pub order: Vec<ModuleIdentifier>,
    /// Modules the stages actually ran on
    pub processed: Vec<ModuleIdentifier>,
    /// Modules skipped because an earlier request already completed them
    pub skipped: Vec<ModuleIdentifier>,
}

/// Drives compile requests against a shared environment.
pub struct Compiler<X = WorkspaceFileLocator> {
    config: ResolverConfig,
    locator: X,
    env: CompileEnvironment,
}

impl Compiler<WorkspaceFileLocator> {
    /// Compiler whose external imports are looked up under the configured workspace directory.
    pub fn new(config: ResolverConfig) -> Self {
        let locator = WorkspaceFileLocator::new(config.workspace_dir.clone());
        Self::with_locator(config, locator)
    }
}

impl<X: ExternalFileLocator> Compiler<X> {
    pub fn with_locator(config: ResolverConfig, locator: X) -> Self {
        Self {
            config,
            locator,
            env: CompileEnvironment::new(),
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn env(&self) -> &CompileEnvironment {
        &self.env
    }

    /// Resolve `root`'s dependencies and run `stages` over every module in compile order.
    ///
    /// ## Errors
    /// - Dependency resolution errors always abort before any stage runs.
    /// - Stage errors abort immediately in [`ErrorMode::FailFast`].
    /// - In [`ErrorMode::Collect`] a failing module skips its later stages and stays incomplete. Modules that depend
    ///   on it, directly or through another failed module, are not processed and report
    ///   [`CompileError::DependencyFailed`]. Independent modules still run and every error is returned together.
    #[tracing::instrument(skip_all, fields(target = %root.name()))]
    pub fn compile_target<L>(
        &mut self,
        root: &ModuleDecl,
        loader: &mut L,
        stages: &mut [&mut dyn PipelineStage],
    ) -> Result<CompileReport, CompileError>
    where
        L: ModuleLoader + ?Sized,
    {
        let graph = build_dependency_graph(root, &self.config, loader, &self.locator, &mut self.env.tables)?;
        let order = graph.compile_order()?;

        let mut report = CompileReport {
            order: order.clone(),
            ..CompileReport::default()
        };
        let mut errors = Vec::new();
        let mut failed: HashSet<ModuleIdentifier> = HashSet::new();

        for id in order {
            if self.env.is_complete(&id) {
                tracing::debug!(module = %id, "skipping already compiled module");
                report.skipped.push(id);
                continue;
            }

            let failed_dependency = graph
                .dependencies_of(&id)
                .into_iter()
                .find(|dep| failed.contains(*dep))
                .cloned();
            if let Some(dependency) = failed_dependency {
                tracing::debug!(module = %id, dependency = %dependency, "dependency failed; not compiling");
                errors.push(CompileError::DependencyFailed {
                    module: id.clone(),
                    dependency,
                });
                failed.insert(id);
                continue;
            }

            tracing::info!(module = %id, "begin compiling");
            let mut stage_failed = false;
            for stage in stages.iter_mut() {
                if let Err(source) = stage.process(&id, &self.env) {
                    let err = CompileError::Stage {
                        stage: stage.name(),
                        module: id.clone(),
                        source,
                    };
                    match self.config.error_mode {
                        ErrorMode::FailFast => return Err(err),
                        ErrorMode::Collect => {
                            tracing::debug!(module = %id, stage = stage.name(), "stage failed; skipping later stages");
                            errors.push(err);
                            stage_failed = true;
                            break;
                        }
                    }
                }
            }

            report.processed.push(id.clone());
            if stage_failed {
                failed.insert(id);
            } else {
                tracing::info!(module = %id, "done compiling");
                self.env.complete(id);
            }
        }

        match errors.len() {
            0 => Ok(report),
            1 => Err(errors.remove(0)),
            _ => Err(CompileError::Multiple { errors }),
        }
    }
}

// ============================================================================
// AST outline stage
// ============================================================================

/// Renders modules as indented outlines (see [`render_outline`]).
///
/// [`AstDumpStage::new`] dumps every module in the compile order; [`AstDumpStage::for_target`] dumps only the named
/// module and passes over its dependencies.
#[derive(Debug, Default)]
pub struct AstDumpStage {
    target: Option<ModuleIdentifier>,
    outlines: IndexMap<ModuleIdentifier, String>,
}

impl AstDumpStage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_target(target: impl Into<ModuleIdentifier>) -> Self {
        Self {
            target: Some(target.into()),
            ..Self::default()
        }
    }

    pub fn outline(&self, id: &ModuleIdentifier) -> Option<&str> {
        self.outlines.get(id).map(String::as_str)
    }

    pub fn outlines(&self) -> impl Iterator<Item = (&ModuleIdentifier, &str)> {
        self.outlines.iter().map(|(id, s)| (id, s.as_str()))
    }
}

impl PipelineStage for AstDumpStage {
    fn name(&self) -> &'static str {
        "ast-dump"
    }

    fn process(&mut self, id: &ModuleIdentifier, env: &CompileEnvironment) -> Result<(), StageError> {
        if self.target.as_ref().is_some_and(|target| target != id) {
            return Ok(());
        }
        let module = env
            .module(id)
            .ok_or_else(|| StageError::new(format!("module `{id}` is not loaded")))?;
        self.outlines.insert(id.clone(), render_outline(module));
        Ok(())
    }
}

/// One line per node, indented by depth: `<kind> <start>..<end>`.
pub fn render_outline<'a>(root: impl Into<NodeRef<'a>>) -> String {
    let mut outline = Outline::default();
    match walk(&mut outline, root) {
        Ok(()) => outline.out,
        Err(never) => match never {},
    }
}

#[derive(Default)]
struct Outline {
    depth: usize,
    out: String,
}

impl<'a> Visitor<'a> for Outline {
    type Error = Infallible;

    fn enter_any(&mut self, node: NodeRef<'a>) -> Result<(), Self::Error> {
        let span = node.span();
        self.out.push_str(&"  ".repeat(self.depth));
        self.out.push_str(&format!("{} {}..{}\n", node.kind(), span.start, span.end));
        self.depth += 1;
        Ok(())
    }

    fn exit_any(&mut self, _node: NodeRef<'a>) -> Result<(), Self::Error> {
        self.depth -= 1;
        Ok(())
    }
}
