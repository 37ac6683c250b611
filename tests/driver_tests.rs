//! Compile driver: stage sequencing, session reuse and error modes.

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::*;
use resolvec::ast::*;
use resolvec::imports::ImportCollectionBuilder;
use resolvec::{
    AstDumpStage, CompileEnvironment, CompileError, Compiler, ErrorMode, InMemoryModuleLoader, ModuleIdentifier,
    PipelineStage, ResolveError, ResolverConfig, StageError,
};

/// Records `<stage>:<module>` into a shared log and fails on the listed modules.
struct Recorder {
    name: &'static str,
    log: Rc<RefCell<Vec<String>>>,
    fail_on: Vec<&'static str>,
}

impl Recorder {
    fn new(name: &'static str, log: &Rc<RefCell<Vec<String>>>) -> Self {
        Self {
            name,
            log: Rc::clone(log),
            fail_on: Vec::new(),
        }
    }

    fn failing_on(mut self, modules: &[&'static str]) -> Self {
        self.fail_on = modules.to_vec();
        self
    }
}

impl PipelineStage for Recorder {
    fn name(&self) -> &'static str {
        self.name
    }

    fn process(&mut self, id: &ModuleIdentifier, env: &CompileEnvironment) -> Result<(), StageError> {
        assert!(env.contains(id), "stage ran on unloaded module {id}");
        self.log.borrow_mut().push(format!("{}:{}", self.name, id));
        if self.fail_on.contains(&id.as_str()) {
            return Err(StageError::new(format!("{} rejects {id}", self.name)));
        }
        Ok(())
    }
}

fn compiler(mode: ErrorMode) -> Compiler<StaticLocator> {
    Compiler::with_locator(ResolverConfig::default().with_error_mode(mode), StaticLocator::new())
}

fn diamond_loader() -> InMemoryModuleLoader {
    InMemoryModuleLoader::new()
        .with_module(precis("B", uses(&["D"])))
        .with_module(precis("C", uses(&["D"])))
        .with_module(precis("D", uses(&[])))
}

fn ids(names: &[&str]) -> Vec<ModuleIdentifier> {
    names.iter().map(|n| ModuleIdentifier::new(*n)).collect()
}

// ============================================================================
// Sequencing
// ============================================================================

#[test]
fn stages_run_per_module_in_compile_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut populate = Recorder::new("populate", &log);
    let mut check = Recorder::new("check", &log);
    let mut loader = diamond_loader();
    let mut compiler = compiler(ErrorMode::FailFast);

    let report = compiler
        .compile_target(&facility("A", uses(&["B", "C"])), &mut loader, &mut [&mut populate, &mut check])
        .unwrap();

    assert_eq!(report.order, ids(&["D", "B", "C", "A"]));
    assert_eq!(report.processed, report.order);
    assert!(report.skipped.is_empty());
    assert_eq!(
        *log.borrow(),
        [
            "populate:D",
            "check:D",
            "populate:B",
            "check:B",
            "populate:C",
            "check:C",
            "populate:A",
            "check:A"
        ]
    );
    let completed: Vec<_> = compiler.env().completed().cloned().collect();
    assert_eq!(completed, ids(&["D", "B", "C", "A"]));
}

#[test]
fn modules_completed_by_an_earlier_target_are_skipped() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut recorder = Recorder::new("check", &log);
    let mut loader = InMemoryModuleLoader::new()
        .with_module(precis("Boolean_Theory", uses(&[])))
        .with_module(precis("Integer_Theory", uses(&["Boolean_Theory"])));
    let mut compiler = compiler(ErrorMode::FailFast);

    compiler
        .compile_target(&facility("First_Fac", uses(&["Integer_Theory"])), &mut loader, &mut [&mut recorder])
        .unwrap();
    log.borrow_mut().clear();

    let report = compiler
        .compile_target(&facility("Second_Fac", uses(&["Integer_Theory"])), &mut loader, &mut [&mut recorder])
        .unwrap();

    assert_eq!(report.order, ids(&["Boolean_Theory", "Integer_Theory", "Second_Fac"]));
    assert_eq!(report.skipped, ids(&["Boolean_Theory", "Integer_Theory"]));
    assert_eq!(report.processed, ids(&["Second_Fac"]));
    assert_eq!(*log.borrow(), ["check:Second_Fac"]);
    assert_eq!(loader.load_count("Integer_Theory"), 1);
}

// ============================================================================
// Error modes
// ============================================================================

#[test]
fn fail_fast_stops_at_the_first_stage_error() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut populate = Recorder::new("populate", &log).failing_on(&["B"]);
    let mut check = Recorder::new("check", &log);
    let mut loader = diamond_loader();
    let mut compiler = compiler(ErrorMode::FailFast);

    let err = compiler
        .compile_target(&facility("A", uses(&["B", "C"])), &mut loader, &mut [&mut populate, &mut check])
        .unwrap_err();

    match &err {
        CompileError::Stage { stage, module, source } => {
            assert_eq!(*stage, "populate");
            assert_eq!(module.as_str(), "B");
            assert_eq!(source.message, "populate rejects B");
        }
        other => panic!("expected a stage error, got {other:?}"),
    }
    assert_eq!(*log.borrow(), ["populate:D", "check:D", "populate:B"]);
    assert!(compiler.env().is_complete(&ModuleIdentifier::new("D")));
    assert!(!compiler.env().is_complete(&ModuleIdentifier::new("B")));
}

fn failure_summary(err: &CompileError) -> Vec<String> {
    let describe = |e: &CompileError| match e {
        CompileError::Stage { module, .. } => format!("stage:{module}"),
        CompileError::DependencyFailed { module, dependency } => format!("blocked:{module}<-{dependency}"),
        other => panic!("unexpected error {other:?}"),
    };
    match err {
        CompileError::Multiple { errors } => errors.iter().map(describe).collect(),
        single => vec![describe(single)],
    }
}

#[test]
fn collect_mode_reports_every_failing_module() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut check = Recorder::new("check", &log).failing_on(&["B", "C"]);
    let mut loader = diamond_loader();
    let mut compiler = compiler(ErrorMode::Collect);

    let err = compiler
        .compile_target(&facility("A", uses(&["B", "C"])), &mut loader, &mut [&mut check])
        .unwrap_err();

    assert_eq!(failure_summary(&err), ["stage:B", "stage:C", "blocked:A<-B"]);
    insta::assert_snapshot!(err.to_string(), @"3 modules failed to compile");
    assert_eq!(*log.borrow(), ["check:D", "check:B", "check:C"]);
    let completed: Vec<_> = compiler.env().completed().cloned().collect();
    assert_eq!(completed, ids(&["D"]));
}

#[test]
fn collect_mode_keeps_compiling_independent_modules() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut check = Recorder::new("check", &log).failing_on(&["C"]);
    let mut loader = diamond_loader();
    let mut compiler = compiler(ErrorMode::Collect);

    let err = compiler
        .compile_target(&facility("A", uses(&["B", "C"])), &mut loader, &mut [&mut check])
        .unwrap_err();

    assert_eq!(failure_summary(&err), ["stage:C", "blocked:A<-C"]);
    assert_eq!(*log.borrow(), ["check:D", "check:B", "check:C"]);
    let completed: Vec<_> = compiler.env().completed().cloned().collect();
    assert_eq!(completed, ids(&["D", "B"]));
}

#[test]
fn collect_mode_blocks_dependents_of_a_failed_module_transitively() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut check = Recorder::new("check", &log).failing_on(&["D"]);
    let mut loader = InMemoryModuleLoader::new()
        .with_module(precis("B", uses(&["D"])))
        .with_module(precis("D", uses(&[])));
    let mut compiler = compiler(ErrorMode::Collect);
    let root = facility("A", uses(&["B"]));

    let err = compiler.compile_target(&root, &mut loader, &mut [&mut check]).unwrap_err();

    assert_eq!(failure_summary(&err), ["stage:D", "blocked:B<-D", "blocked:A<-B"]);
    assert_eq!(*log.borrow(), ["check:D"]);
    assert_eq!(compiler.env().completed().count(), 0);

    // Nothing was recorded as compiled, so a later request retries the whole chain.
    check.fail_on.clear();
    log.borrow_mut().clear();
    let report = compiler.compile_target(&root, &mut loader, &mut [&mut check]).unwrap();
    assert!(report.skipped.is_empty());
    assert_eq!(*log.borrow(), ["check:D", "check:B", "check:A"]);
}

#[test]
fn collect_mode_with_one_failure_returns_it_directly() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut check = Recorder::new("check", &log).failing_on(&["A"]);
    let mut loader = diamond_loader();
    let mut compiler = compiler(ErrorMode::Collect);

    let err = compiler
        .compile_target(&facility("A", uses(&["B", "C"])), &mut loader, &mut [&mut check])
        .unwrap_err();
    assert!(matches!(err, CompileError::Stage { .. }));
    assert_eq!(compiler.env().completed().count(), 3);
}

#[test]
fn resolution_errors_abort_before_any_stage_runs() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut check = Recorder::new("check", &log);
    let mut loader = InMemoryModuleLoader::new()
        .with_module(precis("B", uses(&["C"])))
        .with_module(precis("C", uses(&["A"])));
    let mut compiler = compiler(ErrorMode::Collect);

    let err = compiler
        .compile_target(&precis("A", uses(&["B"])), &mut loader, &mut [&mut check])
        .unwrap_err();

    assert!(matches!(
        err,
        CompileError::Resolve(ResolveError::CircularDependency { .. })
    ));
    assert!(log.borrow().is_empty());
    assert_eq!(compiler.env().completed().count(), 0);
}

// ============================================================================
// AST outline stage
// ============================================================================

/// `Facility Stack_Fac; uses Stack_Template; Operation Push(alters E: Entry); end Stack_Fac;`
fn stack_facility() -> ModuleDecl {
    ModuleDecl::Facility(FacilityModule {
        span: Span::new(0, 120),
        name: name_at("Stack_Fac", 9),
        imports: ImportCollectionBuilder::new(Span::new(20, 40)).build(),
        requires: None,
        block: Block {
            span: Span::new(41, 106),
            items: vec![Decl::Operation(OperationDecl {
                span: Span::new(41, 80),
                name: name_at("Push", 51),
                parameters: vec![ParameterDecl {
                    span: Span::new(56, 71),
                    mode: ParameterMode::Alters,
                    name: name_at("E", 63),
                    ty: Type::Named(NamedType {
                        span: Span::new(66, 71),
                        qualifier: None,
                        name: name_at("Entry", 66),
                    }),
                }],
                return_type: None,
                requires: None,
                ensures: None,
            })],
        },
    })
}

#[test]
fn ast_dump_stage_outlines_each_module() {
    let mut dump = AstDumpStage::new();
    let mut loader = InMemoryModuleLoader::new();
    let mut compiler = compiler(ErrorMode::FailFast);

    compiler
        .compile_target(&stack_facility(), &mut loader, &mut [&mut dump])
        .unwrap();

    let outline = dump.outline(&ModuleIdentifier::new("Stack_Fac")).unwrap();
    insta::assert_snapshot!(outline.trim_end(), @r"
    FacilityModule 0..120
      ImportCollection 20..40
      Block 41..106
        OperationDecl 41..80
          ParameterDecl 56..71
            NamedType 66..71
    ");
}

#[test]
fn targeted_ast_dump_skips_dependencies() {
    let root = facility("Main_Fac", uses(&["Boolean_Theory"]));
    let mut loader = InMemoryModuleLoader::new().with_module(precis("Boolean_Theory", uses(&[])));

    let mut everything = AstDumpStage::new();
    let mut target_only = AstDumpStage::for_target("Main_Fac");
    compiler(ErrorMode::FailFast)
        .compile_target(&root, &mut loader, &mut [&mut everything, &mut target_only])
        .unwrap();

    let all: Vec<_> = everything.outlines().map(|(id, _)| id.as_str()).collect();
    assert_eq!(all, ["Boolean_Theory", "Main_Fac"]);
    let dumped: Vec<_> = target_only.outlines().map(|(id, _)| id.as_str()).collect();
    assert_eq!(dumped, ["Main_Fac"]);
    assert!(target_only.outline(&ModuleIdentifier::new("Boolean_Theory")).is_none());
}
