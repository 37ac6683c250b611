//! End-to-end resolution of an on-disk workspace through the search-path loader.

mod common;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use common::*;
use resolvec::ast::ModuleDecl;
use resolvec::{
    AstDumpStage, Compiler, LoadError, ModuleIdentifier, ModuleLoader, ModuleParser, ResolverConfig, SearchPathLoader,
};

static COUNTER: AtomicU64 = AtomicU64::new(0);

fn unique_temp_dir() -> PathBuf {
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let pid = std::process::id();
    let ts = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    std::env::temp_dir().join(format!("resolvec_search_path_test_{}_{pid}_{id}", ts))
}

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn list(line: &str, keyword: &str) -> Vec<String> {
    line.strip_prefix(keyword)
        .map(|rest| {
            rest.trim_end_matches(';')
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

fn as_strs(names: &[String]) -> Vec<&str> {
    names.iter().map(String::as_str).collect()
}

/// Line-oriented stand-in for the real parser:
///
/// ```text
/// Facility Main_Fac;
/// uses Stack_Template;
/// implicit Array_Realiz;
/// external Std_Io;
/// ```
fn toy_parser(path: &Path, source: &str) -> Result<ModuleDecl, LoadError> {
    let mut lines = source.lines().map(str::trim);
    let header = lines.next().unwrap_or_default();
    let (keyword, name) = header
        .trim_end_matches(';')
        .split_once(' ')
        .ok_or_else(|| LoadError::Parse {
            path: path.to_path_buf(),
            message: "missing module header".to_string(),
        })?;

    let (mut explicit, mut implicit, mut external) = (Vec::new(), Vec::new(), Vec::new());
    for line in lines {
        explicit.extend(list(line, "uses "));
        implicit.extend(list(line, "implicit "));
        external.extend(list(line, "external "));
    }
    let imports = imports(&as_strs(&explicit), &as_strs(&implicit), &as_strs(&external));

    match keyword {
        "Facility" => Ok(facility(name, imports)),
        "Precis" => Ok(precis(name, imports)),
        "Concept" => Ok(concept(name, imports)),
        "Realization" => Ok(realization(name, "Stack_Template", imports)),
        other => Err(LoadError::Parse {
            path: path.to_path_buf(),
            message: format!("unknown module keyword `{other}`"),
        }),
    }
}

#[test]
fn compiles_a_workspace_from_disk() {
    resolvec::init_tracing_with_default("resolvec=debug");
    let tmp = unique_temp_dir();
    write(
        &tmp.join("Main_Fac.fa"),
        "Facility Main_Fac;\nuses Boolean_Theory;\nimplicit Stack_Template, Array_Realiz;\nexternal Std_Io;\n",
    );
    write(&tmp.join("theories/Boolean_Theory.mt"), "Precis Boolean_Theory;\n");
    write(&tmp.join("concepts/Stack_Template.co"), "Concept Stack_Template;\nuses Boolean_Theory;\n");
    write(&tmp.join("concepts/Array_Realiz.rb"), "Realization Array_Realiz;\nimplicit Stack_Template;\n");
    write(&tmp.join("native/Std_Io.java"), "class Std_Io {}\n");

    let config = ResolverConfig::new().with_workspace_dir(&tmp);
    let mut parser = toy_parser;
    let root_path = tmp.join("Main_Fac.fa");
    let root = parser
        .parse(&root_path, &fs::read_to_string(&root_path).unwrap())
        .unwrap();

    let mut loader = SearchPathLoader::from_config(&config, toy_parser);
    let mut dump = AstDumpStage::new();
    let mut compiler = Compiler::new(config);
    let report = compiler.compile_target(&root, &mut loader, &mut [&mut dump]).unwrap();

    let order: Vec<_> = report.order.iter().map(|m| m.as_str()).collect();
    assert_eq!(order, ["Boolean_Theory", "Stack_Template", "Array_Realiz", "Main_Fac"]);

    let env = compiler.env();
    assert_eq!(
        env.file(&ModuleIdentifier::new("Stack_Template")),
        Some(tmp.join("concepts/Stack_Template.co").as_path())
    );
    assert_eq!(
        env.file(&ModuleIdentifier::new("Std_Io")),
        Some(tmp.join("native/Std_Io.java").as_path())
    );
    assert!(env.module(&ModuleIdentifier::new("Std_Io")).is_none());
    assert_eq!(dump.outlines().count(), 4);

    fs::remove_dir_all(&tmp).unwrap();
}

#[test]
fn unknown_module_reports_the_search_path() {
    let tmp = unique_temp_dir();
    fs::create_dir_all(&tmp).unwrap();

    let config = ResolverConfig::new().with_workspace_dir(&tmp);
    let mut loader = SearchPathLoader::from_config(&config, toy_parser);
    match loader.load_module(&ModuleIdentifier::new("Ghost_Theory")) {
        Err(LoadError::NotFound { searched, .. }) => assert_eq!(searched, vec![tmp.clone()]),
        other => panic!("expected not found, got {other:?}"),
    }

    fs::remove_dir_all(&tmp).unwrap();
}
