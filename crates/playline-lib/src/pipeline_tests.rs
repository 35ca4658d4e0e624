use std::cell::Cell;
use std::fs;
use std::path::PathBuf;

use playline_core::{CompilationJob, CompilationResult, Severity};

use crate::emit::ModuleOptions;
use crate::test_utils::{diagnostic_at, hello_result, write_project};
use crate::{Error, Pipeline};

fn foo() -> Vec<PathBuf> {
    vec![PathBuf::from("Foo.yarn")]
}

#[test]
fn clean_compile_emits_module() {
    let dir = tempfile::tempdir().unwrap();
    let compiled = Pipeline::from_inputs(&foo())
        .unwrap()
        .compile(&|_: &CompilationJob| hello_result())
        .unwrap();

    assert!(compiled.is_valid());
    let artifact = compiled
        .emit_module(&ModuleOptions::new(dir.path()))
        .unwrap();

    assert_eq!(artifact.program_path, dir.path().join("Foo.yarnc.lua"));
    assert_eq!(
        artifact.string_table_path.file_name().unwrap(),
        "Foo-Lines.csv"
    );

    let text = fs::read_to_string(&artifact.program_path).unwrap();
    assert!(text.contains("Playline.Compiled.Foo = {"));
    assert!(text.contains("Node = \"Start\""));
    assert!(text.contains("LineNumber = 3"));
    // `lastline` has no `:` so it projects to an empty-valued tag
    assert!(text.contains("Tags = {\n        lastline = \"\"\n      }"));
}

#[test]
fn errors_block_emission_but_keep_diagnostics() {
    let dir = tempfile::tempdir().unwrap();
    let compiler = |_: &CompilationJob| CompilationResult {
        diagnostics: vec![
            diagnostic_at(Severity::Warning, "unused variable", 1, 0),
            diagnostic_at(Severity::Error, "syntax error", 4, 2),
        ],
        ..hello_result()
    };

    let compiled = Pipeline::from_inputs(&foo())
        .unwrap()
        .compile(&compiler)
        .unwrap();

    assert!(!compiled.is_valid());
    assert_eq!(compiled.diagnostics().len(), 2);

    let err = compiled
        .emit_module(&ModuleOptions::new(dir.path()))
        .unwrap_err();
    assert!(matches!(err, Error::Rejected { errors: 1 }));
    assert_eq!(err.exit_code(), 1);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);

    let mut out = Vec::new();
    let err = compiled.write_report(&mut out).unwrap_err();
    assert!(matches!(err, Error::Rejected { .. }));
    assert!(out.is_empty());
}

#[test]
fn warnings_do_not_block_emission() {
    let dir = tempfile::tempdir().unwrap();
    let compiler = |_: &CompilationJob| CompilationResult {
        diagnostics: vec![
            diagnostic_at(Severity::Warning, "unused variable", 1, 0),
            diagnostic_at(Severity::Info, "note", 0, 0),
        ],
        ..hello_result()
    };

    let compiled = Pipeline::from_inputs(&foo())
        .unwrap()
        .compile(&compiler)
        .unwrap();

    assert!(compiled.is_valid());
    let artifact = compiled
        .emit_module(&ModuleOptions::new(dir.path()))
        .unwrap();
    assert!(artifact.program_path.is_file());
}

#[test]
fn several_manifests_fail_before_compiling() {
    let calls = Cell::new(0);
    let compiler = |_: &CompilationJob| {
        calls.set(calls.get() + 1);
        hello_result()
    };
    let inputs = vec![
        PathBuf::from("Blob.yarnproject"),
        PathBuf::from("Other.yarnproject"),
    ];

    let err = Pipeline::from_inputs(&inputs)
        .and_then(|pipeline| pipeline.compile(&compiler))
        .unwrap_err();

    assert!(matches!(err, Error::Usage(_)));
    assert_eq!(err.exit_code(), 2);
    assert_eq!(calls.get(), 0);
}

#[test]
fn manifest_mixed_with_sources_is_rejected() {
    let inputs = vec![PathBuf::from("Foo.yarn"), PathBuf::from("Blob.yarnproject")];
    let err = Pipeline::from_inputs(&inputs).unwrap_err();
    assert!(matches!(err, Error::Usage(_)));
}

#[test]
fn compiler_sees_the_built_job() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Intro.yarn"), "title: Start\n---\n===\n").unwrap();
    let manifest = write_project(dir.path(), r#"{"projectFileVersion": 2}"#);

    let seen = Cell::new(0);
    let compiler = |job: &CompilationJob| {
        seen.set(job.source_files().len());
        CompilationResult::default()
    };

    let pipeline = Pipeline::from_inputs(&[manifest]).unwrap();
    assert_eq!(pipeline.job().language_version(), 2);
    let compiled = pipeline.compile(&compiler).unwrap();

    assert_eq!(seen.get(), 1);
    assert!(compiled.result().program.is_none());
}

#[test]
fn manifest_name_becomes_module_name() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_project(dir.path(), r#"{"projectFileVersion": 2}"#);
    let out = dir.path().join("build");

    let artifact = Pipeline::from_inputs(&[manifest])
        .unwrap()
        .compile(&|_: &CompilationJob| hello_result())
        .unwrap()
        .emit_module(&ModuleOptions::new(&out))
        .unwrap();

    assert_eq!(artifact.name, "Game");
    assert_eq!(artifact.program_path, out.join("Game.yarnc.lua"));
}

#[test]
fn report_is_written_for_valid_results() {
    let compiled = Pipeline::from_inputs(&foo())
        .unwrap()
        .compile(&|_: &CompilationJob| hello_result())
        .unwrap();

    let mut out = Vec::new();
    compiled.write_report(&mut out).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["Strings"]["line:1"]["Text"], "Hi");
    assert_eq!(value["Program"]["Name"], "Foo");
}
