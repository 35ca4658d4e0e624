use std::path::PathBuf;

use playline_core::{CompilationJob, CompilationResult, Diagnostic, Severity};

use crate::Error;
use crate::compiler::{Compiler, ExternalCompiler};

#[test]
fn closures_are_compilers() {
    let compiler = |job: &CompilationJob| CompilationResult {
        diagnostics: vec![Diagnostic::new(
            Severity::Info,
            format!("{} file(s)", job.source_files().len()),
        )],
        ..CompilationResult::default()
    };

    let job = CompilationJob::new([PathBuf::from("Foo.yarn")], 2);
    let result = compiler.compile(&job).unwrap();
    assert_eq!(result.diagnostics[0].message, "1 file(s)");
}

#[test]
fn missing_compiler_binary_is_an_io_error() {
    let compiler = ExternalCompiler::new("playline-test-no-such-compiler");
    let job = CompilationJob::new([PathBuf::from("Foo.yarn")], 2);

    let err = compiler.compile(&job).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[cfg(unix)]
#[test]
fn external_compiler_round_trip() {
    let script = r#"cat > /dev/null; printf '%s' '{"stringTable": {"line:1": {"text": "Hi", "nodeName": "Start", "lineNumber": 3}}}'"#;
    let compiler = ExternalCompiler::new("sh").arg("-c").arg(script);
    let job = CompilationJob::new([PathBuf::from("Foo.yarn")], 2);

    let result = compiler.compile(&job).unwrap();
    assert_eq!(result.line_text("line:1"), Some("Hi"));
    assert!(result.program.is_none());
}

#[cfg(unix)]
#[test]
fn external_compiler_receives_job_on_stdin() {
    // Echo the job back as an info diagnostic message.
    let script = r#"job=$(cat); printf '{"diagnostics": [{"message": %s, "severity": "INFO"}]}' "$(printf '%s' "$job" | sed 's/\\/\\\\/g; s/"/\\"/g; s/^/"/; s/$/"/')""#;
    let compiler = ExternalCompiler::new("sh").arg("-c").arg(script);
    let job = CompilationJob::new([PathBuf::from("Foo.yarn")], 2);

    let result = compiler.compile(&job).unwrap();
    assert_eq!(
        result.diagnostics[0].message,
        r#"{"sourceFiles":["Foo.yarn"],"languageVersion":2,"declarations":[]}"#
    );
}

#[cfg(unix)]
#[test]
fn failing_compiler_reports_stderr() {
    let compiler = ExternalCompiler::new("sh")
        .arg("-c")
        .arg("cat > /dev/null; echo 'parser exploded' >&2; exit 3");
    let job = CompilationJob::new([PathBuf::from("Foo.yarn")], 2);

    let err = compiler.compile(&job).unwrap_err();
    match err {
        Error::Compiler { stderr, .. } => assert_eq!(stderr, "parser exploded"),
        other => panic!("expected compiler error, got {other:?}"),
    }
}

#[cfg(unix)]
fn large_job() -> CompilationJob {
    CompilationJob::new(
        (0..20_000).map(|i| PathBuf::from(format!("dialogue/scene_{i:05}.yarn"))),
        2,
    )
}

#[cfg(unix)]
#[test]
fn chatty_compiler_does_not_stall_on_large_job() {
    use std::sync::mpsc;
    use std::time::Duration;

    let compiler = ExternalCompiler::new("sh").arg("-c").arg(
        r#"head -c 200000 /dev/zero | tr '\0' x >&2; cat > /dev/null; printf '{}'"#,
    );
    let job = large_job();

    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let _ = tx.send(compiler.compile(&job));
    });

    let result = rx
        .recv_timeout(Duration::from_secs(30))
        .expect("compiler call stalled")
        .unwrap();
    assert_eq!(result, CompilationResult::default());
}

#[cfg(unix)]
#[test]
fn compiler_exiting_before_reading_job_keeps_stderr() {
    let compiler = ExternalCompiler::new("sh")
        .arg("-c")
        .arg("echo 'unsupported language version' >&2; exit 4");

    let err = compiler.compile(&large_job()).unwrap_err();
    match err {
        Error::Compiler { stderr, .. } => {
            assert!(stderr.starts_with("unsupported language version"), "{stderr}");
        }
        other => panic!("expected compiler error, got {other:?}"),
    }
}
