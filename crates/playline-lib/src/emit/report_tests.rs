use playline_core::{CompilationResult, Severity};

use super::report::write_report;
use crate::test_utils::{diagnostic_at, hello_result};

fn report(result: &CompilationResult) -> String {
    let mut out = Vec::new();
    write_report(result, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn hello_report() {
    let text = report(&hello_result());

    insta::assert_snapshot!(text, @r#"{"Program":{"Name":"Foo","Nodes":{"Start":{"Name":"Start","Instructions":[{"Opcode":"RunLine","Operands":["line:1",0.0]},{"Opcode":"Stop","Operands":[]}],"Labels":{},"Tags":[],"SourceTextStringID":null,"Headers":[]}},"InitialValues":{}},"Strings":{"line:1":{"Text":"Hi"}},"Diagnostics":[]}"#);
    assert!(text.ends_with("}\n"));
}

#[test]
fn strings_keep_only_text() {
    let text = report(&hello_result());
    assert!(!text.contains("LineNumber"));
    assert!(!text.contains("lastline"));
}

#[test]
fn missing_program_is_null() {
    let result = CompilationResult::default();
    assert_eq!(
        report(&result),
        "{\"Program\":null,\"Strings\":{},\"Diagnostics\":[]}\n"
    );
}

#[test]
fn diagnostics_use_symbolic_severity() {
    let result = CompilationResult {
        diagnostics: vec![diagnostic_at(Severity::Warning, "unused variable", 2, 4)],
        ..CompilationResult::default()
    };

    let value: serde_json::Value = serde_json::from_str(&report(&result)).unwrap();
    assert_eq!(
        value["Diagnostics"][0],
        serde_json::json!({
            "Message": "unused variable",
            "FileName": "Foo.yarn",
            "Range": {
                "Start": {"Line": 2, "Character": 4},
                "End": {"Line": 2, "Character": 5}
            },
            "Severity": "Warning"
        })
    );
}

#[test]
fn every_severity_maps_by_name() {
    let result = CompilationResult {
        diagnostics: vec![
            diagnostic_at(Severity::Info, "a", 0, 0),
            diagnostic_at(Severity::Warning, "b", 0, 0),
            diagnostic_at(Severity::Error, "c", 0, 0),
        ],
        ..CompilationResult::default()
    };

    let value: serde_json::Value = serde_json::from_str(&report(&result)).unwrap();
    let severities: Vec<_> = value["Diagnostics"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["Severity"].as_str().unwrap().to_owned())
        .collect();
    assert_eq!(severities, ["Info", "Warning", "Error"]);
}
