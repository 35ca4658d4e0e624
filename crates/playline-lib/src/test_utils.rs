//! Fixtures shared by the unit tests.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use playline_core::{
    CompilationResult, Diagnostic, Instruction, Node, OpCode, Operand, Position, Program, Range,
    Severity, StringTableEntry,
};

/// Write `Game.yarnproject` into `dir` and return its path.
pub fn write_project(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("Game.yarnproject");
    fs::write(&path, json).unwrap();
    path
}

/// One node that runs a single line and stops.
pub fn hello_program() -> Program {
    let start = Node {
        name: "Start".to_owned(),
        instructions: vec![
            Instruction::new(OpCode::RunLine, [Operand::from("line:1"), Operand::from(0.0)]),
            Instruction::new(OpCode::Stop, Vec::new()),
        ],
        ..Node::default()
    };

    Program {
        name: "Foo".to_owned(),
        nodes: IndexMap::from([("Start".to_owned(), start)]),
        initial_values: IndexMap::new(),
    }
}

pub fn line(text: &str, node: &str, line_number: i32, metadata: &[&str]) -> StringTableEntry {
    StringTableEntry {
        text: text.to_owned(),
        node_name: node.to_owned(),
        line_number,
        file_name: "Foo.yarn".to_owned(),
        metadata: metadata.iter().map(|tag| tag.to_string()).collect(),
        is_implicit_tag: false,
    }
}

/// Clean result for `Foo.yarn`: one program, one line.
pub fn hello_result() -> CompilationResult {
    CompilationResult {
        program: Some(hello_program()),
        string_table: IndexMap::from([(
            "line:1".to_owned(),
            line("Hi", "Start", 3, &["lastline"]),
        )]),
        diagnostics: Vec::new(),
    }
}

/// Diagnostic located in `Foo.yarn` at a zero-based line and column.
pub fn diagnostic_at(severity: Severity, message: &str, line: i32, character: i32) -> Diagnostic {
    Diagnostic::new(severity, message).in_file(
        "Foo.yarn",
        Range::new(
            Position::new(line, character),
            Position::new(line, character + 1),
        ),
    )
}
