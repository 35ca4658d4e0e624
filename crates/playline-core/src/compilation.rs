//! Compilation inputs and outputs exchanged with the external compiler.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::program::Program;
use crate::types::Type;

/// Everything the compiler needs for one run.
///
/// The source list and language version are fixed at construction.
/// Declarations can be added until the job is handed to a compiler, which
/// only ever borrows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilationJob {
    source_files: Vec<PathBuf>,
    language_version: i32,
    #[serde(default)]
    declarations: Vec<FunctionDeclaration>,
}

impl CompilationJob {
    pub fn new(source_files: impl IntoIterator<Item = PathBuf>, language_version: i32) -> Self {
        Self {
            source_files: source_files.into_iter().collect(),
            language_version,
            declarations: Vec::new(),
        }
    }

    pub fn declare(&mut self, declaration: FunctionDeclaration) {
        self.declarations.push(declaration);
    }

    pub fn source_files(&self) -> &[PathBuf] {
        &self.source_files
    }

    pub fn language_version(&self) -> i32 {
        self.language_version
    }

    pub fn declarations(&self) -> &[FunctionDeclaration] {
        &self.declarations
    }
}

/// An externally implemented function the dialogue may call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDeclaration {
    pub name: String,
    pub return_type: Type,
    pub parameters: Vec<Type>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

/// What the compiler hands back for a job.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilationResult {
    #[serde(default)]
    pub program: Option<Program>,
    #[serde(default)]
    pub string_table: IndexMap<String, StringTableEntry>,
    #[serde(default)]
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationResult {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    /// Text for a string table ID, if present.
    pub fn line_text(&self, id: &str) -> Option<&str> {
        self.string_table.get(id).map(|entry| entry.text.as_str())
    }
}

/// Raw string table entry as produced by the compiler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringTableEntry {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub node_name: String,
    #[serde(default)]
    pub line_number: i32,
    #[serde(default)]
    pub file_name: String,
    /// Free-form `key:value` tags attached to the line.
    #[serde(default)]
    pub metadata: Vec<String>,
    #[serde(default)]
    pub is_implicit_tag: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    #[serde(alias = "INFO", alias = "info")]
    Info,
    #[serde(alias = "WARNING", alias = "warning")]
    Warning,
    #[serde(alias = "ERROR", alias = "error")]
    Error,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Zero-based line/character position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all(serialize = "PascalCase", deserialize = "camelCase"))]
pub struct Position {
    #[serde(default)]
    pub line: i32,
    #[serde(default)]
    pub character: i32,
}

impl Position {
    pub fn new(line: i32, character: i32) -> Self {
        Self { line, character }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "PascalCase", deserialize = "camelCase"))]
pub struct Range {
    #[serde(default)]
    pub start: Position,
    #[serde(default)]
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "PascalCase", deserialize = "camelCase"))]
pub struct Diagnostic {
    pub message: String,
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub range: Range,
    pub severity: Severity,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            file_name: String::new(),
            range: Range::default(),
            severity,
        }
    }

    pub fn in_file(mut self, file_name: impl Into<String>, range: Range) -> Self {
        self.file_name = file_name.into();
        self.range = range;
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.file_name.is_empty() {
            write!(
                f,
                "{}:{}:{}: ",
                self.file_name,
                self.range.start.line + 1,
                self.range.start.character + 1
            )?;
        }
        write!(f, "{}: {}", self.severity, self.message)
    }
}
