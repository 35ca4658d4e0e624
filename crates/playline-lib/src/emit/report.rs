//! JSON report of a compilation result.

use std::io::Write;

use indexmap::IndexMap;
use playline_core::{CompilationResult, Diagnostic, Program};
use serde::Serialize;

use crate::Result;

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Report<'a> {
    program: Option<&'a Program>,
    strings: IndexMap<&'a str, LineText<'a>>,
    diagnostics: &'a [Diagnostic],
}

/// Only the text survives; provenance and tags are for the module output.
#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct LineText<'a> {
    text: &'a str,
}

/// Write `result` as a single line of compact JSON.
pub fn write_report(result: &CompilationResult, mut out: impl Write) -> Result<()> {
    let report = Report {
        program: result.program.as_ref(),
        strings: result
            .string_table
            .iter()
            .map(|(id, entry)| (id.as_str(), LineText { text: &entry.text }))
            .collect(),
        diagnostics: &result.diagnostics,
    };

    serde_json::to_writer(&mut out, &report)?;
    writeln!(out).map_err(serde_json::Error::io)?;
    out.flush().map_err(serde_json::Error::io)?;
    Ok(())
}
