//! Presentation of compiler diagnostics.

mod printer;


use std::fs;

use indexmap::IndexMap;
use playline_core::Diagnostic;

pub use printer::DiagnosticsPrinter;

/// Read every file the diagnostics point into.
///
/// Files that can't be read are left out; their diagnostics print without
/// a snippet.
pub fn load_sources(diagnostics: &[Diagnostic]) -> IndexMap<String, String> {
    let mut sources = IndexMap::new();
    for diag in diagnostics {
        if diag.file_name.is_empty() || sources.contains_key(&diag.file_name) {
            continue;
        }
        if let Ok(text) = fs::read_to_string(&diag.file_name) {
            sources.insert(diag.file_name.clone(), text);
        }
    }
    sources
}
