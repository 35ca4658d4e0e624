//! Steps shared by the commands that run the compiler.

use std::path::{Path, PathBuf};

use playline_core::{Colors, Diagnostic};
use playline_lib::compiler::ExternalCompiler;
use playline_lib::diagnostics::load_sources;
use playline_lib::{Compiled, DiagnosticsPrinter, Pipeline};

use crate::log;

/// Build the job for `inputs` and run it through `compiler`.
///
/// Exits on usage, configuration and compiler failures.
pub fn compile_inputs(inputs: &[PathBuf], compiler: &Path, colors: Colors) -> Compiled {
    let compiler = ExternalCompiler::new(compiler);
    match Pipeline::from_inputs(inputs).and_then(|pipeline| pipeline.compile(&compiler)) {
        Ok(compiled) => compiled,
        Err(e) => log::fatal(colors, &e),
    }
}

/// Print every diagnostic, with source snippets where the file is readable.
pub fn print_diagnostics(diagnostics: &[Diagnostic], color: bool) {
    if diagnostics.is_empty() {
        return;
    }
    let sources = load_sources(diagnostics);
    eprint!(
        "{}",
        DiagnosticsPrinter::new(diagnostics)
            .sources(&sources)
            .colored(color)
            .render()
    );
}

/// Print diagnostics and stop if any of them is an error.
pub fn report_diagnostics(compiled: &Compiled, colors: Colors) {
    print_diagnostics(compiled.diagnostics(), colors.is_enabled());

    let warnings = compiled.result().warning_count();
    if warnings > 0 && compiled.is_valid() {
        log::warning(colors, format!("{warnings} warning(s) emitted"));
    }

    if !compiled.is_valid() {
        log::error(colors, "not compiling files because errors were encountered");
        std::process::exit(1);
    }
}
