use std::io;
use std::path::PathBuf;

use playline_core::Colors;
use playline_lib::emit::ModuleOptions;

use super::run_common::{compile_inputs, report_diagnostics};
use crate::log;

pub struct CompileArgs {
    pub inputs: Vec<PathBuf>,
    pub output_dir: PathBuf,
    pub output_name: Option<String>,
    pub string_table_name: Option<String>,
    pub stdout: bool,
    pub compiler: PathBuf,
    pub color: bool,
}

impl CompileArgs {
    fn module_options(&self) -> ModuleOptions {
        ModuleOptions {
            output_dir: self.output_dir.clone(),
            output_name: self.output_name.clone(),
            string_table_name: self.string_table_name.clone(),
        }
    }
}

pub fn run(args: CompileArgs) {
    let colors = Colors::new(args.color);
    let compiled = compile_inputs(&args.inputs, &args.compiler, colors);
    report_diagnostics(&compiled, colors);

    if args.stdout {
        if let Err(e) = compiled.write_report(io::stdout().lock()) {
            log::fatal(colors, &e);
        }
        return;
    }

    match compiled.emit_module(&args.module_options()) {
        Ok(artifact) => log::info(colors, format!("Wrote {}", artifact.program_path.display())),
        Err(e) => log::fatal(colors, &e),
    }
}
