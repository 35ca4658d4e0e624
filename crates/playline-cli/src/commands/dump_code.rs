use std::path::PathBuf;

use playline_core::Colors;
use playline_lib::dump::dump;

use super::run_common::{compile_inputs, report_diagnostics};
use crate::log;

pub struct DumpCodeArgs {
    pub inputs: Vec<PathBuf>,
    pub compiler: PathBuf,
    pub color: bool,
}

pub fn run(args: DumpCodeArgs) {
    let colors = Colors::new(args.color);
    let compiled = compile_inputs(&args.inputs, &args.compiler, colors);
    report_diagnostics(&compiled, colors);

    let result = compiled.result();
    let Some(program) = &result.program else {
        log::error(colors, "the compiler produced no program");
        std::process::exit(1);
    };

    print!("{}", dump(program, &result.string_table, colors));
}
