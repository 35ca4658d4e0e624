mod cli;
mod commands;
mod log;

use cli::{CompileParams, CreateProjectParams, DumpCodeParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("compile", m)) => {
            let params = CompileParams::from_matches(m);
            commands::compile::run(params.into());
        }
        Some(("dump-code", m)) => {
            let params = DumpCodeParams::from_matches(m);
            commands::dump_code::run(params.into());
        }
        Some(("create-proj", m)) => {
            let params = CreateProjectParams::from_matches(m);
            commands::create_project::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
