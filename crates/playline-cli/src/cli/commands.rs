//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("playline")
        .about("Compile Yarn dialogue into Lua modules")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(compile_command())
        .subcommand(dump_code_command())
        .subcommand(create_project_command())
}

/// Compile dialogue into a `.yarnc.lua` module or a JSON report.
pub fn compile_command() -> Command {
    Command::new("compile")
        .about("Compile Yarn files into a Lua module")
        .override_usage(
            "\
  playline compile <INPUT>... [-o <DIR>] [-n <NAME>] [-t <NAME>]
  playline compile <PROJECT> --stdout",
        )
        .after_help(
            r#"EXAMPLES:
  playline compile Intro.yarn                  # writes ./Intro.yarnc.lua
  playline compile a.yarn b.yarn -o build      # writes build/Output.yarnc.lua
  playline compile Game.yarnproject -n Game    # compile a whole project
  playline compile Intro.yarn --stdout | jq    # JSON report, no files"#,
        )
        .arg(inputs_arg())
        .arg(output_dir_arg())
        .arg(output_name_arg())
        .arg(string_table_name_arg())
        .arg(stdout_arg())
        .arg(compiler_arg())
        .arg(color_arg())
}

/// Print a listing of the compiled program.
pub fn dump_code_command() -> Command {
    Command::new("dump-code")
        .about("Show the compiled program as a readable listing")
        .after_help(
            r#"EXAMPLES:
  playline dump-code Intro.yarn
  playline dump-code Game.yarnproject --color never"#,
        )
        .arg(inputs_arg())
        .arg(compiler_arg())
        .arg(color_arg())
}

/// Write a fresh project manifest.
pub fn create_project_command() -> Command {
    Command::new("create-proj")
        .about("Create a new .yarnproject file")
        .after_help(
            r#"EXAMPLES:
  playline create-proj Game                    # writes ./Game.yarnproject
  playline create-proj Game --exclude-builds   # skip **/builds/* sources"#,
        )
        .arg(project_name_arg())
        .arg(exclude_builds_arg())
        .arg(output_dir_arg().help("Directory to create the project file in"))
        .arg(color_arg())
}
