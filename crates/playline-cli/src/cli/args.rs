//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Compiler used when neither `--compiler` nor the environment names one.
pub const DEFAULT_COMPILER: &str = "ysc-json";

/// Environment variable consulted for the compiler command.
pub const COMPILER_ENV: &str = "PLAYLINE_COMPILER";

/// Yarn source files or a single project file (positional, one or more).
pub fn inputs_arg() -> Arg {
    Arg::new("inputs")
        .value_name("INPUT")
        .value_parser(value_parser!(PathBuf))
        .num_args(1..)
        .required(true)
        .help("Yarn source files, or a single .yarnproject file")
}

/// Output directory (-o/--output-directory).
pub fn output_dir_arg() -> Arg {
    Arg::new("output_dir")
        .short('o')
        .long("output-directory")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .default_value(".")
        .help("Directory to write output to")
}

/// Base name of the compiled module (-n/--output-name).
pub fn output_name_arg() -> Arg {
    Arg::new("output_name")
        .short('n')
        .long("output-name")
        .value_name("NAME")
        .help("Name of the compiled module (default: input file name, or Output)")
}

/// Name of the string table sidecar (-t/--output-string-table-name).
pub fn string_table_name_arg() -> Arg {
    Arg::new("string_table_name")
        .short('t')
        .long("output-string-table-name")
        .value_name("NAME")
        .help("File name of the string table (default: <NAME>-Lines.csv)")
}

/// Write the JSON report to stdout instead of a module (--stdout).
pub fn stdout_arg() -> Arg {
    Arg::new("stdout")
        .long("stdout")
        .action(ArgAction::SetTrue)
        .help("Write a JSON report to stdout instead of a module file")
}

/// Compiler command (--compiler, $PLAYLINE_COMPILER).
pub fn compiler_arg() -> Arg {
    Arg::new("compiler")
        .long("compiler")
        .value_name("CMD")
        .env(COMPILER_ENV)
        .default_value(DEFAULT_COMPILER)
        .value_parser(value_parser!(PathBuf))
        .help("Compiler executable that reads a job on stdin and writes JSON")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Project name (positional).
pub fn project_name_arg() -> Arg {
    Arg::new("name")
        .value_name("NAME")
        .required(true)
        .help("Name of the project file to create")
}

/// Exclude build output from the project (--exclude-builds).
pub fn exclude_builds_arg() -> Arg {
    Arg::new("exclude_builds")
        .long("exclude-builds")
        .action(ArgAction::SetTrue)
        .help("Exclude **/builds/* from the project's sources")
}
