//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use super::args::DEFAULT_COMPILER;
use crate::commands::compile::CompileArgs;
use crate::commands::create_project::CreateProjectArgs;
use crate::commands::dump_code::DumpCodeArgs;

pub struct CompileParams {
    pub inputs: Vec<PathBuf>,
    pub output_dir: PathBuf,
    pub output_name: Option<String>,
    pub string_table_name: Option<String>,
    pub stdout: bool,
    pub compiler: PathBuf,
    pub color: ColorChoice,
}

impl CompileParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            inputs: parse_inputs(m),
            output_dir: parse_output_dir(m),
            output_name: m.get_one::<String>("output_name").cloned(),
            string_table_name: m.get_one::<String>("string_table_name").cloned(),
            stdout: m.get_flag("stdout"),
            compiler: parse_compiler(m),
            color: parse_color(m),
        }
    }
}

impl From<CompileParams> for CompileArgs {
    fn from(p: CompileParams) -> Self {
        Self {
            inputs: p.inputs,
            output_dir: p.output_dir,
            output_name: p.output_name,
            string_table_name: p.string_table_name,
            stdout: p.stdout,
            compiler: p.compiler,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpCodeParams {
    pub inputs: Vec<PathBuf>,
    pub compiler: PathBuf,
    pub color: ColorChoice,
}

impl DumpCodeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            inputs: parse_inputs(m),
            compiler: parse_compiler(m),
            color: parse_color(m),
        }
    }
}

impl From<DumpCodeParams> for DumpCodeArgs {
    fn from(p: DumpCodeParams) -> Self {
        Self {
            inputs: p.inputs,
            compiler: p.compiler,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CreateProjectParams {
    pub name: String,
    pub exclude_builds: bool,
    pub output_dir: PathBuf,
    pub color: ColorChoice,
}

impl CreateProjectParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            name: m.get_one::<String>("name").cloned().unwrap_or_default(),
            exclude_builds: m.get_flag("exclude_builds"),
            output_dir: parse_output_dir(m),
            color: parse_color(m),
        }
    }
}

impl From<CreateProjectParams> for CreateProjectArgs {
    fn from(p: CreateProjectParams) -> Self {
        Self {
            name: p.name,
            exclude_builds: p.exclude_builds,
            output_dir: p.output_dir,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_inputs(m: &ArgMatches) -> Vec<PathBuf> {
    m.get_many::<PathBuf>("inputs")
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

fn parse_output_dir(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("output_dir")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."))
}

fn parse_compiler(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("compiler")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_COMPILER))
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
