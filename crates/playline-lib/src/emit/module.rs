//! `.yarnc.lua` module emission.
//!
//! The module is a plain Lua chunk that registers one table under
//! `Playline.Compiled`:
//!
//! ```lua
//! Playline = Playline or {}
//! Playline.Compiled = Playline.Compiled or {}
//! Playline.Compiled.Intro = {
//!   Program = { ... },
//!   Lines = { ... }
//! }
//! ```

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use playline_core::{CompilationResult, Program};
use serde::Serialize;

use super::lua::{LuaWriter, is_identifier, write_string};
use crate::lines::{self, ProjectedLine};
use crate::{Error, Result};

/// Name used when nothing better can be derived from the inputs.
pub const DEFAULT_OUTPUT_NAME: &str = "Output";

const PROGRAM_EXTENSION: &str = "yarnc.lua";

/// Where and under which names a module is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleOptions {
    pub output_dir: PathBuf,
    pub output_name: Option<String>,
    pub string_table_name: Option<String>,
}

impl ModuleOptions {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            output_name: None,
            string_table_name: None,
        }
    }

    pub fn with_output_name(mut self, name: impl Into<String>) -> Self {
        self.output_name = Some(name.into());
        self
    }

    pub fn with_string_table_name(mut self, name: impl Into<String>) -> Self {
        self.string_table_name = Some(name.into());
        self
    }
}

/// Paths a module emission resolved to.
///
/// Only `program_path` is written; `string_table_path` names the CSV
/// sidecar for downstream localization tooling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleArtifact {
    pub name: String,
    pub program_path: PathBuf,
    pub string_table_path: PathBuf,
}

/// Base name for the emitted files.
///
/// An explicit name wins unless it is [`DEFAULT_OUTPUT_NAME`]. Otherwise a
/// single input lends its file stem.
pub fn output_name(inputs: &[PathBuf], explicit: Option<&str>) -> String {
    if let Some(name) = explicit.filter(|name| *name != DEFAULT_OUTPUT_NAME) {
        return name.to_owned();
    }
    match inputs {
        [single] => single
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_OUTPUT_NAME.to_owned()),
        _ => DEFAULT_OUTPUT_NAME.to_owned(),
    }
}

pub fn string_table_name(base: &str, explicit: Option<&str>) -> String {
    match explicit {
        Some(name) if !name.is_empty() => name.to_owned(),
        _ => format!("{base}-Lines.csv"),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct ModuleBody<'a> {
    program: Option<&'a Program>,
    lines: IndexMap<String, ProjectedLine>,
}

/// Full text of the module registering `result` as `name`.
pub fn render_module(name: &str, result: &CompilationResult) -> Result<String> {
    let body = ModuleBody {
        program: result.program.as_ref(),
        lines: lines::project(&result.string_table),
    };
    let table = LuaWriter::new().skip_null_members(true).to_string(&body)?;

    let mut out = String::new();
    out.push_str("Playline = Playline or {}\n");
    out.push_str("Playline.Compiled = Playline.Compiled or {}\n");
    out.push_str("Playline.Compiled");
    if is_identifier(name) {
        out.push('.');
        out.push_str(name);
    } else {
        out.push('[');
        write_string(&mut out, name);
        out.push(']');
    }
    out.push_str(" = ");
    out.push_str(&table);
    out.push('\n');
    Ok(out)
}

/// Render and write the module for `result`.
///
/// The text goes to a temporary file next to the target and is renamed
/// into place once complete, so a failed run never leaves a truncated
/// module behind.
pub fn emit_module(
    inputs: &[PathBuf],
    result: &CompilationResult,
    options: &ModuleOptions,
) -> Result<ModuleArtifact> {
    let name = output_name(inputs, options.output_name.as_deref());
    let dir = options.output_dir.as_path();
    let program_path = dir.join(format!("{name}.{PROGRAM_EXTENSION}"));
    let string_table_path = dir.join(string_table_name(
        &name,
        options.string_table_name.as_deref(),
    ));

    let text = render_module(&name, result)?;
    write_atomically(dir, &program_path, text.as_bytes())?;

    Ok(ModuleArtifact {
        name,
        program_path,
        string_table_path,
    })
}

fn write_atomically(dir: &Path, path: &Path, contents: &[u8]) -> Result<()> {
    if !dir.as_os_str().is_empty() {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    let tmp_dir = if dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        dir
    };

    let mut builder = tempfile::Builder::new();
    let existing = fs::metadata(path).ok().map(|m| m.permissions());
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        // Same mode as a plain `fs::write`, still subject to the umask.
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let mut file = builder
        .tempfile_in(tmp_dir)
        .map_err(|e| Error::io(tmp_dir, e))?;
    file.write_all(contents).map_err(|e| Error::io(file.path(), e))?;
    file.as_file()
        .sync_all()
        .map_err(|e| Error::io(file.path(), e))?;
    // An overwritten module keeps its mode.
    if let Some(permissions) = existing {
        file.as_file()
            .set_permissions(permissions)
            .map_err(|e| Error::io(file.path(), e))?;
    }
    file.persist(path).map_err(|e| Error::io(path, e.error))?;
    Ok(())
}
