//! Playline: turns compiled Yarn dialogue into loadable Lua modules.
//!
//! The pipeline has four stages:
//! - `job` - assemble a [`CompilationJob`] from source files or a project manifest
//! - `compiler` - hand the job to an external compiler
//! - `lines` - project the compiler's string table into runtime line records
//! - `emit` - write a JSON report to a stream, or a `.yarnc.lua` module to disk
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//!
//! use playline_lib::compiler::ExternalCompiler;
//! use playline_lib::emit::ModuleOptions;
//! use playline_lib::Pipeline;
//!
//! let inputs = vec![PathBuf::from("Intro.yarn")];
//! let compiled = Pipeline::from_inputs(&inputs)?.compile(&ExternalCompiler::new("ysc-json"))?;
//! for diagnostic in compiled.diagnostics() {
//!     eprintln!("{diagnostic}");
//! }
//! let artifact = compiled.emit_module(&ModuleOptions::new("build"))?;
//! eprintln!("wrote {}", artifact.program_path.display());
//! # Ok::<(), playline_lib::Error>(())
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::path::PathBuf;

pub mod compiler;
pub mod diagnostics;
pub mod dump;
pub mod emit;
pub mod job;
pub mod lines;
pub mod pipeline;
pub mod project;

#[cfg(test)]
mod compiler_tests;
#[cfg(test)]
mod pipeline_tests;
#[cfg(test)]
pub mod test_utils;

pub use diagnostics::DiagnosticsPrinter;
pub use pipeline::{Compiled, Pipeline};
pub use playline_core::{CompilationJob, CompilationResult, Diagnostic, Severity};
pub use project::Project;

/// Errors that stop a run before or instead of emitting output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed invocation (e.g. several manifests, existing project file).
    #[error("{0}")]
    Usage(String),

    /// A definitions document declares a type that doesn't exist.
    #[error(transparent)]
    UnknownType(#[from] playline_core::UnknownType),

    /// A definitions document is unreadable or structurally wrong.
    #[error("invalid definitions file '{}': {message}", path.display())]
    Definitions { path: PathBuf, message: String },

    /// A project manifest is unreadable or structurally wrong.
    #[error("invalid project file '{}': {message}", path.display())]
    Project { path: PathBuf, message: String },

    #[error("failed to access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The compiler process failed without producing a result.
    #[error("compiler exited with {status}: {stderr}")]
    Compiler { status: String, stderr: String },

    /// Output was refused because the compiler reported errors.
    #[error("not compiling files because {errors} error(s) were encountered")]
    Rejected { errors: usize },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit status for this error.
    ///
    /// Usage and configuration problems exit with 2; everything else with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_)
            | Self::UnknownType(_)
            | Self::Definitions { .. }
            | Self::Project { .. } => 2,
            _ => 1,
        }
    }
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;
