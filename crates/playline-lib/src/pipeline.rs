//! One compile run, from inputs to emitted output.
//!
//! Stages are separate types so an output can only be requested after the
//! compiler has run:
//!
//! - [`Pipeline`]: job built, compiler not yet called
//! - [`Compiled`]: compiler result in hand, diagnostics available
//!
//! [`Compiled::emit_module`] and [`Compiled::write_report`] refuse to run
//! when the result carries any error diagnostic.

use std::io::Write;
use std::path::PathBuf;

use playline_core::{CompilationJob, CompilationResult, Diagnostic};

use crate::compiler::Compiler;
use crate::emit::{self, ModuleArtifact, ModuleOptions};
use crate::job::{DEFAULT_LANGUAGE_VERSION, build_job};
use crate::{Error, Result};

/// A compilation job ready to be handed to a compiler.
#[derive(Debug, Clone)]
pub struct Pipeline {
    inputs: Vec<PathBuf>,
    job: CompilationJob,
}

impl Pipeline {
    /// Build the job for `inputs` (loose `.yarn` files or one manifest).
    pub fn from_inputs(inputs: &[PathBuf]) -> Result<Self> {
        let job = build_job(inputs, DEFAULT_LANGUAGE_VERSION)?;
        Ok(Self::new(inputs, job))
    }

    pub fn new(inputs: &[PathBuf], job: CompilationJob) -> Self {
        Self {
            inputs: inputs.to_vec(),
            job,
        }
    }

    pub fn inputs(&self) -> &[PathBuf] {
        &self.inputs
    }

    pub fn job(&self) -> &CompilationJob {
        &self.job
    }

    pub fn compile(self, compiler: &impl Compiler) -> Result<Compiled> {
        let result = compiler.compile(&self.job)?;
        Ok(Compiled {
            inputs: self.inputs,
            result,
        })
    }
}

/// The outcome of a compiler run.
#[derive(Debug, Clone)]
pub struct Compiled {
    inputs: Vec<PathBuf>,
    result: CompilationResult,
}

impl Compiled {
    /// Every diagnostic the compiler produced, errors included.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.result.diagnostics
    }

    pub fn result(&self) -> &CompilationResult {
        &self.result
    }

    pub fn inputs(&self) -> &[PathBuf] {
        &self.inputs
    }

    /// No error diagnostics; warnings and infos don't count.
    pub fn is_valid(&self) -> bool {
        !self.result.has_errors()
    }

    pub fn emit_module(&self, options: &ModuleOptions) -> Result<ModuleArtifact> {
        self.check()?;
        emit::emit_module(&self.inputs, &self.result, options)
    }

    pub fn write_report(&self, out: impl Write) -> Result<()> {
        self.check()?;
        emit::write_report(&self.result, out)
    }

    fn check(&self) -> Result<()> {
        match self.result.error_count() {
            0 => Ok(()),
            errors => Err(Error::Rejected { errors }),
        }
    }
}
