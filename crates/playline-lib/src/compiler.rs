//! The seam to the dialogue compiler.
//!
//! The compiler itself lives outside this crate. [`ExternalCompiler`] runs it
//! as a child process speaking JSON: the job goes in on stdin, the
//! [`CompilationResult`] comes back on stdout.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use std::{panic, thread};

use playline_core::{CompilationJob, CompilationResult};

use crate::{Error, Result};

/// Anything that can turn a job into a result.
pub trait Compiler {
    fn compile(&self, job: &CompilationJob) -> Result<CompilationResult>;
}

impl<F> Compiler for F
where
    F: Fn(&CompilationJob) -> CompilationResult,
{
    fn compile(&self, job: &CompilationJob) -> Result<CompilationResult> {
        Ok(self(job))
    }
}

/// Compiler run as a child process.
#[derive(Debug, Clone)]
pub struct ExternalCompiler {
    program: PathBuf,
    args: Vec<OsString>,
}

impl ExternalCompiler {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn program(&self) -> &PathBuf {
        &self.program
    }
}

impl Compiler for ExternalCompiler {
    fn compile(&self, job: &CompilationJob) -> Result<CompilationResult> {
        let request = serde_json::to_vec(job)?;

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Error::io(&self.program, e))?;

        // The job is fed from its own thread while stdout and stderr drain.
        // Dropping stdin once written closes the pipe so the compiler sees EOF.
        let stdin = child.stdin.take();
        let (output, sent) = thread::scope(|s| {
            let writer = stdin.map(|mut stdin| s.spawn(move || stdin.write_all(&request)));
            let output = child.wait_with_output();
            let sent = match writer {
                Some(handle) => handle.join().unwrap_or_else(|e| panic::resume_unwind(e)),
                None => Ok(()),
            };
            (output, sent)
        });
        let output = output.map_err(|e| Error::io(&self.program, e))?;

        match (
            serde_json::from_slice::<CompilationResult>(&output.stdout),
            sent,
        ) {
            (Ok(result), Ok(())) => Ok(result),
            // The compiler may answer without reading the whole job.
            (Ok(result), Err(_)) if output.status.success() => Ok(result),
            (_, Err(e)) => Err(compiler_failure(&output, Some(e))),
            (Err(_), Ok(())) if !output.status.success() => {
                Err(compiler_failure(&output, None))
            }
            (Err(e), Ok(())) => Err(e.into()),
        }
    }
}

fn compiler_failure(output: &Output, send_error: Option<io::Error>) -> Error {
    let mut stderr = String::from_utf8_lossy(&output.stderr).trim().to_owned();
    if let Some(e) = send_error {
        if !stderr.is_empty() {
            stderr.push('\n');
        }
        stderr.push_str(&format!("failed to send the job: {e}"));
    }
    Error::Compiler {
        status: output.status.to_string(),
        stderr,
    }
}
