//! Compilation job construction.
//!
//! A job comes from exactly one of two places: a list of loose source
//! files, or a single project manifest. The two paths never mix.

use std::path::{Path, PathBuf};

use playline_core::CompilationJob;

use crate::project::{self, CURRENT_PROJECT_FILE_VERSION, Project};
use crate::{Error, Result};

/// Language version used for loose source files.
pub const DEFAULT_LANGUAGE_VERSION: i32 = CURRENT_PROJECT_FILE_VERSION;

/// Build a job from command-line inputs.
///
/// If any input is a manifest it must be the only input.
pub fn build_job(inputs: &[PathBuf], default_language_version: i32) -> Result<CompilationJob> {
    if !inputs.iter().any(|input| project::is_project_file(input)) {
        return Ok(job_from_files(inputs, default_language_version));
    }

    let [manifest] = inputs else {
        return Err(Error::Usage(
            "when compiling a Yarn project file, you must specify only a single file path"
                .to_owned(),
        ));
    };

    job_from_manifest(manifest)
}

/// Every input is a source file.
pub fn job_from_files(inputs: &[PathBuf], language_version: i32) -> CompilationJob {
    CompilationJob::new(inputs.iter().cloned(), language_version)
}

pub fn job_from_manifest(path: &Path) -> Result<CompilationJob> {
    let project = Project::load(path)?;
    job_from_project(&project)
}

/// Sources, version and declarations all come from the manifest.
pub fn job_from_project(project: &Project) -> Result<CompilationJob> {
    let mut job = CompilationJob::new(
        project.resolve_source_files()?,
        project.project_file_version,
    );

    if let Some(path) = project.definitions_path() {
        for declaration in project::load_declarations(&path)? {
            job.declare(declaration);
        }
    }

    Ok(job)
}
