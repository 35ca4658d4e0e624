//! Yarn project manifests (`.yarnproject`).
//!
//! A manifest names its sources as glob patterns relative to its own
//! directory, optionally excludes some of them, and may point at a
//! definitions document declaring external functions.

pub mod definitions;

#[cfg(test)]
mod project_tests;

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Error, Result};

pub use definitions::{load_declarations, parse_declarations};

/// File extension that marks an input as a project manifest.
pub const PROJECT_EXTENSION: &str = "yarnproject";

/// Manifest format version written by [`Project::new`].
pub const CURRENT_PROJECT_FILE_VERSION: i32 = 2;

/// Exclusion added by `create-proj --exclude-builds`.
pub const BUILDS_EXCLUDE_PATTERN: &str = "**/builds/*";

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// Whether `path` names a project manifest.
pub fn is_project_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext == PROJECT_EXTENSION)
}

/// A loaded (or freshly created) project manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub project_file_version: i32,
    #[serde(default = "default_source_files")]
    pub source_files: Vec<String>,
    #[serde(default)]
    pub exclude_files: Vec<String>,
    #[serde(default = "default_base_language")]
    pub base_language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definitions: Option<String>,
    /// Keys this tool doesn't interpret, kept so a save round-trips them.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(skip)]
    path: PathBuf,
}

fn default_source_files() -> Vec<String> {
    vec!["**/*.yarn".to_owned()]
}

fn default_base_language() -> String {
    "en".to_owned()
}

impl Project {
    pub fn new(exclude_builds: bool) -> Self {
        let exclude_files = if exclude_builds {
            vec![BUILDS_EXCLUDE_PATTERN.to_owned()]
        } else {
            Vec::new()
        };

        Self {
            project_file_version: CURRENT_PROJECT_FILE_VERSION,
            source_files: default_source_files(),
            exclude_files,
            base_language: default_base_language(),
            definitions: None,
            extra: Map::new(),
            path: PathBuf::new(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let mut project: Self = serde_json::from_str(&text).map_err(|e| Error::Project {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        project.path = path.to_path_buf();
        Ok(project)
    }

    /// Write the manifest to a new file. Never overwrites an existing one.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut file = match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(Error::Usage(format!(
                    "unable to create a new project file as one already exists at \"{}\"",
                    path.display()
                )));
            }
            Err(e) => return Err(Error::io(path, e)),
        };

        let mut text = serde_json::to_string_pretty(self)?;
        text.push('\n');
        file.write_all(text.as_bytes())
            .map_err(|e| Error::io(path, e))
    }

    /// Path the manifest was loaded from (empty for a new project).
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory that relative manifest paths resolve against.
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new(""))
    }

    /// Definitions document path, resolved against the manifest directory.
    pub fn definitions_path(&self) -> Option<PathBuf> {
        self.definitions.as_ref().map(|path| self.dir().join(path))
    }

    /// Expand the source patterns into a sorted, de-duplicated file list.
    pub fn resolve_source_files(&self) -> Result<Vec<PathBuf>> {
        let dir = self.dir();
        let excludes = self
            .exclude_files
            .iter()
            .map(|pattern| {
                Pattern::new(pattern)
                    .map_err(|e| self.invalid(format!("invalid exclude pattern `{pattern}`: {e}")))
            })
            .collect::<Result<Vec<_>>>()?;

        let base = Pattern::escape(&dir.to_string_lossy());
        let mut files = Vec::new();

        for pattern in &self.source_files {
            let full = if base.is_empty() {
                pattern.clone()
            } else {
                format!("{base}/{pattern}")
            };

            let entries = glob::glob_with(&full, MATCH_OPTIONS)
                .map_err(|e| self.invalid(format!("invalid source pattern `{pattern}`: {e}")))?;

            for entry in entries {
                let path = entry.map_err(|e| {
                    let path = e.path().to_path_buf();
                    Error::io(path, e.into_error())
                })?;
                if !path.is_file() {
                    continue;
                }
                let relative = path.strip_prefix(dir).unwrap_or(&path);
                if excludes
                    .iter()
                    .any(|exclude| exclude.matches_path_with(relative, MATCH_OPTIONS))
                {
                    continue;
                }
                files.push(path);
            }
        }

        files.sort();
        files.dedup();
        Ok(files)
    }

    fn invalid(&self, message: String) -> Error {
        Error::Project {
            path: self.path.clone(),
            message,
        }
    }
}
