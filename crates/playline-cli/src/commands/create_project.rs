use std::path::{Path, PathBuf};

use playline_core::Colors;
use playline_lib::Project;
use playline_lib::project::{PROJECT_EXTENSION, is_project_file};

use crate::log;

pub struct CreateProjectArgs {
    pub name: String,
    pub exclude_builds: bool,
    pub output_dir: PathBuf,
    pub color: bool,
}

pub fn run(args: CreateProjectArgs) {
    let colors = Colors::new(args.color);
    match create_project(&args.name, args.exclude_builds, &args.output_dir) {
        Ok(path) => log::info(
            colors,
            format!("new project file created at {}", path.display()),
        ),
        Err(e) => log::fatal(colors, &e),
    }
}

/// Path of the manifest for project `name` inside `dir`.
pub fn project_path(name: &str, dir: &Path) -> PathBuf {
    let file = Path::new(name);
    if is_project_file(file) {
        dir.join(file)
    } else {
        dir.join(format!("{name}.{PROJECT_EXTENSION}"))
    }
}

/// Write a default manifest; never replaces an existing file.
pub fn create_project(
    name: &str,
    exclude_builds: bool,
    dir: &Path,
) -> playline_lib::Result<PathBuf> {
    let path = project_path(name, dir);
    Project::new(exclude_builds).save(&path)?;
    Ok(path)
}
