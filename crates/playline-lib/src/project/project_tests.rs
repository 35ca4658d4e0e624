use std::fs;
use std::path::{Path, PathBuf};

use super::*;

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "title: Start\n---\n===\n").unwrap();
}

#[test]
fn recognizes_manifest_by_suffix() {
    assert!(is_project_file(Path::new("game/Game.yarnproject")));
    assert!(!is_project_file(Path::new("Game.yarn")));
    assert!(!is_project_file(Path::new("yarnproject")));
}

#[test]
fn new_project_defaults() {
    let project = Project::new(false);
    assert_eq!(project.project_file_version, CURRENT_PROJECT_FILE_VERSION);
    assert_eq!(project.source_files, vec!["**/*.yarn".to_owned()]);
    assert!(project.exclude_files.is_empty());
    assert_eq!(project.base_language, "en");

    let excluding = Project::new(true);
    assert_eq!(excluding.exclude_files, vec![BUILDS_EXCLUDE_PATTERN.to_owned()]);
}

#[test]
fn save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Game.yarnproject");

    Project::new(true).save(&path).unwrap();
    let loaded = Project::load(&path).unwrap();

    assert_eq!(loaded.path(), path.as_path());
    assert_eq!(loaded.exclude_files, vec!["**/builds/*".to_owned()]);
    assert_eq!(loaded.project_file_version, 2);
}

#[test]
fn save_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Game.yarnproject");
    fs::write(&path, "{}").unwrap();

    let err = Project::new(false).save(&path).unwrap_err();
    assert!(matches!(err, crate::Error::Usage(_)));
    assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
}

#[test]
fn unknown_keys_survive_a_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Game.yarnproject");
    fs::write(
        &path,
        r#"{"projectFileVersion": 2, "localisation": {"en": {}}, "compilerOptions": {}}"#,
    )
    .unwrap();

    let project = Project::load(&path).unwrap();
    assert!(project.extra.contains_key("localisation"));

    let copy = dir.path().join("Copy.yarnproject");
    project.save(&copy).unwrap();
    let text = fs::read_to_string(&copy).unwrap();
    assert!(text.contains("\"localisation\""));
    assert!(text.contains("\"compilerOptions\""));
}

#[test]
fn malformed_manifest_is_a_project_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Game.yarnproject");
    fs::write(&path, r#"{"sourceFiles": []}"#).unwrap();

    let err = Project::load(&path).unwrap_err();
    assert!(matches!(err, crate::Error::Project { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn resolves_sources_relative_to_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    touch(&root.join("b.yarn"));
    touch(&root.join("chapters/a.yarn"));
    touch(&root.join("builds/old.yarn"));
    touch(&root.join("notes.txt"));

    let path = root.join("Game.yarnproject");
    Project::new(true).save(&path).unwrap();
    let project = Project::load(&path).unwrap();

    let files = project.resolve_source_files().unwrap();
    assert_eq!(
        files,
        vec![root.join("b.yarn"), root.join("chapters/a.yarn")]
    );
}

#[test]
fn overlapping_patterns_are_deduplicated() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    touch(&root.join("a.yarn"));

    let path = root.join("Game.yarnproject");
    fs::write(
        &path,
        r#"{"projectFileVersion": 2, "sourceFiles": ["*.yarn", "**/*.yarn", "a.yarn"]}"#,
    )
    .unwrap();

    let files = Project::load(&path).unwrap().resolve_source_files().unwrap();
    assert_eq!(files, vec![root.join("a.yarn")]);
}

#[test]
fn definitions_resolve_against_manifest_dir() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Game.yarnproject");
    fs::write(
        &path,
        r#"{"projectFileVersion": 2, "definitions": "defs/functions.ysls.json"}"#,
    )
    .unwrap();

    let project = Project::load(&path).unwrap();
    assert_eq!(
        project.definitions_path(),
        Some(dir.path().join("defs/functions.ysls.json"))
    );
    assert_eq!(Project::new(false).definitions_path(), None::<PathBuf>);
}
