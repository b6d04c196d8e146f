//! Tests for `.env` file loading and precedence.

use kiln_config::{resolve, BuildMode, ConfigError, EnvLoader, ProjectLayout};
use std::fs;
use tempfile::TempDir;

fn no_process() -> Vec<(String, String)> {
    Vec::new()
}

#[test]
fn mode_file_overrides_base_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".env"), "VITE_PROJECT_ID=base\nVITE_A=1\n").unwrap();
    fs::write(dir.path().join(".env.production"), "VITE_PROJECT_ID=prod\n").unwrap();

    let env = EnvLoader::new(dir.path())
        .load_from(&BuildMode::Production, no_process())
        .unwrap();
    assert_eq!(env.get("VITE_PROJECT_ID"), Some("prod"));
    assert_eq!(env.get("VITE_A"), Some("1"));

    let env = EnvLoader::new(dir.path())
        .load_from(&BuildMode::Development, no_process())
        .unwrap();
    assert_eq!(env.get("VITE_PROJECT_ID"), Some("base"));
}

#[test]
fn local_files_take_precedence() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".env"), "VITE_X=env\n").unwrap();
    fs::write(dir.path().join(".env.local"), "VITE_X=local\nVITE_Y=local\n").unwrap();
    fs::write(dir.path().join(".env.development"), "VITE_Y=mode\n").unwrap();
    fs::write(dir.path().join(".env.development.local"), "VITE_Z=mode-local\n").unwrap();

    let env = EnvLoader::new(dir.path())
        .load_from(&BuildMode::Development, no_process())
        .unwrap();
    assert_eq!(env.get("VITE_X"), Some("local"));
    assert_eq!(env.get("VITE_Y"), Some("mode"));
    assert_eq!(env.get("VITE_Z"), Some("mode-local"));
}

#[test]
fn process_environment_wins_over_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".env"), "VITE_PROJECT_ID=file\n").unwrap();

    let env = EnvLoader::new(dir.path())
        .load_from(
            &BuildMode::Development,
            vec![("VITE_PROJECT_ID".to_string(), "shell".to_string())],
        )
        .unwrap();
    assert_eq!(env.get("VITE_PROJECT_ID"), Some("shell"));
}

#[test]
fn files_only_ignores_process_environment() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".env"), "VITE_PROJECT_ID=file\n").unwrap();

    let env = EnvLoader::new(dir.path())
        .files_only()
        .load_from(
            &BuildMode::Development,
            vec![("VITE_PROJECT_ID".to_string(), "shell".to_string())],
        )
        .unwrap();
    assert_eq!(env.get("VITE_PROJECT_ID"), Some("file"));
}

#[test]
fn keys_without_prefix_are_hidden() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".env"),
        "DB_PASSWORD=secret\nVITE_PUBLIC=yes\n# comment\n",
    )
    .unwrap();

    let env = EnvLoader::new(dir.path())
        .load_from(&BuildMode::Development, no_process())
        .unwrap();
    assert_eq!(env.len(), 1);
    assert!(!env.contains("DB_PASSWORD"));
}

#[test]
fn project_id_and_public_keys_survive_together() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".env"),
        "VITE_PROJECT_ID=proj-42\nAPP_API=https://x\nVITE_API=https://y\n",
    )
    .unwrap();

    let env = EnvLoader::new(dir.path())
        .load_from(&BuildMode::Development, no_process())
        .unwrap();
    assert_eq!(env.get("VITE_PROJECT_ID"), Some("proj-42"));
    assert_eq!(env.get("VITE_API"), Some("https://y"));
    assert!(!env.contains("APP_API"));

    let config = resolve(&BuildMode::Development, &env, &ProjectLayout::new(dir.path()));
    assert_eq!(config.project_id, "proj-42");
    assert_eq!(config.defines["import.meta.env.VITE_API"], "\"https://y\"");
}

#[test]
fn quoted_values_are_unwrapped() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".env"), "VITE_TITLE=\"Hello World\"\n").unwrap();

    let env = EnvLoader::new(dir.path())
        .load_from(&BuildMode::Development, no_process())
        .unwrap();
    assert_eq!(env.get("VITE_TITLE"), Some("Hello World"));
}

#[test]
fn malformed_file_is_reported() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".env"), "VITE_OK=1\nthis line is not valid\n").unwrap();

    let err = EnvLoader::new(dir.path())
        .load_from(&BuildMode::Development, no_process())
        .unwrap_err();
    match err {
        ConfigError::EnvFile { path, .. } => assert!(path.ends_with(".env")),
        other => panic!("expected EnvFile error, got {other:?}"),
    }
}

#[test]
fn empty_directory_yields_empty_snapshot() {
    let dir = TempDir::new().unwrap();
    let env = EnvLoader::new(dir.path())
        .load_from(&BuildMode::Production, no_process())
        .unwrap();
    assert!(env.is_empty());
}
