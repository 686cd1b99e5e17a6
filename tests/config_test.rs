//! Integration tests for Settings loading from explicit config files.
//!
//! The global config location is passed explicitly, so a developer's own
//! arbor.toml does not leak in. Overrides from ARBOR_* environment variables
//! are covered in config_env_test.rs, a separate test binary.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use arbor::application::ApplicationError;
use arbor::config::{Settings, SinkKind};

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("arbor.toml");
    fs::write(&path, content).expect("write config");
    path
}

#[test]
fn given_no_config_file_when_loading_then_uses_defaults() {
    let settings = Settings::load_from(None, None).expect("load defaults");
    assert_eq!(settings.labels.len(), 3);
}

#[test]
fn given_global_and_explicit_files_when_loading_then_explicit_wins() {
    let global_dir = TempDir::new().unwrap();
    let global = write_config(&global_dir, "labels = [\"global\"]\nsink = \"log\"\n");
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, "labels = [\"local\"]\n");

    let settings =
        Settings::load_from(Some(global.as_path()), Some(path.as_path())).expect("load settings");

    assert_eq!(settings.labels, ["local"]);
    assert_eq!(settings.sink, SinkKind::Log, "global layer survives where unset");
}

#[test]
fn given_absent_global_file_when_loading_then_skipped() {
    let temp = TempDir::new().unwrap();
    let absent = temp.path().join("arbor.toml");

    let settings = Settings::load_from(Some(absent.as_path()), None).expect("load settings");

    assert_eq!(settings, Settings::default());
}

#[test]
fn given_config_file_when_loading_then_overrides_specified_fields() {
    let temp = TempDir::new().unwrap();
    let path = write_config(
        &temp,
        r#"
labels = ["north", "south"]
sink = "log"
"#,
    );

    let settings = Settings::load_from(None, Some(path.as_path())).expect("load settings");

    assert_eq!(settings.labels, ["north", "south"]);
    assert_eq!(settings.sink, SinkKind::Log);
    assert!(settings.pause, "unspecified pause keeps default");
}

#[test]
fn given_relative_tree_file_when_loading_then_resolves_next_to_config() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, "tree_file = \"trees/main.toml\"\npause = false\n");

    let settings = Settings::load_from(None, Some(path.as_path())).expect("load settings");

    assert_eq!(
        settings.tree_file,
        Some(temp.path().join("trees/main.toml"))
    );
    assert!(!settings.pause);
}

#[test]
fn given_missing_config_file_when_loading_then_config_error() {
    let temp = TempDir::new().unwrap();
    let result = Settings::load_from(None, Some(temp.path().join("absent.toml").as_path()));
    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_invalid_sink_in_config_when_loading_then_config_error() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, "sink = \"printer\"\n");

    let result = Settings::load_from(None, Some(path.as_path()));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_loaded_settings_when_shown_then_round_trips_through_file() {
    let temp = TempDir::new().unwrap();
    let original = Settings {
        labels: vec!["x".into()],
        sink: SinkKind::Log,
        pause: false,
        tree_file: None,
    };
    let path = write_config(&temp, &original.to_toml().unwrap());

    let loaded = Settings::load_from(None, Some(path.as_path())).unwrap();

    assert_eq!(loaded, original);
}
