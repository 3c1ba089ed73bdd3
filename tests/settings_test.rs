//! Tests for loading settings from TOML files.

use number_baseball::Settings;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_full_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("baseball.toml");
    fs::write(
        &path,
        r#"seed = 1234
log_filter = "debug"
log_file = "baseball.log"
allow_reveal = false
"#,
    )
    .expect("Failed to write TOML");

    let settings = Settings::from_file(&path).expect("Load failed");
    assert_eq!(settings.seed(), &Some(1234));
    assert_eq!(settings.log_filter(), "debug");
    assert_eq!(settings.log_file().as_deref(), Some(std::path::Path::new("baseball.log")));
    assert!(!*settings.allow_reveal());
}

#[test]
fn test_load_without_path_gives_defaults() {
    assert_eq!(Settings::load(None).expect("Load failed"), Settings::default());
}

#[test]
fn test_missing_file_is_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = Settings::load(Some(dir.path().join("missing.toml").as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read settings file"));
}

#[test]
fn test_malformed_file_is_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "seed = \"not a number\"").expect("Failed to write TOML");

    let err = Settings::from_file(&path).unwrap_err();
    assert!(err.message.contains("Failed to parse settings"));
}
