//! Tests for settings file loading.

use std::io::Write;
use std::path::PathBuf;
use tictac::Settings;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "log_file = \"/tmp/other.log\"\nshow_hints = false").expect("write");

    let settings = Settings::load(Some(file.path())).expect("valid settings");
    assert_eq!(settings.log_file(), &PathBuf::from("/tmp/other.log"));
    assert!(!*settings.show_hints());
    assert!(*settings.mouse());
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = Settings::load(Some(&dir.path().join("missing.toml"))).unwrap_err();
    assert!(err.message.contains("Failed to read settings file"));
}

#[test]
fn test_unknown_value_type_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "mouse = 3").expect("write");
    assert!(Settings::load(Some(file.path())).is_err());
}
