use std::fs;
use tempfile::TempDir;

use vitrine::config::{Config, ConfigError};

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write config");
    path
}

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("nope.toml");
    let config = Config::load_from(&path).expect("load");
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn empty_file_yields_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_config(&dir, "");
    let config = Config::load_from(&path).expect("load");
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn tick_rate_is_read_from_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_config(&dir, "[ui]\ntick_rate_ms = 100\n");
    let config = Config::load_from(&path).expect("load");
    assert_eq!(config.ui.tick_rate_ms, 100);
}

#[test]
fn zero_tick_rate_fails_validation() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_config(&dir, "[ui]\ntick_rate_ms = 0\n");
    let err = Config::load_from(&path).expect_err("should fail validation");
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_config(&dir, "[ui\ntick_rate_ms = ");
    let err = Config::load_from(&path).expect_err("should fail parsing");
    assert!(matches!(err, ConfigError::ParseError { .. }));
}
