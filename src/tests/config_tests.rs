//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use std::fs;

use tempfile::tempdir;

use crate::config::{ConfigLoader, MakaiConfig, QueryMode, Validate};
use crate::error::config::ConfigError;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = MakaiConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.search.query_mode, QueryMode::All);
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = MakaiConfig::default();

    // Invalid refresh cadence
    config.search.refresh_interval_secs = 0;
    assert!(config.validate().is_err());

    // Fix and test another invalid value
    config.search.refresh_interval_secs = 300;
    config.search.max_token_chars = 0;
    assert!(config.validate().is_err());

    // Fix and test an invalid log level
    config.search.max_token_chars = 512;
    config.log.level = "verbose".to_string();
    assert!(config.validate().is_err());
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config_file_test.toml");

    let config_content = r#"
    [search]
    refresh_interval_secs = 60
    query_mode = "any"
    max_token_chars = 128

    [log]
    level = "debug"
    "#;

    fs::write(&config_path, config_content).unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "MAKAI_TEST_FILE");
    let config = loader.load().unwrap();

    assert_eq!(config.search.refresh_interval_secs, 60);
    assert_eq!(config.search.query_mode, QueryMode::Any);
    assert_eq!(config.search.max_token_chars, 128);
    assert_eq!(config.log.level, "debug");
    // Unspecified values fall back to defaults
    assert!(config.log.source_location);
}

/// Test that a missing configuration file is reported as such.
#[test]
fn test_missing_config_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("does_not_exist.toml");

    let loader = ConfigLoader::new(Some(&config_path), "MAKAI_TEST_MISSING");
    assert!(matches!(
        loader.load(),
        Err(ConfigError::FileNotFound(path)) if path == config_path
    ));
}

/// Test that an invalid file value fails validation at load time.
#[test]
fn test_load_rejects_invalid_values() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("invalid.toml");

    fs::write(
        &config_path,
        r#"
    [search]
    refresh_interval_secs = 0
    "#,
    )
    .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "MAKAI_TEST_INVALID");
    assert!(matches!(
        loader.load(),
        Err(ConfigError::ValidationError(_))
    ));
}

/// Test that unsupported file extensions are rejected.
#[test]
fn test_unsupported_config_extension() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.ini");
    fs::write(&config_path, "refresh_interval_secs = 60").unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "MAKAI_TEST_EXT");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test loading with no file at all: defaults plus environment only.
#[test]
fn test_load_without_file_uses_defaults() {
    let loader = ConfigLoader::new(None::<&str>, "MAKAI_TEST_DEFAULTS");
    let config = loader.load().unwrap();

    assert_eq!(
        config.search.refresh_interval_secs,
        MakaiConfig::default().search.refresh_interval_secs
    );
}
