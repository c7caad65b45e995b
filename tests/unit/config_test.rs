//! Tests for configuration management

use plib::adapters::json::JsonStyle;
use plib::config::{OutputConfig, PlibConfig};
use plib::paths;
use serial_test::serial;

use crate::common::TestConfig;

// =============================================================================
// LOADING TESTS
// =============================================================================

#[test]
fn test_load_from_file() {
    let config = TestConfig::with_content("[output]\nstyle = \"compact\"\nprecision = 4\n");

    let loaded = PlibConfig::load_from(&config.path()).unwrap();
    assert_eq!(loaded.output.style, JsonStyle::Compact);
    assert_eq!(loaded.output.precision, Some(4));
}

#[test]
fn test_empty_file_is_default() {
    let config = TestConfig::with_content("");
    let loaded = PlibConfig::load_from(&config.path()).unwrap();
    assert_eq!(loaded, PlibConfig::default());
}

#[test]
fn test_unknown_style_rejected() {
    let config = TestConfig::with_content("[output]\nstyle = \"yaml\"\n");
    let err = PlibConfig::load_from(&config.path()).unwrap_err();
    assert!(err.to_string().contains("invalid config"));
}

#[test]
fn test_explicit_missing_file_is_error() {
    let config = TestConfig::new();
    assert!(PlibConfig::load(Some(config.path().as_path())).is_err());
}

#[test]
#[serial]
fn test_env_missing_file_is_default() {
    let config = TestConfig::new();
    // SAFETY: serialized with every other test touching PLIB_CONFIG
    unsafe { std::env::set_var(paths::CONFIG_ENV, config.path()) };

    let loaded = PlibConfig::load(None).unwrap();

    unsafe { std::env::remove_var(paths::CONFIG_ENV) };
    assert_eq!(loaded, PlibConfig::default());
}

#[test]
#[serial]
fn test_env_overrides_global() {
    let config = TestConfig::with_content("[output]\nstyle = \"pretty\"\n");
    // SAFETY: serialized with every other test touching PLIB_CONFIG
    unsafe { std::env::set_var(paths::CONFIG_ENV, config.path()) };

    let resolved = paths::resolve_config(None);
    let loaded = PlibConfig::load(None).unwrap();

    unsafe { std::env::remove_var(paths::CONFIG_ENV) };
    assert_eq!(resolved, config.path());
    assert_eq!(loaded.output.style, JsonStyle::Pretty);
}

// =============================================================================
// SAVING TESTS
// =============================================================================

#[test]
fn test_save_and_reload() {
    let config = TestConfig::new();
    let path = config.dir().join("nested").join("config.toml");

    let original = PlibConfig {
        output: OutputConfig {
            style: JsonStyle::Pretty,
            precision: Some(2),
        },
    };
    original.save_to(&path).unwrap();

    let reloaded = PlibConfig::load_from(&path).unwrap();
    assert_eq!(reloaded, original);
}

#[test]
fn test_save_omits_unset_precision() {
    let config = TestConfig::new();
    PlibConfig::default().save_to(&config.path()).unwrap();

    let content = std::fs::read_to_string(config.path()).unwrap();
    assert!(content.contains("style = \"spaced\""));
    assert!(!content.contains("precision"));
}
