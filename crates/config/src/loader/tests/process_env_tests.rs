//! Process environment tests for the configuration loader.
//!
//! Responsibilities:
//! - Test `Config::from_file` and `ConfigLoader::load_file`, which mirror
//!   into the real process environment.
//!
//! Invariants:
//! - Every test holds `env_lock()`, runs `#[serial]`, and restores the
//!   variables it touches via `temp_env`.

use serial_test::serial;
use std::fs;
use tempfile::TempDir;

use super::env_lock;
use crate::loader::ConfigLoader;
use crate::store::Config;
use crate::types::ConfigValue;

const KEYS: [&str; 4] = [
    "_TYPEDENV_TEST_PORT",
    "_TYPEDENV_TEST_FLAG",
    "_TYPEDENV_TEST_EMPTY",
    "_TYPEDENV_TEST_BAD",
];

fn unset_all() -> [(&'static str, Option<&'static str>); 4] {
    KEYS.map(|k| (k, None))
}

#[test]
#[serial]
fn test_from_file_mirrors_into_process_environment() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.env");
    fs::write(
        &path,
        "_typedenv_test_port=INT=9000\n_TYPEDENV_TEST_FLAG=BOOL=TRUE\n_TYPEDENV_TEST_EMPTY=\n",
    )
    .unwrap();

    temp_env::with_vars(unset_all(), || {
        let config = Config::from_file(&path).unwrap();

        assert_eq!(config.get("_TYPEDENV_TEST_PORT"), &ConfigValue::Int(9000));
        assert_eq!(
            std::env::var("_TYPEDENV_TEST_PORT").as_deref(),
            Ok("9000")
        );
        assert_eq!(
            std::env::var("_TYPEDENV_TEST_FLAG").as_deref(),
            Ok("true")
        );
        assert_eq!(std::env::var("_TYPEDENV_TEST_EMPTY").as_deref(), Ok(""));
    });
}

#[test]
#[serial]
fn test_mirror_overwrites_existing_variable() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.env");
    fs::write(&path, "_TYPEDENV_TEST_PORT=INT=1234\n").unwrap();

    temp_env::with_vars([("_TYPEDENV_TEST_PORT", Some("preexisting"))], || {
        ConfigLoader::new().load_file(&path).unwrap();
        assert_eq!(std::env::var("_TYPEDENV_TEST_PORT").as_deref(), Ok("1234"));
    });
}

#[test]
#[serial]
fn test_skipped_value_is_not_mirrored() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.env");
    fs::write(&path, "_TYPEDENV_TEST_BAD=INT=notanumber\n").unwrap();

    temp_env::with_vars(unset_all(), || {
        let config = Config::from_file(&path).unwrap();
        assert!(!config.contains_key("_TYPEDENV_TEST_BAD"));
        assert!(std::env::var("_TYPEDENV_TEST_BAD").is_err());
    });
}

#[test]
#[serial]
fn test_failed_load_leaves_process_environment_untouched() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.env");
    fs::write(&path, "_TYPEDENV_TEST_PORT=INT=1\nBROKEN LINE\n").unwrap();

    temp_env::with_vars(unset_all(), || {
        let err = Config::from_file(&path).unwrap_err();
        assert_eq!(err.line(), Some(2));
        assert!(std::env::var("_TYPEDENV_TEST_PORT").is_err());
    });
}

#[test]
#[serial]
fn test_empty_key_is_stored_but_not_mirrored() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.env");
    fs::write(&path, "=orphan\n_TYPEDENV_TEST_PORT=INT=7\n").unwrap();

    temp_env::with_vars(unset_all(), || {
        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.get(""), &ConfigValue::from("orphan"));
        assert_eq!(std::env::var("_TYPEDENV_TEST_PORT").as_deref(), Ok("7"));
    });
}
