//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test the end-to-end line grammar and coercion rules through `ConfigLoader`.
//! - Test lenient versus strict handling of values that fail coercion.
//! - Test file reading, diagnostics, and the process-environment mirror.
//!
//! Does NOT handle:
//! - Single-line parsing details (tested in line.rs).
//! - Per-tag coercion details (tested in coerce.rs).
//!
//! Invariants:
//! - Tests that touch the process environment use `serial_test` and
//!   `global_test_lock()`, and restore variables via `temp_env`.
//! - All other tests mirror into a `MemoryEnvironment`.

use std::sync::Mutex;

use crate::loader::{ConfigError, ConfigLoader, MemoryEnvironment};
use crate::store::Config;

pub mod diagnostics_tests;
pub mod process_env_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Load `contents` with a default loader into a fresh in-memory mirror.
pub fn load(contents: &str) -> Result<(Config, MemoryEnvironment), ConfigError> {
    load_with(&ConfigLoader::new(), contents)
}

pub fn load_with(
    loader: &ConfigLoader,
    contents: &str,
) -> Result<(Config, MemoryEnvironment), ConfigError> {
    let mut env = MemoryEnvironment::new();
    let config = loader.load_str(contents, &mut env)?;
    Ok((config, env))
}
