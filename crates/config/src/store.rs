//! Attribute store for loaded configuration.
//!
//! Responsibilities:
//! - Hold the mapping from key name to coerced value.
//! - Return a configurable default for keys that were never set.
//! - Emit diagnostics for unknown-key access and key overrides.
//!
//! Does NOT handle:
//! - Reading or parsing configuration files (see `loader` module).
//! - Mirroring values into the environment (see `loader/env.rs`).
//!
//! Invariants:
//! - A key is known iff it has been set at least once since construction.
//! - `get` and `set` never fail; misses and overrides are warnings only.
//! - Keys are stored exactly as given. Case normalization is the loader's job.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use crate::loader::{ConfigError, ConfigLoader};
use crate::types::ConfigValue;

/// A bag of typed configuration values with default-on-miss lookups.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Config {
    #[serde(skip)]
    default: ConfigValue,
    values: BTreeMap<String, ConfigValue>,
}

impl Config {
    /// Create an empty store whose default is [`ConfigValue::Null`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that returns `default` for unknown keys.
    pub fn with_default(default: impl Into<ConfigValue>) -> Self {
        Self {
            default: default.into(),
            values: BTreeMap::new(),
        }
    }

    /// Load a configuration file, mirroring every entry into the process
    /// environment.
    ///
    /// Values that fail coercion are skipped; use [`ConfigLoader`] for strict
    /// loading or a different environment mirror.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvironmentFormat`] for a line without a
    /// separator or with an unknown type tag, and [`ConfigError::Io`] if the
    /// file cannot be read.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        ConfigLoader::new().load_file(path)
    }

    /// Look up `key`, falling back to the default when it was never set.
    pub fn get(&self, key: &str) -> &ConfigValue {
        match self.values.get(key) {
            Some(value) => value,
            None => {
                tracing::warn!(key = %key, "Key was accessed but is not set");
                &self.default
            }
        }
    }

    /// Store `value` under `key`.
    ///
    /// Overwriting a known key is allowed but logged as a warning.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        let key = key.into();
        let value = value.into();
        if let Some(previous) = self.values.get(&key) {
            tracing::warn!(
                key = %key,
                value = ?value,
                previous = ?previous,
                "Overriding a key that is already set; is this intentional?"
            );
        }
        self.values.insert(key, value);
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn default_value(&self) -> &ConfigValue {
        &self.default
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Known keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Known entries in key order. Does not log.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}
