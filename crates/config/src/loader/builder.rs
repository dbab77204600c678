//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` carrying the store default and
//!   the coercion policy.
//! - Run the line grammar and coercion over a whole file.
//! - Commit parsed entries into a fresh `Config` and the environment mirror.
//!
//! Does NOT handle:
//! - Splitting individual lines (delegated to line.rs).
//! - Converting raw values (delegated to coerce.rs).
//! - Writing to the process environment (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Line numbers are 1-based and count every physical line; `\n`, `\r\n`,
//!   and a lone `\r` all end a line.
//! - Fatal errors are detected before anything is committed, so a failed
//!   load leaves the environment mirror untouched.
//! - Lenient policy skips values that fail coercion; strict policy aborts.

use std::path::Path;

use super::coerce::{CoerceError, coerce};
use super::env::{EnvironmentWriter, ProcessEnvironment};
use super::error::ConfigError;
use super::line::{parse_line, physical_lines};
use crate::store::Config;
use crate::types::ConfigValue;

/// What to do with a value that does not convert to its declared type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CoercionPolicy {
    /// Log the failure, skip the line, and keep loading.
    #[default]
    Lenient,
    /// Abort the load with [`ConfigError::InvalidEnvironmentFormat`].
    Strict,
}

/// Loader that builds a [`Config`] from a typed key/value file.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    default: ConfigValue,
    policy: CoercionPolicy,
}

/// A coerced line waiting to be committed.
struct Entry {
    key: String,
    type_tag: String,
    value: ConfigValue,
}

impl ConfigLoader {
    /// Create a lenient loader whose stores default to [`ConfigValue::Null`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value returned by the loaded store for unknown keys.
    pub fn with_default(mut self, default: impl Into<ConfigValue>) -> Self {
        self.default = default.into();
        self
    }

    pub fn with_policy(mut self, policy: CoercionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Shorthand for `with_policy(CoercionPolicy::Strict)`.
    pub fn strict(self) -> Self {
        self.with_policy(CoercionPolicy::Strict)
    }

    pub fn policy(&self) -> CoercionPolicy {
        self.policy
    }

    /// Load `path`, mirroring entries into the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::InvalidEnvironmentFormat`] if its content is invalid.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        self.load_file_into(path, &mut ProcessEnvironment)
    }

    /// Load `path`, mirroring entries into `env`.
    pub fn load_file_into(
        &self,
        path: impl AsRef<Path>,
        env: &mut dyn EnvironmentWriter,
    ) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "Loading configuration file");
        self.load_str(&contents, env)
    }

    /// Load configuration text, mirroring entries into `env`.
    pub fn load_str(
        &self,
        contents: &str,
        env: &mut dyn EnvironmentWriter,
    ) -> Result<Config, ConfigError> {
        let entries = self.parse_entries(contents)?;

        let mut config = Config::with_default(self.default.clone());
        for Entry {
            key,
            type_tag,
            value,
        } in entries
        {
            tracing::debug!(
                key = %key,
                type_tag = %type_tag,
                value = %value,
                "Setting environment variable"
            );
            let text = value.to_string();
            env.set_var(&key, &text);
            config.set(key, value);
        }
        Ok(config)
    }

    fn parse_entries(&self, contents: &str) -> Result<Vec<Entry>, ConfigError> {
        let mut entries = Vec::new();

        for (index, raw) in physical_lines(contents).enumerate() {
            let line_number = index + 1;
            let Some(line) = parse_line(line_number, raw)? else {
                continue;
            };

            match coerce(&line.type_tag, line.raw_value) {
                Ok(value) => entries.push(Entry {
                    key: line.key,
                    type_tag: line.type_tag,
                    value,
                }),
                Err(CoerceError::UnknownType(_)) => {
                    return Err(ConfigError::invalid_type(
                        line_number,
                        &line.key,
                        &line.type_tag,
                    ));
                }
                Err(e) => {
                    let error =
                        ConfigError::invalid_value(line_number, &line.key, line.raw_value, &e);
                    match self.policy {
                        CoercionPolicy::Strict => return Err(error),
                        CoercionPolicy::Lenient => {
                            tracing::warn!(
                                line = line_number,
                                key = %line.key,
                                error = %error,
                                "Skipping entry whose value could not be coerced"
                            );
                        }
                    }
                }
            }
        }

        Ok(entries)
    }
}
