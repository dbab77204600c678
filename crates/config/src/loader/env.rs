//! Environment mirror for loaded configuration.
//!
//! Responsibilities:
//! - Define the `EnvironmentWriter` collaborator the loader mirrors values into.
//! - Provide a process-environment writer and an in-memory recorder.
//!
//! Does NOT handle:
//! - Deciding what text a value mirrors as (see `ConfigValue`'s `Display`).
//! - Override warnings; mirror writes overwrite silently.
//!
//! Invariants:
//! - `ProcessEnvironment` never panics on keys or values the OS rejects; it
//!   skips them with a warning.

use std::collections::BTreeMap;

/// Receives one `KEY` -> text write per successfully loaded entry.
pub trait EnvironmentWriter {
    fn set_var(&mut self, key: &str, value: &str);
}

/// Writes into the environment of the current process.
///
/// The process environment is global and unsynchronized: loads that use this
/// writer from several threads at once must be serialized by the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl EnvironmentWriter for ProcessEnvironment {
    fn set_var(&mut self, key: &str, value: &str) {
        if key.is_empty() || key.contains(['=', '\0']) || value.contains('\0') {
            tracing::warn!(
                key = %key.escape_debug(),
                "Skipping environment mirror for a key or value the OS cannot store"
            );
            return;
        }
        // SAFETY: no other thread reads or writes the environment during a
        // load; see the type-level docs.
        unsafe {
            std::env::set_var(key, value);
        }
    }
}

/// Records mirror writes in memory instead of touching the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryEnvironment {
    vars: BTreeMap<String, String>,
}

impl MemoryEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl EnvironmentWriter for MemoryEnvironment {
    fn set_var(&mut self, key: &str, value: &str) {
        self.vars.insert(key.to_string(), value.to_string());
    }
}
