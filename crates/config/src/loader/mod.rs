//! Configuration loader for typed key/value files.
//!
//! Responsibilities:
//! - Parse `KEY=VALUE` and `KEY=TYPE=VALUE` lines with `#` comments.
//! - Coerce each value by its type tag (STR, INT, BOOL, ARR, JSON).
//! - Populate a fresh `Config` and mirror every entry into an environment table.
//!
//! Does NOT handle:
//! - Lookup and override semantics of the loaded values (see `store.rs`).
//! - Installing a tracing subscriber; diagnostics go to the current dispatcher.
//!
//! Invariants / Assumptions:
//! - Keys are upper-cased during loading.
//! - Malformed lines and unknown type tags always abort the load.
//! - Values that fail coercion abort only under `CoercionPolicy::Strict`.

mod builder;
mod coerce;
mod env;
mod error;
mod line;

#[cfg(test)]
mod tests;

pub use builder::{CoercionPolicy, ConfigLoader};
pub use coerce::{CoerceError, coerce};
pub use env::{EnvironmentWriter, MemoryEnvironment, ProcessEnvironment};
pub use error::ConfigError;
pub use line::{ParsedLine, parse_line};
