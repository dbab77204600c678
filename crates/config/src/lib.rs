//! Typed key/value configuration files for typedenv.
//!
//! This crate loads `KEY=VALUE` and `KEY=TYPE=VALUE` files into a [`Config`]
//! attribute store, coercing each value by its type tag and mirroring every
//! loaded entry into an environment table.

pub mod constants;
mod loader;
mod store;
pub mod types;

pub use loader::{
    CoerceError, CoercionPolicy, ConfigError, ConfigLoader, EnvironmentWriter, MemoryEnvironment,
    ParsedLine, ProcessEnvironment, coerce, parse_line,
};
pub use store::Config;
pub use types::{ConfigValue, TypeTag, UnknownTypeTag};
