//! Value model for loaded configuration.
//!
//! Responsibilities:
//! - Define `ConfigValue`, the coerced form of every stored entry.
//! - Define `TypeTag`, the coercion rule declared on a line.
//!
//! Does NOT handle:
//! - Line parsing or coercion (see `loader` module).
//! - Key storage (see `store` module).

mod tag;
mod value;

pub use tag::{TypeTag, UnknownTypeTag};
pub use value::ConfigValue;
