//! Value coercion by type tag.
//!
//! Responsibilities:
//! - Convert a raw value into a `ConfigValue` according to its type tag.
//! - Distinguish unknown tags from values that fail conversion.
//!
//! Does NOT handle:
//! - Attaching line numbers or keys to failures (see builder.rs).
//! - Deciding whether a failure aborts the load (see `CoercionPolicy`).
//!
//! Invariants:
//! - An empty raw value is `Null` for every tag, including unknown ones.
//! - `BOOL` never fails: only "TRUE" (any ASCII case) is true.

use std::num::ParseIntError;

use thiserror::Error;

use crate::constants::BOOL_TRUE_LITERAL;
use crate::types::{ConfigValue, TypeTag, UnknownTypeTag};

/// Why a raw value could not be coerced.
#[derive(Error, Debug)]
pub enum CoerceError {
    #[error(transparent)]
    UnknownType(#[from] UnknownTypeTag),

    #[error("not a valid integer: {0}")]
    Int(#[from] ParseIntError),

    #[error("not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoerceError {
    /// True when the tag was valid but the value did not convert.
    pub fn is_value_error(&self) -> bool {
        !matches!(self, Self::UnknownType(_))
    }
}

/// Coerce `raw` according to the (upper-cased) tag text.
pub fn coerce(type_tag: &str, raw: &str) -> Result<ConfigValue, CoerceError> {
    if raw.is_empty() {
        return Ok(ConfigValue::Null);
    }

    let value = match type_tag.parse::<TypeTag>()? {
        TypeTag::Int => ConfigValue::Int(raw.trim().parse()?),
        TypeTag::Bool => ConfigValue::Bool(raw.eq_ignore_ascii_case(BOOL_TRUE_LITERAL)),
        TypeTag::Arr | TypeTag::Json => ConfigValue::Json(serde_json::from_str(raw)?),
        TypeTag::Str => ConfigValue::Str(raw.to_string()),
    };
    Ok(value)
}
