//! Coerced configuration values.
//!
//! Responsibilities:
//! - Represent the result of coercing a raw text value by its type tag.
//! - Provide the text form written into the environment mirror.
//! - Offer typed accessors and ergonomic conversions for programmatic sets.
//!
//! Does NOT handle:
//! - Parsing raw text into values (see `loader/coerce.rs`).
//! - Storage or key bookkeeping (see `store.rs`).
//!
//! Invariants:
//! - `Null` renders as the empty string, so a mirrored null reloads as null.
//! - `Json` renders as compact JSON text, which parses back to the same value.

use std::fmt;

use serde::Serialize;

/// A typed value held by a [`Config`](crate::Config).
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// Absence of a value. Produced by an empty raw value of any type.
    #[default]
    Null,
    /// Signed integer from an `INT` entry.
    Int(i64),
    /// Boolean from a `BOOL` entry.
    Bool(bool),
    /// Structured data from an `ARR` or `JSON` entry.
    Json(serde_json::Value),
    /// Raw text from a `STR` entry (or an entry with no type tag).
    Str(String),
}

impl ConfigValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the structured value as a sequence, if it is a JSON array.
    pub fn as_array(&self) -> Option<&Vec<serde_json::Value>> {
        self.as_json().and_then(serde_json::Value::as_array)
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Int(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Json(v) => write!(f, "{v}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<serde_json::Value> for ConfigValue {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}

impl<T: Into<ConfigValue>> From<Option<T>> for ConfigValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
