//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define the single format error raised for malformed lines, unknown type
//!   tags, and (under strict policy) values that fail coercion.
//! - Carry I/O failures from reading the file without rewrapping them.
//!
//! Does NOT handle:
//! - Unknown-key lookups or overrides, which are diagnostics, not errors
//!   (see `store.rs`).
//!
//! Invariants:
//! - Every format error records the 1-based physical line it came from.

use thiserror::Error;

use crate::types::TypeTag;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file content does not follow the `KEY[=TYPE]=VALUE` grammar.
    #[error("{message}")]
    InvalidEnvironmentFormat { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// A line that cannot be split into a key and a value.
    pub fn malformed_line(line: usize, content: &str) -> Self {
        Self::InvalidEnvironmentFormat {
            line,
            message: format!("Invalid format on line {line}: {content}"),
        }
    }

    /// A line whose type tag is not recognized.
    pub fn invalid_type(line: usize, key: &str, tag: &str) -> Self {
        Self::InvalidEnvironmentFormat {
            line,
            message: format!(
                "Environment key \"{key}\" on line {line} has an invalid type \"{tag}\". Type must be one of {}",
                TypeTag::expected_list()
            ),
        }
    }

    /// A value that could not be converted to its declared type.
    pub fn invalid_value(
        line: usize,
        key: &str,
        value: &str,
        reason: impl std::fmt::Display,
    ) -> Self {
        Self::InvalidEnvironmentFormat {
            line,
            message: format!(
                "Environment key \"{key}\" on line {line} has an invalid value \"{value}\": {reason}"
            ),
        }
    }

    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::InvalidEnvironmentFormat { .. })
    }

    /// The offending line for format errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::InvalidEnvironmentFormat { line, .. } => Some(*line),
            Self::Io(_) => None,
        }
    }
}
