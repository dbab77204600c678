//! Type tags selecting how a raw value is coerced.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The coercion rule declared by the middle field of `KEY=TYPE=VALUE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Str,
    Int,
    Bool,
    Arr,
    Json,
}

/// Returned when a tag is not one of [`TypeTag::ALL`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown type tag \"{0}\"")]
pub struct UnknownTypeTag(pub String);

impl TypeTag {
    /// Every recognized tag, in the order they are listed to users.
    pub const ALL: [TypeTag; 5] = [
        TypeTag::Str,
        TypeTag::Int,
        TypeTag::Bool,
        TypeTag::Arr,
        TypeTag::Json,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            TypeTag::Str => "STR",
            TypeTag::Int => "INT",
            TypeTag::Bool => "BOOL",
            TypeTag::Arr => "ARR",
            TypeTag::Json => "JSON",
        }
    }

    /// Human-readable list of the valid tags, e.g. `"STR", "INT" or "JSON"`.
    pub fn expected_list() -> String {
        let quoted: Vec<String> = Self::ALL.iter().map(|t| format!("\"{t}\"")).collect();
        match quoted.split_last() {
            Some((last, [])) => last.clone(),
            Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
            None => String::new(),
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeTag {
    type Err = UnknownTypeTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownTypeTag(s.to_string()))
    }
}
