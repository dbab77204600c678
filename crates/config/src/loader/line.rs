//! Line grammar for configuration files.
//!
//! Responsibilities:
//! - Split file content into physical lines (`\n`, `\r\n`, or a lone `\r`).
//! - Strip comments and surrounding whitespace from a physical line.
//! - Split a line into key, type tag, and raw value.
//!
//! Does NOT handle:
//! - Validating the type tag or converting the value (see coerce.rs).
//!
//! Invariants:
//! - Only the whole line is trimmed. Keys and type tags are upper-cased but
//!   keep any inner padding; values are kept verbatim.
//! - A line with a single separator has type tag `STR`.
//! - Blank and comment-only lines yield `None`, never an error.

use super::error::ConfigError;
use crate::constants::{COMMENT_MARKER, SEPARATOR, TYPED_LINE_SEPARATORS};
use crate::types::TypeTag;

/// One declaration read from a configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    /// 1-based physical line number.
    pub line_number: usize,
    pub key: String,
    /// Upper-cased tag text. Not yet validated against [`TypeTag`].
    pub type_tag: String,
    pub raw_value: &'a str,
}

/// Parse a single physical line.
///
/// Returns `Ok(None)` for lines that are empty once comments and whitespace
/// are removed.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvironmentFormat`] if the line has no
/// separator.
pub fn parse_line(line_number: usize, raw: &str) -> Result<Option<ParsedLine<'_>>, ConfigError> {
    let content = strip_comment(raw).trim();
    if content.is_empty() {
        return Ok(None);
    }

    let Some((key, rest)) = content.split_once(SEPARATOR) else {
        return Err(ConfigError::malformed_line(line_number, content));
    };

    let (type_tag, raw_value) = if content.matches(SEPARATOR).count() >= TYPED_LINE_SEPARATORS {
        match rest.split_once(SEPARATOR) {
            Some((tag, value)) => (tag.to_uppercase(), value),
            None => return Err(ConfigError::malformed_line(line_number, content)),
        }
    } else {
        (TypeTag::Str.as_str().to_string(), rest)
    };

    Ok(Some(ParsedLine {
        line_number,
        key: key.to_uppercase(),
        type_tag,
        raw_value,
    }))
}

/// Iterate over the physical lines of `contents`.
///
/// `\n`, `\r\n`, and a lone `\r` each end a line. A trailing terminator does
/// not produce an extra empty line.
pub(crate) fn physical_lines(contents: &str) -> impl Iterator<Item = &str> {
    let mut rest = contents;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\n', '\r']) {
            Some(end) => {
                let line = &rest[..end];
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}

fn strip_comment(raw: &str) -> &str {
    raw.split_once(COMMENT_MARKER)
        .map_or(raw, |(before, _)| before)
}
