//! Centralized constants for the typedenv line grammar.
//!
//! These values define the file format accepted by the loader and are kept
//! in one place so the parser, the coercion rules, and the error messages
//! agree on them.

// =============================================================================
// Line Grammar
// =============================================================================

/// Separates the key, the optional type tag, and the value on a line.
pub const SEPARATOR: char = '=';

/// Everything from the first occurrence of this character to the end of the
/// line is discarded.
pub const COMMENT_MARKER: char = '#';

/// Number of separators at which a line is read as `KEY=TYPE=VALUE`.
pub const TYPED_LINE_SEPARATORS: usize = 2;

// =============================================================================
// Coercion
// =============================================================================

/// The only text (compared ignoring ASCII case) that coerces to `true` for
/// `BOOL` entries. Anything else is `false`.
pub const BOOL_TRUE_LITERAL: &str = "TRUE";
