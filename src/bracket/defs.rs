//! Constants for bracketed tree notation.

/// Label and token delimiters: parentheses and whitespace
pub(crate) const BRACKET_LABEL_DELIMITERS: &[u8] = b"() \n\t\r";

/// Indentation per tree level in [BracketStyle::Indented](super::BracketStyle::Indented)
pub(crate) const INDENT: &str = "  ";

/// Estimated characters per node besides its label, e.g. `"(", " ", ")"`
pub(crate) const NODE_OVERHEAD_CHARS: usize = 3;
