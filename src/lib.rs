//! Grvtree converts constituency trees into flat, fixed-width record
//! sequences and back, losslessly, and scores predicted sequences against
//! reference sequences.
//!
//! Core functionality provided:
//! - Codec: [encode] a [ParseTree] into one [Record] per token and [decode]
//!   a record sequence back into a tree, so tree structure can be handled by
//!   components that only label positions of a sequence.
//! - Scoring: [compare] two sequences field by field into [ScoreCounts],
//!   and derive precisions from it; [sequence_equal] checks that two
//!   sequences cover the same tokens.
//! - Tree model: [ParseTree] using the arena pattern, with unary-chain
//!   collapsing, which the codec requires beforehand.
//!   See [crate::model] for more details.
//! - Bracketed notation: parse and write Penn Treebank style trees.
//!   See [crate::bracket].
//!
//! # Usage patterns
//! The quick API below parses bracketed strings with default settings.
//! For full control, configure a [BracketParser](crate::bracket::BracketParser)
//! and call the codec functions directly.
//!
//! ## Example
//!
//! ```
//! use grvtree::{compare, decode, encode_bracketed_str, parse_bracketed_str};
//! use grvtree::model::{DEFAULT_UNARY_SEPARATOR, collapse_unary_chains};
//! use grvtree::score::PrecisionMode;
//!
//! let gold = encode_bracketed_str("(S (NP (PRP My) (NN daughter)) (VP (VBD broke) (NP (DET the) (NN toy))))")?;
//! let predicted = encode_bracketed_str("(S (PRP My) (NN daughter) (VP (VBD broke) (NP (DET the) (NN toy))))")?;
//!
//! let counts = compare(&gold, &predicted);
//! assert_eq!(counts.matched_form, 5);
//! assert!(counts.precision_phrase_label(PrecisionMode::Relative) < 1.0);
//!
//! let tree = decode(&gold)?.unwrap();
//! let reference = parse_bracketed_str("(S (NP (PRP My) (NN daughter)) (VP (VBD broke) (NP (DET the) (NN toy))))")?;
//! assert_eq!(tree, collapse_unary_chains(&reference, DEFAULT_UNARY_SEPARATOR));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod bracket;
pub mod codec;
pub mod model;
pub mod parser;
pub mod score;

pub use crate::codec::{Record, StructuralDecodeError, decode, encode};
pub use crate::model::ParseTree;
pub use crate::score::{ScoreCounts, compare, sequence_equal};

use crate::model::{DEFAULT_UNARY_SEPARATOR, collapse_unary_chains};
use crate::parser::ParsingError;
use std::path::Path;

// ============================================================================
// Quick API
// ============================================================================
/// Parses a single bracketed tree string as written, returning a [ParseTree].
///
/// See [`bracket::parse_str`] for full documentation.
pub fn parse_bracketed_str<S: AsRef<str>>(bracketed: S) -> Result<ParseTree, ParsingError> {
    bracket::parse_str(bracketed)
}

/// Parses a file of bracketed trees as written, returning all trees.
///
/// See [`bracket::parse_file`] for full documentation.
pub fn parse_bracketed_file<P: AsRef<Path>>(path: P) -> Result<Vec<ParseTree>, ParsingError> {
    bracket::parse_file(path)
}

/// Parses a bracketed tree, collapses its unary chains with
/// [DEFAULT_UNARY_SEPARATOR] and encodes it.
///
/// # Example
/// ```
/// use grvtree::{Record, encode_bracketed_str};
///
/// let records = encode_bracketed_str("(IP-MAT (NP (PRO そこ)) (VB 行く))").unwrap();
/// assert_eq!(records[0], Record::new(1, "IP-MAT", "NP☆PRO", "そこ"));
/// ```
pub fn encode_bracketed_str<S: AsRef<str>>(bracketed: S) -> Result<Vec<Record>, ParsingError> {
    let tree = bracket::parse_str(bracketed)?;
    Ok(encode(&collapse_unary_chains(&tree, DEFAULT_UNARY_SEPARATOR)))
}
