//! Bracketed (Penn Treebank style) notation parser and writer.
//!
//! This module provides [BracketParser] to parse bracketed constituency
//! trees such as `(S (NP (PRP My) (NN daughter)) (VP (VBD broke)))`
//! into [ParseTree]s, and [to_bracketed] to write them back.
//!
//! # Quick API
//! * [`parse_file`] - parses all trees of a file
//! * [`parse_str`] - parses a single string
//!
//! # Full API
//! For more control, configure a [BracketParser] and provide data via a
//! [ByteParser]:
//! * [`BracketParser::parse_str`] - parse a single tree
//! * [`BracketParser::parse_all`] - parse all trees until EOF
//! * [`BracketParser::into_iter`] - obtain an iterator over trees
//!
//! # Format
//! * `tree ::= '(' label? child+ ')'`
//! * `child ::= tree | token`
//! * A node with a single token child is a word node (word category + token);
//!   a token may not share its parent with other children.
//! * Labels and tokens are UTF-8 runs without whitespace or parentheses.
//! * Whitespace, including newlines, can occur between any elements.

mod defs;
pub mod parser;
pub mod writer;

pub use parser::{BracketIterator, BracketParser};
pub use writer::{BracketStyle, to_bracketed, write_bracketed_file};

use crate::model::ParseTree;
use crate::parser::ParsingError;
use crate::parser::byte_parser::ByteParser;
use std::path::Path;

// ============================================================================
// QUICK PARSING API (pub)
// ============================================================================
/// Parses a file of bracketed trees eagerly and returns all trees as written.
///
/// # Arguments
/// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
///   with whitespace-separated bracketed trees
///
/// # Example
/// ```no_run
/// use grvtree::bracket::parse_file;
///
/// let trees = parse_file("keyaki.psd")?;
/// println!("Parsed {} trees", trees.len());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<ParseTree>, ParsingError> {
    let byte_parser = ByteParser::from_file(path)?;
    BracketParser::new().parse_all(byte_parser)
}

/// Parses a single bracketed tree string as written.
///
/// # Example
/// ```
/// use grvtree::bracket::parse_str;
///
/// let tree = parse_str("(IP-MAT (ADJI ありがとう) (VB2 ござい) (AX ます))")?;
/// assert_eq!(tree.num_words(), 3);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_str<S: AsRef<str>>(bracketed: S) -> Result<ParseTree, ParsingError> {
    let mut byte_parser = ByteParser::for_str(bracketed.as_ref());
    BracketParser::new().parse_str(&mut byte_parser)
}
