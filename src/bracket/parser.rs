//! Structs and logic to parse bracketed trees.
//!
//! This module provides the [BracketParser] struct, which offers methods
//! to parse single trees or whole treebank files, as well as lazy parsing
//! via a [BracketIterator].

use crate::bracket::defs::BRACKET_LABEL_DELIMITERS;
use crate::model::{NodeIndex, ParseTree, collapse_unary_chains};
use crate::parser::byte_parser::ByteParser;
use crate::parser::byte_source::ByteSource;
use crate::parser::parsing_error::ParsingError;
use log::trace;

// =#========================================================================#=
// BRACKET PARSER
// =#========================================================================$=
/// Parser (configuration) for bracketed constituency trees.
///
/// # Configuration
/// * [`with_unary_collapse(separator)`](Self::with_unary_collapse)
///     - Merges unary chains of every parsed tree with the given separator,
///       see [collapse_unary_chains].
///
/// # Parsing
/// * [`parse_str`](Self::parse_str) - Parse single tree
/// * [`parse_all`](Self::parse_all) - Parse all trees eagerly
/// * [`into_iter`](Self::into_iter) - Parse trees lazily
///
/// # Example
/// ```
/// use grvtree::bracket::BracketParser;
/// use grvtree::parser::ByteParser;
///
/// let input = "(IP-MAT (NP-SBJ (PRO 私)) (VB 行く))";
/// let mut byte_parser = ByteParser::for_str(input);
/// let parser = BracketParser::new().with_unary_collapse("☆");
///
/// let tree = parser.parse_str(&mut byte_parser).unwrap();
/// assert_eq!(tree.to_string(), "(IP-MAT (NP-SBJ☆PRO 私) (VB 行く))");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BracketParser {
    unary_separator: Option<String>,
}

// ============================================================================
// Construction & Configuration (pub)
// ============================================================================
impl BracketParser {
    /// Creates a new [BracketParser] that keeps trees as written.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the parser to collapse unary chains, joining labels with `separator`.
    pub fn with_unary_collapse(mut self, separator: impl Into<String>) -> Self {
        self.unary_separator = Some(separator.into());
        self
    }
}

// ============================================================================
// API Parsing (pub)
// ============================================================================
impl BracketParser {
    /// Consumes the parser and returns an iterator over trees from the byte source.
    pub fn into_iter<B: ByteSource>(self, byte_parser: ByteParser<B>) -> BracketIterator<B> {
        BracketIterator {
            byte_parser,
            parser: self,
            done: false,
        }
    }

    /// Parses all bracketed trees from the byte source until EOF.
    ///
    /// # Returns
    /// * `Ok(Vec<ParseTree>)` - All parsed trees, possibly none
    /// * `Err(ParsingError)` - If any tree fails to parse
    pub fn parse_all<B: ByteSource>(
        &self,
        mut byte_parser: ByteParser<B>,
    ) -> Result<Vec<ParseTree>, ParsingError> {
        let mut trees = Vec::new();
        loop {
            byte_parser.skip_whitespace();
            if byte_parser.is_eof() {
                break;
            }
            trees.push(self.parse_str(&mut byte_parser)?);
        }
        trace!("Parsed {} trees", trees.len());
        Ok(trees)
    }

    /// Parses a single bracketed tree from the given [ByteParser].
    ///
    /// # Returns
    /// * `Ok(ParseTree)` - The parsed tree
    /// * `Err(ParsingError)` - If no tree is found or the notation is invalid
    pub fn parse_str<B: ByteSource>(
        &self,
        parser: &mut ByteParser<B>,
    ) -> Result<ParseTree, ParsingError> {
        parser.skip_whitespace();
        if parser.is_eof() {
            return Err(ParsingError::empty_input(parser));
        }

        let mut tree = ParseTree::new();
        let root_index = self.parse_node(parser, &mut tree)?;
        tree.set_root(root_index);

        match &self.unary_separator {
            Some(separator) => Ok(collapse_unary_chains(&tree, separator)),
            None => Ok(tree),
        }
    }
}

// ============================================================================
// Parsing
// ============================================================================
impl BracketParser {
    /// Parses a node `'(' label? child+ ')'`, adds it to the tree and returns its index.
    ///
    /// A node whose single child is a token becomes a word node,
    /// any other node becomes a phrase over its parsed subtrees.
    fn parse_node<B: ByteSource>(
        &self,
        parser: &mut ByteParser<B>,
        tree: &mut ParseTree,
    ) -> Result<NodeIndex, ParsingError> {
        parser.skip_whitespace();
        if !parser.consume_if(b'(') {
            let next_char = parser.peek().map(char::from);
            return Err(ParsingError::invalid_bracket_string(
                parser,
                format!("Expected '(' at start of node but found {:?}", next_char),
            ));
        }

        // Label may be empty, e.g. the unnamed wrapper in `( (S ...))`
        parser.skip_whitespace();
        let label = parser.parse_token(BRACKET_LABEL_DELIMITERS)?;

        let mut children = Vec::new();
        let mut tokens = Vec::new();
        loop {
            parser.skip_whitespace();
            match parser.peek() {
                None => return Err(ParsingError::unexpected_eof(parser)),
                Some(b')') => {
                    parser.next_byte();
                    break;
                }
                Some(b'(') => children.push(self.parse_node(parser, tree)?),
                Some(_) => tokens.push(parser.parse_token(BRACKET_LABEL_DELIMITERS)?),
            }
        }

        match (tokens.len(), children.is_empty()) {
            (0, false) => Ok(tree.add_phrase(label, children)),
            (1, true) => {
                let form = tokens.pop().unwrap_or_default();
                Ok(tree.add_word(label, form))
            }
            (0, true) => Err(ParsingError::invalid_bracket_string(
                parser,
                format!("Node '{label}' has no children"),
            )),
            _ => Err(ParsingError::invalid_bracket_string(
                parser,
                format!("Node '{label}' mixes tokens {tokens:?} with other children"),
            )),
        }
    }
}

// =#========================================================================#=
// BRACKET ITERATOR (lazy parser)
// =#========================================================================$=
/// Iterator to parse bracketed trees.
///
/// Created by [BracketParser::into_iter()].
/// Yields `Result<ParseTree, ParsingError>` for each tree and stops after
/// the first error.
pub struct BracketIterator<B: ByteSource> {
    parser: BracketParser,
    byte_parser: ByteParser<B>,
    done: bool,
}

impl<B: ByteSource> BracketIterator<B> {
    /// Consumes the iterator and returns the underlying [BracketParser].
    pub fn into_parser(self) -> BracketParser {
        self.parser
    }
}

impl<B: ByteSource> Iterator for BracketIterator<B> {
    type Item = Result<ParseTree, ParsingError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        self.byte_parser.skip_whitespace();
        if self.byte_parser.is_eof() {
            self.done = true;
            return None;
        }

        let result = self.parser.parse_str(&mut self.byte_parser);
        if result.is_err() {
            self.done = true;
        }
        Some(result)
    }
}
