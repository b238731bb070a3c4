//! Low-level byte-by-byte parser for UTF-8 text.
//!
//! This module provides [ByteParser] for parsing text-based tree notations
//! with support for peeking, consuming, and delimiter-bounded token parsing.
//! Structural characters are ASCII, while labels and tokens may hold any
//! UTF-8 text (e.g. Japanese treebank forms).

use crate::parser::byte_source::{ByteSource, InMemoryByteSource};
use crate::parser::parsing_error::ParsingError;
use std::fs;
use std::path::Path;

// =#========================================================================#=
// BYTE PARSER
// =#========================================================================#=
/// A byte-by-byte parser with support for peeking, consuming, and
/// token extraction.
///
/// # Features
/// - Works with any [ByteSource]
/// - Whitespace skipping
/// - Delimiter-bounded token parsing, validated as UTF-8
/// - Context extraction for error reporting
///
/// # Example
/// ```
/// use grvtree::parser::ByteParser;
///
/// let mut parser = ByteParser::for_str("  (NN daughter)");
/// parser.skip_whitespace();
/// assert!(parser.consume_if(b'('));
/// assert_eq!(parser.parse_token(b"() \n\t\r").unwrap(), "NN");
/// ```
pub struct ByteParser<S: ByteSource> {
    source: S,
}

impl ByteParser<InMemoryByteSource> {
    /// Creates a new [ByteParser] from a string by copying it into a Vec.
    pub fn for_str(input: &str) -> Self {
        Self::new(InMemoryByteSource::from_vec(input.as_bytes().to_vec()))
    }

    /// Creates a new [ByteParser] from a byte slice by copying it into a Vec.
    pub fn for_bytes(input: &[u8]) -> Self {
        Self::new(InMemoryByteSource::from_vec(input.to_vec()))
    }

    /// Creates a new [ByteParser] by loading the full file into memory.
    ///
    /// # Errors
    /// Returns a [ParsingError] of kind `IoError` if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ParsingError> {
        let bytes = fs::read(path)?;
        Ok(Self::new(InMemoryByteSource::from_vec(bytes)))
    }
}

impl<S: ByteSource> ByteParser<S> {
    /// Creates a new [ByteParser] from a byte source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Peeks at the current byte without consuming it.
    ///
    /// # Returns
    /// * `Some(u8)` - The current byte if available
    /// * `None` - If at end of data (EOF)
    #[inline(always)]
    pub fn peek(&self) -> Option<u8> {
        self.source.peek()
    }

    /// Gets the current byte and advances the position (consumes it).
    #[inline(always)]
    pub fn next_byte(&mut self) -> Option<u8> {
        self.source.next_byte()
    }

    /// Skips (consumes) all consecutive whitespace characters.
    ///
    /// Whitespace includes: space (' '), tab ('\t'), newline ('\n'), and carriage return ('\r').
    pub fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            if b == b' ' || b == b'\t' || b == b'\n' || b == b'\r' {
                self.next_byte();
            } else {
                break;
            }
        }
    }

    /// Checks if the current byte is exactly `ch`.
    pub fn peek_is(&self, ch: u8) -> bool {
        self.peek() == Some(ch)
    }

    /// Consumes the current byte if it is exactly `ch`.
    ///
    /// # Returns
    /// `true` if the byte was matched and consumed, `false` otherwise
    pub fn consume_if(&mut self, ch: u8) -> bool {
        if self.peek_is(ch) {
            self.next_byte();
            true
        } else {
            false
        }
    }

    /// Returns whether the end of data (EOF) has been reached.
    pub fn is_eof(&self) -> bool {
        self.source.is_eof()
    }

    /// Returns the current parser position (byte offset) in the input.
    pub fn position(&self) -> usize {
        self.source.position()
    }

    /// Returns a string from up to `k` bytes from the current position for error context.
    ///
    /// Invalid UTF-8 sequences (e.g. a multi-byte character cut at `k`)
    /// are replaced with the Unicode replacement character.
    pub fn get_context_as_string(&self, k: usize) -> String {
        String::from_utf8_lossy(self.source.peek_slice(k)).into_owned()
    }

    /// Parses a token until any of the given delimiters (or EOF) is encountered.
    ///
    /// Delimiters are ASCII, so a multi-byte UTF-8 character is never split.
    /// The returned token may be empty if the parser sits on a delimiter.
    ///
    /// # Errors
    /// Returns a [ParsingError] of kind `InvalidUtf8` if the token bytes are not valid UTF-8.
    pub fn parse_token(&mut self, delimiters: &[u8]) -> Result<String, ParsingError> {
        let start = self.position();

        while let Some(b) = self.peek() {
            if delimiters.contains(&b) {
                break;
            }
            self.next_byte();
        }

        let bytes = self.source.slice_from(start).unwrap_or(&[]);
        match std::str::from_utf8(bytes) {
            Ok(token) => Ok(token.to_string()),
            Err(_) => Err(ParsingError::invalid_utf8(self)),
        }
    }
}
