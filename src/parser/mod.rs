//! Basic low-level byte parser functionality.
//!
//! Provides the [ByteParser] used by the
//! [BracketParser](crate::bracket::BracketParser), along with
//! [ParsingError] for reporting malformed input.

pub mod byte_parser;
pub(crate) mod byte_source;
pub mod parsing_error;

pub use byte_parser::ByteParser;
pub use parsing_error::{ParsingError, ParsingErrorType};
