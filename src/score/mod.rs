//! Scoring a predicted record sequence against a reference sequence.
//!
//! [compare] counts per-field agreement position by position. The last
//! common position is a placeholder for `height_delta` and `phrase_label`
//! (see [Record](crate::codec::Record)) and is left out for those fields.
//! [ScoreCounts] then derives precisions in [PrecisionMode::Relative] or
//! [PrecisionMode::Absolute] normalization.
//!
//! Counts describe a single sequence pair; summing over a corpus is left
//! to the caller. Use [sequence_equal] to check that both sequences cover
//! the same tokens before reading structural counts.

pub mod compare;
pub mod counts;

pub use compare::{compare, is_placeholder_position, sequence_equal};
pub use counts::{PrecisionMode, ScoreCounts};
