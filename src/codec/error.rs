//! Error type for replaying record sequences.

use thiserror::Error;

/// A record sequence that cannot be replayed as a tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralDecodeError {
    /// The accumulated height deltas move above the root.
    #[error("record {position} moves to depth {depth}, above the root")]
    NegativeDepth { position: usize, depth: i64 },

    /// The accumulated height deltas open deeper than any tree with this
    /// many tokens can be.
    #[error("record {position} moves to depth {depth}, but {max} is the deepest possible fork")]
    DepthExceedsLength { position: usize, depth: i64, max: i64 },
}
