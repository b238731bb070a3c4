//! Lossless codec between constituency trees and flat record sequences.
//!
//! A tree with `n` tokens is encoded as `n` [Record]s, one per token in
//! sentence order. Each record holds the token and its word category,
//! plus the label and relative depth of the fork (lowest common ancestor)
//! between the token and its right neighbour:
//!
//! ```text
//! (S (NP (PRP My) (NN daughter)) (VP (VBD broke) (NP (DET the) (NN toy))))
//!
//!  2  NP  PRP  My         fork of My/daughter is NP at depth 1 (from -1)
//! -1  S   NN   daughter   fork of daughter/broke is S at depth 0
//!  1  VP  VBD  broke      fork of broke/the is VP at depth 1
//!  1  NP  DET  the        fork of the/toy is NP at depth 2
//!  0  S   NN   toy        last token: fixed 0 and root label
//! ```
//!
//! [decode] replays the depth changes with a stack of open phrases. The
//! pair is exact for trees without unary chains, so trees are normalized
//! with [collapse_unary_chains](crate::model::collapse_unary_chains) first.

pub mod decode;
pub mod encode;
pub mod error;
pub mod record;

pub use decode::decode;
pub use encode::encode;
pub use error::StructuralDecodeError;
pub use record::Record;
