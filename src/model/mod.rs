//! Data model for constituency (phrase-structure) trees.
//!
//! # Tree representation
//! Trees are represented by [ParseTree], which uses the arena pattern to
//! store [Node]s referenced by [NodeIndex]. A node is either a `Phrase`
//! (label plus ordered children of any arity) or a `Word` (word-category
//! label plus the token it dominates).
//!
//! # Building trees
//! Trees are constructed bottom-up, either by hand, by the
//! [BracketParser](crate::bracket::BracketParser), or by
//! [decode](crate::codec::decode).
//!
//! # Unary chains
//! The record codec expects trees without unary chains.
//! [collapse_unary_chains] merges them into joined labels,
//! [expand_unary_chains] splits them again.

pub mod node;
pub mod tree;
pub mod unary;

pub use node::Node;
pub use tree::{NodeIndex, ParseTree, PostOrderIter, PreOrderIter};
pub use unary::{DEFAULT_UNARY_SEPARATOR, collapse_unary_chains, expand_unary_chains};
