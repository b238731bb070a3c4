//! Collapsing and expanding unary chains.
//!
//! The flat record encoding requires every phrase to have at least two
//! children (besides a one-token sentence). Treebanks routinely contain
//! unary chains such as `(NP (PRO そこ))` or `(ROOT (S ...))`, which are
//! merged into single nodes with joined labels before encoding:
//!
//! | Input | Collapsed (separator `☆`) |
//! |-------|---------------------------|
//! | `(NP (PRO そこ))` | `(NP☆PRO そこ)` |
//! | `(ADVP (NP (N x) (N y)))` | `(ADVP☆NP (N x) (N y))` |
//! | `(S (NN x))` as root | `(S (NN x))` (root is kept) |
//!
//! [expand_unary_chains] reverses the merge by splitting joined labels.

use crate::model::node::Node;
use crate::model::tree::{NodeIndex, ParseTree};
use log::trace;

/// Separator used by default to join the labels of merged nodes.
pub const DEFAULT_UNARY_SEPARATOR: &str = "☆";

/// Marks an old node not yet mapped into the new arena.
const UNMAPPED: NodeIndex = usize::MAX;

/// Returns a copy of `tree` with all unary chains merged into single nodes,
/// labels joined top-down with `separator`.
///
/// A phrase whose only child is a word merges into the word's category.
/// The root is never merged into a word, so a one-token sentence keeps its
/// phrase root. A unary phrase with an empty label is dropped without
/// leaving a trace in the joined label.
///
/// # Example
/// ```
/// use grvtree::model::collapse_unary_chains;
/// use grvtree::parse_bracketed_str;
///
/// let tree = parse_bracketed_str("(S (NP (PRO it)) (VP (VB rains)))").unwrap();
/// let collapsed = collapse_unary_chains(&tree, "+");
/// assert_eq!(collapsed.to_string(), "(S (NP+PRO it) (VP+VB rains))");
/// ```
pub fn collapse_unary_chains(tree: &ParseTree, separator: &str) -> ParseTree {
    let mut collapsed = ParseTree::with_capacity(tree.num_nodes());
    if !tree.is_root_set() {
        return collapsed;
    }

    let mut mapped = vec![UNMAPPED; tree.num_nodes()];
    for node in tree.post_order_iter() {
        let new_index = match node {
            Node::Word { category, form, .. } => collapsed.add_word(category.as_str(), form.as_str()),
            Node::Phrase { index, label, children, .. } => match children.as_slice() {
                [only] if !(*index == tree.root_index() && collapsed[mapped[*only]].is_word()) => {
                    let merged = mapped[*only];
                    // Unnamed wrappers such as `( (S ...))` just vanish
                    if !label.is_empty() {
                        let joined = format!("{label}{separator}{}", collapsed.label_of(merged));
                        trace!("Merging unary chain into '{joined}'");
                        collapsed.set_label(merged, joined);
                    }
                    merged
                }
                _ => {
                    let new_children = children.iter().map(|&child| mapped[child]).collect();
                    collapsed.add_phrase(label.as_str(), new_children)
                }
            },
        };
        mapped[node.index()] = new_index;
    }

    collapsed.set_root(mapped[tree.root_index()]);
    collapsed
}

/// Returns a copy of `tree` with every label containing `separator` split
/// back into a chain of unary nodes, outermost label first.
///
/// Inverse of [collapse_unary_chains] as long as the input labels did
/// not contain the separator themselves.
pub fn expand_unary_chains(tree: &ParseTree, separator: &str) -> ParseTree {
    if !tree.is_root_set() || separator.is_empty() {
        return tree.clone();
    }

    let mut expanded = ParseTree::with_capacity(tree.num_nodes());
    let mut mapped = vec![UNMAPPED; tree.num_nodes()];
    for node in tree.post_order_iter() {
        let mut parts: Vec<&str> = node.label().split(separator).collect();
        // split always yields at least one part
        let innermost = parts.pop().unwrap_or_default();

        let mut new_index = match node {
            Node::Word { form, .. } => expanded.add_word(innermost, form.as_str()),
            Node::Phrase { children, .. } => {
                let new_children = children.iter().map(|&child| mapped[child]).collect();
                expanded.add_phrase(innermost, new_children)
            }
        };
        for outer in parts.into_iter().rev() {
            new_index = expanded.add_phrase(outer, vec![new_index]);
        }
        mapped[node.index()] = new_index;
    }

    expanded.set_root(mapped[tree.root_index()]);
    expanded
}
