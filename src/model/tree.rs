//! Provides the constituency tree representation.
//!
//! * [ParseTree] - Tree structure using the arena pattern
//! * [NodeIndex] - Type used to index nodes in a tree

use crate::bracket::{BracketStyle, to_bracketed};
use crate::model::node::Node;
use std::fmt;

/// Index of a node in a tree (arena).
pub type NodeIndex = usize;

/// *During construction only*, index for unset root.
const NO_ROOT_SET_INDEX: NodeIndex = usize::MAX;

// =$========================================================================$=
// TREE
// =$========================================================================$=
/// An ordered, labeled constituency tree represented using the arena
/// pattern on [Node].
///
/// Nodes are stored in a contiguous vector and referenced by [NodeIndex].
///
/// # Structure
/// - Phrase nodes carry a label and any number of ordered children.
/// - Word nodes are the word-category node together with its token, so every
///   token is by construction the sole child of its category node.
/// - No assumption on order of indices is maintained.
///
/// # Construction
/// Trees are built bottom-up: add words, then phrases over already added
/// children, then mark the root with [`ParseTree::set_root`].
/// Test validity with [`ParseTree::is_valid()`].
///
/// # Equality
/// Two trees are equal if they have the same shape, labels and tokens;
/// arena layout does not matter.
///
/// # Example
/// ```
/// use grvtree::model::ParseTree;
///
/// let mut tree = ParseTree::new();
/// let my = tree.add_word("PRP", "My");
/// let daughter = tree.add_word("NN", "daughter");
/// let np = tree.add_phrase("NP", vec![my, daughter]);
/// let slept = tree.add_word("VBD", "slept");
/// let s = tree.add_phrase("S", vec![np, slept]);
/// tree.set_root(s);
///
/// assert_eq!(tree.num_words(), 3);
/// assert_eq!(tree.to_string(), "(S (NP (PRP My) (NN daughter)) (VBD slept))");
/// ```
#[derive(Debug, Clone)]
pub struct ParseTree {
    /// Nodes of this tree (arena pattern)
    nodes: Vec<Node>,

    /// Index of the root of this tree
    root_index: NodeIndex,
}

// ============================================================================
// New, Getters / Accessors, etc. (pub)
// ============================================================================
impl ParseTree {
    /// Creates a new, empty tree.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new, empty tree with capacity for `num_nodes` nodes.
    pub fn with_capacity(num_nodes: usize) -> Self {
        ParseTree {
            nodes: Vec::with_capacity(num_nodes),
            root_index: NO_ROOT_SET_INDEX,
        }
    }

    /// Adds a word node (word category plus token) to the tree,
    /// assigning a unique index, which gets returned.
    pub fn add_word(&mut self, category: impl Into<String>, form: impl Into<String>) -> NodeIndex {
        let index = self.nodes.len();
        self.nodes
            .push(Node::new_word(index, category.into(), form.into()));
        index
    }

    /// Adds a phrase node over the given children, assigning a unique index,
    /// which gets returned. Sets the parent of each child.
    ///
    /// # Panics
    /// Panics if a child index is out of bounds.
    pub fn add_phrase(&mut self, label: impl Into<String>, children: Vec<NodeIndex>) -> NodeIndex {
        let index = self.nodes.len();
        for &child in &children {
            self.nodes[child].set_parent(index);
        }
        self.nodes
            .push(Node::new_phrase(index, label.into(), children));
        index
    }

    /// Marks the node at `index` as root of the tree.
    pub fn set_root(&mut self, index: NodeIndex) {
        self.root_index = index;
    }

    /// Replaces the label (or word category) of the node at `index`.
    pub(crate) fn set_label(&mut self, index: NodeIndex, label: String) {
        self.nodes[index].set_label(label);
    }

    /// Returns whether root of tree has been set.
    pub fn is_root_set(&self) -> bool {
        self.root_index != NO_ROOT_SET_INDEX
    }

    /// Returns a reference to the root node.
    ///
    /// # Panics
    /// Panics if the root hasn't been set.
    pub fn root(&self) -> &Node {
        &self[self.root_index]
    }

    /// Returns the index of the root.
    pub fn root_index(&self) -> NodeIndex {
        self.root_index
    }

    /// Returns the label of the root, or `None` if no root is set.
    pub fn root_label(&self) -> Option<&str> {
        self.nodes.get(self.root_index).map(Node::label)
    }

    /// Returns a reference to the node at the given index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn node(&self, index: NodeIndex) -> &Node {
        &self[index]
    }

    /// Returns the label of the node at `index`:
    /// the phrase label or, for a word node, its category.
    pub fn label_of(&self, index: NodeIndex) -> &str {
        self[index].label()
    }

    /// Returns the depth of the node at `index`, with the root at depth 0.
    pub fn depth_of(&self, index: NodeIndex) -> usize {
        let mut depth = 0;
        let mut current = &self[index];
        while let Some(parent) = current.parent() {
            depth += 1;
            current = &self[parent];
        }
        depth
    }

    /// Returns the number of words (tokens) in this tree.
    pub fn num_words(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_word()).count()
    }

    /// Returns the number of phrase nodes in this tree.
    pub fn num_phrases(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_phrase()).count()
    }

    /// Returns the number of nodes in this tree.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns an iterator over the word nodes in left-to-right (sentence) order.
    pub fn words(&self) -> impl Iterator<Item = &Node> {
        self.pre_order_iter().filter(|n| n.is_word())
    }

    /// Returns whether the tree contains a unary chain, i.e. a phrase with
    /// exactly one child.
    ///
    /// A root whose single child is a word (a one-token sentence) is not
    /// counted, as it cannot be collapsed any further.
    pub fn has_unary_chains(&self) -> bool {
        self.pre_order_iter().any(|node| match node.children() {
            Some([only]) => !(node.index() == self.root_index && self[*only].is_word()),
            _ => false,
        })
    }

    /// Validates the tree structure and all index references.
    ///
    /// Checks:
    /// - Root index is set, in bounds and the root has no parent
    /// - All node indices match their position in the arena
    /// - Every phrase has at least one child
    /// - All child indices are valid and point back to correct parent
    /// - Every node is reachable from the root
    pub fn is_valid(&self) -> bool {
        if self.root_index >= self.nodes.len() || self.root().has_parent() {
            return false;
        }

        for (index, node) in self.nodes.iter().enumerate() {
            if node.index() != index {
                return false;
            }

            if let Some(children) = node.children() {
                if children.is_empty() {
                    return false;
                }
                for &child in children {
                    if child >= self.nodes.len() || self.nodes[child].parent() != Some(index) {
                        return false;
                    }
                }
            }
        }

        // Parents point back (above), so reaching all nodes rules out cycles and strays
        self.pre_order_iter().take(self.nodes.len() + 1).count() == self.nodes.len()
    }
}

impl Default for ParseTree {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<NodeIndex> for ParseTree {
    type Output = Node;

    fn index(&self, index: NodeIndex) -> &Self::Output {
        &self.nodes[index]
    }
}

// ============================================================================
// Equality & Printing (pub)
// ============================================================================
impl PartialEq for ParseTree {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_root_set(), other.is_root_set()) {
            (false, false) => return true,
            (true, true) => {}
            _ => return false,
        }

        let mut pending = vec![(self.root_index, other.root_index)];
        while let Some((mine, theirs)) = pending.pop() {
            match (&self[mine], &other[theirs]) {
                (
                    Node::Word { category, form, .. },
                    Node::Word {
                        category: other_category,
                        form: other_form,
                        ..
                    },
                ) => {
                    if category != other_category || form != other_form {
                        return false;
                    }
                }
                (
                    Node::Phrase { label, children, .. },
                    Node::Phrase {
                        label: other_label,
                        children: other_children,
                        ..
                    },
                ) => {
                    if label != other_label || children.len() != other_children.len() {
                        return false;
                    }
                    pending.extend(children.iter().copied().zip(other_children.iter().copied()));
                }
                _ => return false,
            }
        }

        true
    }
}

impl Eq for ParseTree {}

impl fmt::Display for ParseTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_bracketed(self, BracketStyle::Compact))
    }
}

// =$========================================================================$=
// ITERATORS
// =$========================================================================$=
impl ParseTree {
    /// Returns an iterator over the tree in post-order (children before parents).
    pub fn post_order_iter(&self) -> PostOrderIter<'_> {
        PostOrderIter::new(self)
    }

    /// Returns an iterator over the tree in pre-order (parents before children).
    ///
    /// Word nodes are visited in left-to-right order.
    pub fn pre_order_iter(&self) -> PreOrderIter<'_> {
        PreOrderIter::new(self)
    }
}

/// Iterator for post-order traversal (children before parents).
///
/// Uses an explicit stack, so deep trees do not recurse.
pub struct PostOrderIter<'a> {
    tree: &'a ParseTree,
    stack: Vec<(NodeIndex, bool)>, // (index, children_visited)
}

impl<'a> PostOrderIter<'a> {
    fn new(tree: &'a ParseTree) -> Self {
        let mut stack = Vec::new();
        if tree.is_root_set() {
            stack.push((tree.root_index, false));
        }
        PostOrderIter { tree, stack }
    }
}

impl<'a> Iterator for PostOrderIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((index, children_visited)) = self.stack.pop() {
            let node = &self.tree[index];

            match node.children() {
                Some(children) if !children_visited => {
                    self.stack.push((index, true));
                    // Push children right to left, so the leftmost is processed first
                    self.stack
                        .extend(children.iter().rev().map(|&child| (child, false)));
                }
                _ => return Some(node),
            }
        }
        None
    }
}

/// Iterator for pre-order traversal (parents before children).
pub struct PreOrderIter<'a> {
    tree: &'a ParseTree,
    stack: Vec<NodeIndex>,
}

impl<'a> PreOrderIter<'a> {
    fn new(tree: &'a ParseTree) -> Self {
        let mut stack = Vec::new();
        if tree.is_root_set() {
            stack.push(tree.root_index);
        }
        PreOrderIter { tree, stack }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let node = &self.tree[index];

        if let Some(children) = node.children() {
            self.stack.extend(children.iter().rev());
        }

        Some(node)
    }
}
