//! Node module for constituency tree representation.

use crate::model::tree::NodeIndex;

/// During construction, nodes might not have their parent set yet.
pub(crate) const NO_PARENT_SET: NodeIndex = usize::MAX;

// =#========================================================================#=
// NODE
// =#========================================================================#=
/// Represents a node in a constituency tree.
///
/// A node is either:
/// - **Phrase**: Has a phrase label and an ordered list of children
/// - **Word**: A word-category (preterminal) node together with the token
///   it dominates; has no children
///
/// # Invariants
/// - `index` is the position of the node in the arena
/// - `parent` is [NO_PARENT_SET] for the root and, during construction,
///   for nodes not yet attached
/// - Children of a phrase are in left-to-right order
#[derive(PartialEq, Debug, Clone)]
pub enum Node {
    /// Internal phrase node
    Phrase {
        /// Index of this node in the tree arena
        index: NodeIndex,
        /// Index of the parent node
        parent: NodeIndex,
        /// Phrase label, e.g. `NP` or `IP-MAT`
        label: String,
        /// Indices of the child nodes, left to right
        children: Vec<NodeIndex>,
    },
    /// Word-category node with its token
    Word {
        /// Index of this node in the tree arena
        index: NodeIndex,
        /// Index of the parent node
        parent: NodeIndex,
        /// Word-category label, e.g. `NN`
        category: String,
        /// Literal token
        form: String,
    },
}

impl Node {
    /// Creates a new phrase node.
    ///
    /// # Arguments
    /// * `index` - The unique index of this node in the tree (arena)
    /// * `label` - Phrase label
    /// * `children` - Child indices, left to right
    pub fn new_phrase(index: NodeIndex, label: String, children: Vec<NodeIndex>) -> Self {
        Node::Phrase {
            index,
            parent: NO_PARENT_SET,
            label,
            children,
        }
    }

    /// Creates a new word node.
    ///
    /// # Arguments
    /// * `index` - The unique index of this node in the tree (arena)
    /// * `category` - Word-category label
    /// * `form` - Token text
    pub fn new_word(index: NodeIndex, category: String, form: String) -> Self {
        Node::Word {
            index,
            parent: NO_PARENT_SET,
            category,
            form,
        }
    }

    /// Returns the index of this node.
    pub fn index(&self) -> NodeIndex {
        match self {
            Node::Phrase { index, .. } | Node::Word { index, .. } => *index,
        }
    }

    /// Returns the phrase label of a phrase node, or the category of a word node.
    pub fn label(&self) -> &str {
        match self {
            Node::Phrase { label, .. } => label,
            Node::Word { category, .. } => category,
        }
    }

    /// Returns the children of a phrase node, `None` for a word node.
    pub fn children(&self) -> Option<&[NodeIndex]> {
        match self {
            Node::Phrase { children, .. } => Some(children),
            Node::Word { .. } => None,
        }
    }

    /// Returns the token of a word node, `None` for a phrase node.
    pub fn form(&self) -> Option<&str> {
        match self {
            Node::Phrase { .. } => None,
            Node::Word { form, .. } => Some(form),
        }
    }

    /// Returns the index of the parent, or `None` if not set (root).
    pub fn parent(&self) -> Option<NodeIndex> {
        let parent = match self {
            Node::Phrase { parent, .. } | Node::Word { parent, .. } => *parent,
        };
        if parent == NO_PARENT_SET {
            None
        } else {
            Some(parent)
        }
    }

    /// Returns whether a parent is set.
    pub fn has_parent(&self) -> bool {
        self.parent().is_some()
    }

    /// Returns whether this is a phrase node.
    pub fn is_phrase(&self) -> bool {
        matches!(self, Node::Phrase { .. })
    }

    /// Returns whether this is a word node.
    pub fn is_word(&self) -> bool {
        matches!(self, Node::Word { .. })
    }

    pub(crate) fn set_label(&mut self, new_label: String) {
        match self {
            Node::Phrase { label, .. } => *label = new_label,
            Node::Word { category, .. } => *category = new_label,
        }
    }

    pub(crate) fn set_parent(&mut self, new_parent: NodeIndex) {
        match self {
            Node::Phrase { parent, .. } | Node::Word { parent, .. } => *parent = new_parent,
        }
    }
}
