//! Bracketed notation writing for constituency trees.

use crate::bracket::defs::{INDENT, NODE_OVERHEAD_CHARS};
use crate::model::{Node, NodeIndex, ParseTree};
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Style for serializing a tree to bracketed notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketStyle {
    /// Whole tree on a single line: `(S (NP (NN x)) (VB y))`
    Compact,
    /// Each phrase child on its own line, indented by depth
    Indented,
}

/// Writes given list of trees to a file in bracketed notation,
/// one tree per line for [BracketStyle::Compact], separated by newlines otherwise.
///
/// # Errors
/// Returns an I/O error if writing fails.
pub fn write_bracketed_file(file: File, trees: &[ParseTree], style: BracketStyle) -> io::Result<()> {
    let mut writer = BufWriter::new(file);
    for tree in trees {
        writer.write_all(to_bracketed(tree, style).as_bytes())?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}

/// Returns the bracketed representation of this tree.
///
/// Labels and tokens are written verbatim; tokens containing whitespace or
/// parentheses cannot be read back. Returns an empty string for a tree
/// without root.
///
/// # Example
/// ```
/// use grvtree::bracket::{BracketStyle, to_bracketed};
/// use grvtree::parse_bracketed_str;
///
/// let tree = parse_bracketed_str("(S (NP (DET the) (NN toy)) (VBD broke))").unwrap();
/// assert_eq!(
///     to_bracketed(&tree, BracketStyle::Indented),
///     "(S\n  (NP\n    (DET the)\n    (NN toy))\n  (VBD broke))"
/// );
/// ```
pub fn to_bracketed(tree: &ParseTree, style: BracketStyle) -> String {
    // Recursive helper for building the bracketed string
    fn build(tree: &ParseTree, out: &mut String, index: NodeIndex, depth: usize, style: BracketStyle) {
        match &tree[index] {
            Node::Word { category, form, .. } => {
                out.push('(');
                out.push_str(category);
                out.push(' ');
                out.push_str(form);
                out.push(')');
            }
            Node::Phrase { label, children, .. } => {
                out.push('(');
                out.push_str(label);
                for &child in children {
                    match style {
                        BracketStyle::Compact => out.push(' '),
                        BracketStyle::Indented => {
                            out.push('\n');
                            for _ in 0..=depth {
                                out.push_str(INDENT);
                            }
                        }
                    }
                    build(tree, out, child, depth + 1, style);
                }
                out.push(')');
            }
        }
    }

    if !tree.is_root_set() {
        return String::new();
    }

    let mut out = String::with_capacity(estimate_bracketed_len(tree));
    build(tree, &mut out, tree.root_index(), 0, style);
    out
}

/// Estimates the length of the compact bracketed string of a tree,
/// used to pre-allocate string capacity.
fn estimate_bracketed_len(tree: &ParseTree) -> usize {
    tree.pre_order_iter()
        .map(|node| node.label().len() + node.form().map_or(0, str::len) + NODE_OVERHEAD_CHARS)
        .sum()
}
