//! Tree to record sequence.

use crate::codec::record::Record;
use crate::model::{Node, NodeIndex, ParseTree};
use log::trace;

/// Depth of the virtual fork above the root, before the first token.
pub(crate) const PRE_ROOT_DEPTH: i64 = -1;

/// Encodes a tree as one [Record] per token, in left-to-right order.
///
/// For each token but the last, the fork (lowest common ancestor) with the
/// next token provides the `phrase_label`, and its depth relative to the
/// previous fork the `height_delta`; the first token measures from depth
/// `-1`. The last token gets `height_delta` 0 and the root label.
///
/// The tree is expected to contain no unary chains (see
/// [collapse_unary_chains](crate::model::collapse_unary_chains)); otherwise
/// the output is lossy. A tree without root encodes to an empty sequence.
///
/// # Example
/// ```
/// use grvtree::{Record, encode, parse_bracketed_str};
///
/// let tree = parse_bracketed_str("(S (NP (PRP My) (NN daughter)) (VBD slept))").unwrap();
/// assert_eq!(
///     encode(&tree),
///     vec![
///         Record::new(2, "NP", "PRP", "My"),
///         Record::new(-1, "S", "NN", "daughter"),
///         Record::new(0, "S", "VBD", "slept"),
///     ]
/// );
/// ```
pub fn encode(tree: &ParseTree) -> Vec<Record> {
    let Some(root_label) = tree.root_label() else {
        return Vec::new();
    };

    let (words, forks) = collect_words_and_forks(tree);
    trace!("Encoding {} words over {} forks", words.len(), forks.len());

    let mut records = Vec::with_capacity(words.len());
    let mut previous_depth = PRE_ROOT_DEPTH;
    for (position, &word) in words.iter().enumerate() {
        let (height_delta, phrase_label) = match forks.get(position) {
            Some(&(depth, fork)) => {
                let delta = depth - previous_depth;
                previous_depth = depth;
                (delta as i32, tree.label_of(fork))
            }
            None => (0, root_label),
        };
        let node = &tree[word];
        records.push(Record::new(
            height_delta,
            phrase_label,
            node.label(),
            node.form().unwrap_or_default(),
        ));
    }

    records
}

/// Walks the tree left to right and returns the word nodes together with
/// the forks between consecutive words, as `(depth, fork)`.
///
/// The fork between the last word of one child and the first word of the
/// next child is their parent, so `forks[i]` belongs to `words[i]` and
/// there is one fork less than words.
fn collect_words_and_forks(tree: &ParseTree) -> (Vec<NodeIndex>, Vec<(i64, NodeIndex)>) {
    let mut words = Vec::new();
    let mut forks = Vec::new();

    // (node, depth, next child to visit)
    let mut stack = vec![(tree.root_index(), 0_i64, 0_usize)];
    while let Some(frame) = stack.last_mut() {
        let (index, depth, next_child) = *frame;
        match &tree[index] {
            Node::Word { .. } => {
                words.push(index);
                stack.pop();
            }
            Node::Phrase { children, .. } => {
                if next_child == children.len() {
                    stack.pop();
                    continue;
                }
                if next_child > 0 {
                    forks.push((depth, index));
                }
                frame.2 += 1;
                stack.push((children[next_child], depth + 1, 0));
            }
        }
    }

    (words, forks)
}
