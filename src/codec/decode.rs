//! Record sequence to tree.
//!
//! Decoding replays the height deltas as a stack of open phrases: a
//! positive delta opens phrases down to the new fork, a negative one lets
//! the next token close phrases back up to it. Every token is attached to
//! the deepest open phrase.

use crate::codec::encode::PRE_ROOT_DEPTH;
use crate::codec::error::StructuralDecodeError;
use crate::codec::record::Record;
use crate::model::{NodeIndex, ParseTree};
use log::{debug, trace};

/// Decodes a record sequence into a tree.
///
/// Inverse of [encode](crate::codec::encode): for every tree without unary
/// chains, `decode(&encode(&tree))` yields a tree equal to `tree`.
///
/// Labels of phrases come from the records forking at them. A phrase that
/// no record forks at (only possible for sequences not produced by
/// `encode`) takes the label of the record that opened it; the root takes
/// the last record's `phrase_label`. The last record's `height_delta` is
/// not used.
///
/// # Returns
/// * `Ok(None)` - For an empty sequence
/// * `Ok(Some(ParseTree))` - The reconstructed tree
/// * `Err(StructuralDecodeError)` - If the deltas leave the range of
///   depths a tree with this many tokens can have
///
/// # Example
/// ```
/// use grvtree::{Record, decode};
///
/// let records = [
///     Record::new(1, "IP-MAT", "ADJI", "ありがとう"),
///     Record::new(0, "IP-MAT", "VB2", "ござい"),
///     Record::new(0, "IP-MAT", "AX", "ます"),
/// ];
/// let tree = decode(&records).unwrap().unwrap();
/// assert_eq!(tree.to_string(), "(IP-MAT (ADJI ありがとう) (VB2 ござい) (AX ます))");
/// ```
pub fn decode(records: &[Record]) -> Result<Option<ParseTree>, StructuralDecodeError> {
    let Some((last, body)) = records.split_last() else {
        return Ok(None);
    };

    // n tokens without unary chains have at most n - 1 phrases in a chain
    let max_depth = records.len() as i64 - 2;
    let mut replay = Replay::new(records.len(), last.phrase_label());

    for (position, record) in body.iter().enumerate() {
        let depth = replay.depth + i64::from(record.height_delta());
        if depth < 0 {
            return Err(StructuralDecodeError::NegativeDepth { position, depth });
        }
        if depth > max_depth {
            return Err(StructuralDecodeError::DepthExceedsLength {
                position,
                depth,
                max: max_depth,
            });
        }
        trace!("Record {position}: fork '{}' at depth {depth}", record.phrase_label());
        replay.step(record, depth as usize);
    }

    replay.close_below(replay.depth);
    replay.attach_word(last);
    Ok(Some(replay.finish()))
}

// =#========================================================================#=
// REPLAY STATE
// =#========================================================================#=
/// A phrase whose children are still being collected.
struct OpenPhrase {
    label: Option<String>,
    /// Label used if no record ever forks at this phrase
    fallback: String,
    children: Vec<NodeIndex>,
}

impl OpenPhrase {
    fn new(fallback: &str) -> Self {
        Self {
            label: None,
            fallback: fallback.to_string(),
            children: Vec::new(),
        }
    }

    /// Sets the label from a record forking here; the first fork wins.
    fn assign_label(&mut self, label: &str) {
        match &self.label {
            None => self.label = Some(label.to_string()),
            Some(existing) if existing != label => {
                debug!("Keeping phrase label '{existing}', ignoring conflicting '{label}'");
            }
            Some(_) => {}
        }
    }

    fn close(self, tree: &mut ParseTree) -> NodeIndex {
        let label = self.label.unwrap_or_else(|| {
            debug!("No record forks at phrase, using label '{}'", self.fallback);
            self.fallback
        });
        tree.add_phrase(label, self.children)
    }
}

/// Stack discipline of open phrases: `root` is at depth 0 and
/// `open[d - 1]` at depth `d`.
struct Replay {
    tree: ParseTree,
    root: OpenPhrase,
    open: Vec<OpenPhrase>,
    /// Depth of the previous fork
    depth: i64,
}

impl Replay {
    fn new(num_records: usize, root_fallback: &str) -> Self {
        Self {
            tree: ParseTree::with_capacity(2 * num_records),
            root: OpenPhrase::new(root_fallback),
            open: Vec::new(),
            depth: PRE_ROOT_DEPTH,
        }
    }

    /// Processes a non-final record forking at `depth`.
    fn step(&mut self, record: &Record, depth: usize) {
        // The previous token hangs below the previous fork, close what lies below it
        self.close_below(self.depth);
        while self.open.len() < depth {
            self.open.push(OpenPhrase::new(record.phrase_label()));
        }
        self.attach_word(record);
        self.phrase_at(depth).assign_label(record.phrase_label());
        self.depth = depth as i64;
    }

    /// Closes all open phrases deeper than `depth`.
    fn close_below(&mut self, depth: i64) {
        let keep = usize::try_from(depth).unwrap_or(0);
        while self.open.len() > keep {
            if let Some(phrase) = self.open.pop() {
                let index = phrase.close(&mut self.tree);
                self.deepest().children.push(index);
            }
        }
    }

    fn attach_word(&mut self, record: &Record) {
        let index = self
            .tree
            .add_word(record.word_category_label(), record.form());
        self.deepest().children.push(index);
    }

    fn deepest(&mut self) -> &mut OpenPhrase {
        self.open.last_mut().unwrap_or(&mut self.root)
    }

    fn phrase_at(&mut self, depth: usize) -> &mut OpenPhrase {
        match depth.checked_sub(1) {
            Some(below_root) => &mut self.open[below_root],
            None => &mut self.root,
        }
    }

    fn finish(mut self) -> ParseTree {
        self.close_below(0);
        let Replay { mut tree, root, .. } = self;
        let root_index = root.close(&mut tree);
        tree.set_root(root_index);
        tree
    }
}
