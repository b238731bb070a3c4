//! The flat record unit of an encoded tree.

use serde::{Deserialize, Serialize};
use std::fmt;

// =#========================================================================#=
// RECORD
// =#========================================================================#=
/// One position of an encoded tree, i.e. one token.
///
/// - `height_delta` and `phrase_label` describe the fork between this token
///   and the next one: the depth change from the previous fork and the
///   label of the fork node. For the last token they hold the fixed values
///   `0` and the root label.
/// - `word_category_label` and `form` describe the token itself.
///
/// Serialized forms keep the field order
/// `height_delta, phrase_label, word_category_label, form`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    height_delta: i32,
    phrase_label: String,
    word_category_label: String,
    form: String,
}

impl Record {
    /// Creates a new record.
    ///
    /// # Example
    /// ```
    /// use grvtree::Record;
    ///
    /// let record = Record::new(2, "NP", "PRP", "My");
    /// assert_eq!(record.phrase_label(), "NP");
    /// ```
    pub fn new(
        height_delta: i32,
        phrase_label: impl Into<String>,
        word_category_label: impl Into<String>,
        form: impl Into<String>,
    ) -> Self {
        Self {
            height_delta,
            phrase_label: phrase_label.into(),
            word_category_label: word_category_label.into(),
            form: form.into(),
        }
    }

    /// Depth change from the previous fork to this position's fork.
    pub fn height_delta(&self) -> i32 {
        self.height_delta
    }

    /// Label of this position's fork node.
    pub fn phrase_label(&self) -> &str {
        &self.phrase_label
    }

    /// Label of the node directly dominating the token.
    pub fn word_category_label(&self) -> &str {
        &self.word_category_label
    }

    /// The token.
    pub fn form(&self) -> &str {
        &self.form
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.height_delta, self.phrase_label, self.word_category_label, self.form
        )
    }
}
