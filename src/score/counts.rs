//! Match counts of one comparison and the precisions derived from them.

use serde::{Deserialize, Serialize};

/// How a precision is normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecisionMode {
    /// Over the positions both sequences share and that can match at all.
    Relative,
    /// Over the meaningful positions of the reference, whatever the
    /// candidate's length.
    Absolute,
}

/// Result of [compare](crate::score::compare): per-field match counts of a
/// candidate sequence against a reference sequence.
///
/// See [compare](crate::score::compare) for which positions each count covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreCounts {
    /// Length of the reference sequence
    pub length_reference: usize,
    /// Length of the candidate sequence
    pub length_candidate: usize,
    /// Whether `height_delta` agrees at position 0 (never set if 0 is the placeholder)
    pub first_height_delta_match: bool,
    /// Agreeing `height_delta`s strictly between position 0 and the placeholder
    pub matched_height_delta: usize,
    /// Agreeing `phrase_label`s before the placeholder
    pub matched_phrase_label: usize,
    /// Agreeing `word_category_label`s over all common positions
    pub matched_word_category_label: usize,
    /// Agreeing `form`s over all common positions
    pub matched_form: usize,
}

impl ScoreCounts {
    /// Number of positions both sequences share.
    pub fn overlap(&self) -> usize {
        self.length_reference.min(self.length_candidate)
    }

    fn both_empty(&self) -> bool {
        self.length_reference == 0 && self.length_candidate == 0
    }

    /// Precision of `height_delta`.
    ///
    /// * Relative: `matched_height_delta / (m - 2)`, the interior common
    ///   positions; 1 if both sequences are empty, 0 if there is no interior
    ///   position.
    /// * Absolute: `(matched_height_delta + first match) / (length_reference - 1)`;
    ///   1 if the reference has no position besides the placeholder.
    ///
    /// # Example
    /// ```
    /// use grvtree::score::{PrecisionMode, ScoreCounts};
    ///
    /// let counts = ScoreCounts {
    ///     length_reference: 3,
    ///     length_candidate: 3,
    ///     matched_height_delta: 1,
    ///     ..ScoreCounts::default()
    /// };
    /// assert_eq!(counts.precision_height_delta(PrecisionMode::Relative), 1.0);
    /// assert_eq!(counts.precision_height_delta(PrecisionMode::Absolute), 0.5);
    /// ```
    pub fn precision_height_delta(&self, mode: PrecisionMode) -> f64 {
        match mode {
            PrecisionMode::Relative => {
                if self.both_empty() {
                    return 1.0;
                }
                match self.overlap().checked_sub(2) {
                    Some(interior) if interior > 0 => {
                        self.matched_height_delta as f64 / interior as f64
                    }
                    _ => 0.0,
                }
            }
            PrecisionMode::Absolute => {
                let matched = self.matched_height_delta + usize::from(self.first_height_delta_match);
                ratio_or_one(matched, self.length_reference.saturating_sub(1))
            }
        }
    }

    /// Precision of `phrase_label`, excluding the placeholder position like
    /// [compare](crate::score::compare) does.
    ///
    /// * Relative: `matched_phrase_label / (m - 1)`; 1 if both sequences are
    ///   empty, 0 if there is no common position besides the placeholder.
    /// * Absolute: `matched_phrase_label / (length_reference - 1)`; 1 if the
    ///   reference has no position besides the placeholder.
    pub fn precision_phrase_label(&self, mode: PrecisionMode) -> f64 {
        match mode {
            PrecisionMode::Relative => {
                if self.both_empty() {
                    return 1.0;
                }
                match self.overlap().checked_sub(1) {
                    Some(positions) if positions > 0 => {
                        self.matched_phrase_label as f64 / positions as f64
                    }
                    _ => 0.0,
                }
            }
            PrecisionMode::Absolute => ratio_or_one(
                self.matched_phrase_label,
                self.length_reference.saturating_sub(1),
            ),
        }
    }

    /// Precision of `word_category_label` over all positions.
    pub fn precision_word_category_label(&self, mode: PrecisionMode) -> f64 {
        self.full_range_precision(self.matched_word_category_label, mode)
    }

    /// Precision of `form` over all positions.
    pub fn precision_form(&self, mode: PrecisionMode) -> f64 {
        self.full_range_precision(self.matched_form, mode)
    }

    /// Relative: `matched / m` (1 if both empty, 0 if `m == 0`).
    /// Absolute: `matched / length_reference` (1 if the reference is empty).
    fn full_range_precision(&self, matched: usize, mode: PrecisionMode) -> f64 {
        match mode {
            PrecisionMode::Relative => {
                if self.both_empty() {
                    1.0
                } else if self.overlap() == 0 {
                    0.0
                } else {
                    matched as f64 / self.overlap() as f64
                }
            }
            PrecisionMode::Absolute => ratio_or_one(matched, self.length_reference),
        }
    }
}

/// `matched / total`, or 1 when there is nothing to match.
fn ratio_or_one(matched: usize, total: usize) -> f64 {
    if total == 0 {
        1.0
    } else {
        matched as f64 / total as f64
    }
}
