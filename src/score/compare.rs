//! Position-wise comparison of two record sequences.

use crate::codec::Record;
use crate::score::counts::ScoreCounts;

/// Returns whether two sequences describe the same token stream:
/// equal length, and equal `word_category_label` and `form` at every
/// position. `height_delta` and `phrase_label` are ignored.
///
/// # Example
/// ```
/// use grvtree::{Record, sequence_equal};
///
/// let gold = [Record::new(1, "S", "NN", "rain"), Record::new(0, "S", "VB", "falls")];
/// let predicted = [Record::new(7, "X", "NN", "rain"), Record::new(3, "Y", "VB", "falls")];
/// assert!(sequence_equal(&gold, &predicted));
/// ```
pub fn sequence_equal(a: &[Record], b: &[Record]) -> bool {
    a.len() == b.len()
        && a.iter().zip(b).all(|(x, y)| {
            x.word_category_label() == y.word_category_label() && x.form() == y.form()
        })
}

/// Returns whether `index` is the placeholder position of a comparison over
/// `overlap` common positions, i.e. the last one.
///
/// Its `height_delta` and `phrase_label` carry fixed values instead of a
/// relation to a next token and are not compared.
pub fn is_placeholder_position(index: usize, overlap: usize) -> bool {
    index + 1 == overlap
}

/// Compares a `candidate` sequence against a `reference` sequence over
/// their common positions `0..m`, `m` being the shorter length.
///
/// | Field | Positions counted |
/// |-------|-------------------|
/// | `height_delta` at position 0 | `first_height_delta_match`, unless 0 is the placeholder |
/// | `height_delta` | strictly between 0 and the placeholder |
/// | `phrase_label` | from 0 up to, excluding, the placeholder |
/// | `word_category_label`, `form` | all common positions |
///
/// # Example
/// ```
/// use grvtree::{Record, compare};
///
/// let gold = [Record::new(1, "S", "NN", "rain"), Record::new(0, "S", "VB", "falls")];
/// let predicted = [Record::new(1, "S", "NN", "rain"), Record::new(5, "X", "VBZ", "falls")];
///
/// let counts = compare(&gold, &predicted);
/// assert!(counts.first_height_delta_match);
/// assert_eq!(counts.matched_phrase_label, 1);
/// assert_eq!(counts.matched_word_category_label, 1);
/// assert_eq!(counts.matched_form, 2);
/// ```
pub fn compare(reference: &[Record], candidate: &[Record]) -> ScoreCounts {
    let mut counts = ScoreCounts {
        length_reference: reference.len(),
        length_candidate: candidate.len(),
        ..ScoreCounts::default()
    };
    let overlap = counts.overlap();

    for (index, (gold, predicted)) in reference.iter().zip(candidate).enumerate() {
        if gold.word_category_label() == predicted.word_category_label() {
            counts.matched_word_category_label += 1;
        }
        if gold.form() == predicted.form() {
            counts.matched_form += 1;
        }

        if is_placeholder_position(index, overlap) {
            continue;
        }

        if gold.phrase_label() == predicted.phrase_label() {
            counts.matched_phrase_label += 1;
        }
        let height_delta_match = gold.height_delta() == predicted.height_delta();
        if index == 0 {
            counts.first_height_delta_match = height_delta_match;
        } else if height_delta_match {
            counts.matched_height_delta += 1;
        }
    }

    counts
}
