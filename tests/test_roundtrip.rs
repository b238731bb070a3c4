use grvtree::model::NodeIndex;
use grvtree::{ParseTree, Record, compare, decode, encode, sequence_equal};
use proptest::prelude::*;

// -----------------------------
// Helpers to generate trees
// -----------------------------
#[derive(Debug, Clone)]
enum Shape {
    Word(String, String),
    Phrase(String, Vec<Shape>),
}

fn gen_label() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["S", "NP", "VP", "PP", "IP-MAT", "NP-SBJ☆PRO", ""])
        .prop_map(str::to_string)
}

fn gen_form() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,6}",
        prop::sample::select(vec!["そこ", "は", "果物屋", "*T*", "、"]).prop_map(str::to_string),
    ]
}

fn gen_shape() -> impl Strategy<Value = Shape> {
    let word = (gen_label(), gen_form()).prop_map(|(category, form)| Shape::Word(category, form));
    // Phrases have at least two children, so the tree has no unary chains
    word.prop_recursive(5, 48, 4, |inner| {
        (gen_label(), prop::collection::vec(inner, 2..5))
            .prop_map(|(label, children)| Shape::Phrase(label, children))
    })
}

fn gen_tree() -> impl Strategy<Value = ParseTree> {
    gen_shape().prop_map(|shape| {
        // A single word still needs a phrase root
        let shape = match shape {
            Shape::Word(..) => Shape::Phrase("S".to_string(), vec![shape]),
            phrase => phrase,
        };
        let mut tree = ParseTree::new();
        let root = build(&mut tree, &shape);
        tree.set_root(root);
        tree
    })
}

fn build(tree: &mut ParseTree, shape: &Shape) -> NodeIndex {
    match shape {
        Shape::Word(category, form) => tree.add_word(category.as_str(), form.as_str()),
        Shape::Phrase(label, children) => {
            let children = children.iter().map(|child| build(tree, child)).collect();
            tree.add_phrase(label.as_str(), children)
        }
    }
}

fn gen_records() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(
        (-4..5i32, gen_label(), gen_label(), gen_form())
            .prop_map(|(delta, phrase, category, form)| Record::new(delta, phrase, category, form)),
        0..12,
    )
}

// -----------------------------
// Properties
// -----------------------------
proptest! {
    #[test]
    fn prop_round_trip(tree in gen_tree()) {
        prop_assert!(tree.is_valid());
        prop_assert!(!tree.has_unary_chains());

        let decoded = decode(&encode(&tree)).unwrap();
        prop_assert_eq!(decoded, Some(tree));
    }

    #[test]
    fn prop_one_record_per_word(tree in gen_tree()) {
        let records = encode(&tree);
        prop_assert_eq!(records.len(), tree.num_words());

        let forms: Vec<_> = records.iter().map(Record::form).collect();
        let words: Vec<_> = tree.words().filter_map(|node| node.form()).collect();
        prop_assert_eq!(forms, words);
    }

    #[test]
    fn prop_final_record_is_placeholder(tree in gen_tree()) {
        let records = encode(&tree);
        let last = records.last().unwrap();
        prop_assert_eq!(last.height_delta(), 0);
        prop_assert_eq!(Some(last.phrase_label()), tree.root_label());
    }

    #[test]
    fn prop_fork_depths_stay_in_range(tree in gen_tree()) {
        let records = encode(&tree);
        let max_depth = records.len() as i64 - 2;
        let mut depth = -1_i64;
        for record in &records[..records.len() - 1] {
            depth += i64::from(record.height_delta());
            prop_assert!((0..=max_depth).contains(&depth));
        }
    }

    #[test]
    fn prop_self_comparison_matches_everything(tree in gen_tree()) {
        let records = encode(&tree);
        let n = records.len();
        let counts = compare(&records, &records);

        prop_assert!(sequence_equal(&records, &records));
        prop_assert_eq!(counts.matched_form, n);
        prop_assert_eq!(counts.matched_word_category_label, n);
        prop_assert_eq!(counts.matched_phrase_label, n - 1);
        prop_assert_eq!(counts.matched_height_delta, n.saturating_sub(2));
        prop_assert_eq!(counts.first_height_delta_match, n > 1);
    }

    #[test]
    fn prop_decode_arbitrary_records(records in gen_records()) {
        match decode(&records) {
            Ok(None) => prop_assert!(records.is_empty()),
            Ok(Some(tree)) => {
                prop_assert!(tree.is_valid());
                prop_assert_eq!(tree.num_words(), records.len());
            }
            Err(_) => prop_assert!(records.len() > 1),
        }
    }
}
