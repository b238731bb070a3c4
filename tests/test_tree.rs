use grvtree::model::{Node, ParseTree};
use grvtree::parse_bracketed_str;

#[test]
fn test_building_tree() {
    let mut tree = ParseTree::with_capacity(5);
    let index_my = tree.add_word("PRP", "My");
    let index_daughter = tree.add_word("NN", "daughter");
    let index_np = tree.add_phrase("NP", vec![index_my, index_daughter]);
    let index_slept = tree.add_word("VBD", "slept");
    let index_root = tree.add_phrase("S", vec![index_np, index_slept]);
    assert!(!tree.is_root_set());
    tree.set_root(index_root);

    // Counts
    assert_eq!(tree.num_words(), 3);
    assert_eq!(tree.num_phrases(), 2);
    assert_eq!(tree.num_nodes(), 5);
    assert!(tree.is_valid());

    // Root
    assert!(tree.is_root_set());
    assert_eq!(tree.root_index(), index_root);
    assert_eq!(tree.root().index(), index_root);
    assert_eq!(tree.root_label(), Some("S"));
    assert!(!tree.root().has_parent());

    // Word
    let daughter = &tree[index_daughter];
    assert!(daughter.is_word());
    assert_eq!(daughter.index(), index_daughter);
    assert_eq!(daughter.label(), "NN");
    assert_eq!(daughter.form(), Some("daughter"));
    assert_eq!(daughter.children(), None);
    assert_eq!(daughter.parent(), Some(index_np));

    // Phrase
    let np = tree.node(index_np);
    assert!(np.is_phrase());
    assert_eq!(np.form(), None);
    assert_eq!(np.children(), Some(&[index_my, index_daughter][..]));
    assert_eq!(np.parent(), Some(index_root));
    assert_eq!(tree.label_of(index_np), "NP");
}

#[test]
fn test_depth() {
    let mut tree = ParseTree::new();
    let a = tree.add_word("A", "a");
    let b = tree.add_word("B", "b");
    let inner = tree.add_phrase("X", vec![a, b]);
    let c = tree.add_word("C", "c");
    let root = tree.add_phrase("S", vec![inner, c]);
    tree.set_root(root);

    assert_eq!(tree.depth_of(root), 0);
    assert_eq!(tree.depth_of(inner), 1);
    assert_eq!(tree.depth_of(c), 1);
    assert_eq!(tree.depth_of(a), 2);
}

#[test]
#[should_panic]
fn test_get_root_panics_on_empty_tree() {
    let tree = ParseTree::new();
    tree.root();
}

#[test]
fn test_empty_tree() {
    let tree = ParseTree::default();
    assert!(!tree.is_root_set());
    assert_eq!(tree.root_label(), None);
    assert!(!tree.is_valid());
    assert_eq!(tree.pre_order_iter().count(), 0);
    assert_eq!(tree.post_order_iter().count(), 0);
    assert_eq!(tree.to_string(), "");
    assert_eq!(tree, ParseTree::new());
}

#[test]
fn test_is_valid_detects_stray_nodes() {
    let mut tree = ParseTree::new();
    let a = tree.add_word("A", "a");
    let b = tree.add_word("B", "b");
    let _stray = tree.add_word("C", "c");
    let root = tree.add_phrase("S", vec![a, b]);
    tree.set_root(root);
    assert!(!tree.is_valid());
}

#[test]
fn test_is_valid_detects_phrase_without_children() {
    let mut tree = ParseTree::new();
    let a = tree.add_word("A", "a");
    let empty = tree.add_phrase("X", vec![]);
    let root = tree.add_phrase("S", vec![a, empty]);
    tree.set_root(root);
    assert!(!tree.is_valid());
}

#[test]
fn test_is_valid_detects_root_with_parent() {
    let mut tree = ParseTree::new();
    let a = tree.add_word("A", "a");
    let b = tree.add_word("B", "b");
    let np = tree.add_phrase("NP", vec![a, b]);
    let root = tree.add_phrase("S", vec![np]);
    tree.set_root(np);
    assert!(!tree.is_valid());

    tree.set_root(root);
    assert!(tree.is_valid());
}

#[test]
fn test_equality_ignores_arena_layout() {
    // Same tree, built in a different order
    let mut left_first = ParseTree::new();
    let a = left_first.add_word("A", "a");
    let b = left_first.add_word("B", "b");
    let x = left_first.add_phrase("X", vec![a, b]);
    let c = left_first.add_word("C", "c");
    let root = left_first.add_phrase("S", vec![x, c]);
    left_first.set_root(root);

    let mut right_first = ParseTree::new();
    let c = right_first.add_word("C", "c");
    let b = right_first.add_word("B", "b");
    let a = right_first.add_word("A", "a");
    let x = right_first.add_phrase("X", vec![a, b]);
    let root = right_first.add_phrase("S", vec![x, c]);
    right_first.set_root(root);

    assert_eq!(left_first, right_first);
    assert_eq!(left_first, parse_bracketed_str("(S (X (A a) (B b)) (C c))").unwrap());
}

#[test]
fn test_inequality() {
    let tree = parse_bracketed_str("(S (X (A a) (B b)) (C c))").unwrap();
    for other in [
        "(S (X (A a) (B b)) (C d))",
        "(S (X (A a) (B b)) (D c))",
        "(S (Y (A a) (B b)) (C c))",
        "(S (A a) (B b) (C c))",
        "(S (C c) (X (A a) (B b)))",
        "(S (X (A a) (B b)) (X (C c) (D d)))",
    ] {
        assert_ne!(tree, parse_bracketed_str(other).unwrap(), "{other}");
    }
    assert_ne!(tree, ParseTree::new());
}

#[test]
fn test_has_unary_chains() {
    let cases = [
        ("(S (NP (PRO it)) (VB rains))", true),
        ("(ROOT (S (A a) (B b)))", true),
        ("(S (A a) (B b))", false),
        ("(S (NN x))", false),
        ("(NN x)", false),
    ];
    for (input, expected) in cases {
        let tree = parse_bracketed_str(input).unwrap();
        assert_eq!(tree.has_unary_chains(), expected, "{input}");
    }
}

#[test]
fn test_iterators() {
    let tree = parse_bracketed_str("(S (X (A a) (B b)) (C c))").unwrap();

    let pre: Vec<_> = tree.pre_order_iter().map(Node::label).collect();
    assert_eq!(pre, ["S", "X", "A", "B", "C"]);

    let post: Vec<_> = tree.post_order_iter().map(Node::label).collect();
    assert_eq!(post, ["A", "B", "X", "C", "S"]);

    let words: Vec<_> = tree.words().filter_map(Node::form).collect();
    assert_eq!(words, ["a", "b", "c"]);
}

#[test]
fn test_display() {
    let tree = parse_bracketed_str("(S  (X (A a)\n (B b))\t(C c) )").unwrap();
    assert_eq!(tree.to_string(), "(S (X (A a) (B b)) (C c))");
}
