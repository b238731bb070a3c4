//! Trees and their encodings shared by the integration tests.
#![allow(dead_code)]

use grvtree::Record;

pub const SEPARATOR: &str = "☆";

pub const DAUGHTER_TREE: &str = "(S (NP (PRP My) (NN daughter)) (VP (VBD broke) (NP (NP (DET the) (JJ red) (NN toy)) (PP (IN with) (NP (DET a) (NN hammer))))))";

pub const ARIGATOU_TREE: &str = "(IP-MAT (ADJI ありがとう) (VB2 ござい) (AX ます))";

// 54_aozora_Kajii-1925;JP
pub const KAJII_TREE: &str = "
(IP-MAT (NP-SBJ *speaker*)
        (PP (IP-ADV (PP (NP (PRO そこ))
                        (P は))
                    (NP-SBJ *)
                    (ADVP (ADV 決して))
                    (NP-PRD (IP-REL (NP-SBJ *T*)
                                    (ADJN 立派)
                                    (AX な))
                            (N 店))
                    (AX で)
                    (P は)
                    (NEG なかっ)
                    (AXD た)
                    (FN の)
                    (AX だ))
            (P が))
        (CONJ *)
        (PU 、)
        (PP (NP (PP (NP (N 果物屋)
                        (N 固有))
                    (P の))
                (N 美しさ))
            (P が))
        (NP-OB1 *が*)
        (ADVP (ADV 最も)
            (ADJN 露骨)
            (AX に))
        (VB 感ぜ)
        (VB2 られ)
        (AXD た)
        (PU 。))
";

pub fn records(rows: &[(i32, &str, &str, &str)]) -> Vec<Record> {
    rows.iter()
        .map(|&(delta, phrase, category, form)| Record::new(delta, phrase, category, form))
        .collect()
}

pub fn daughter_records() -> Vec<Record> {
    records(&[
        (2, "NP", "PRP", "My"),
        (-1, "S", "NN", "daughter"),
        (1, "VP", "VBD", "broke"),
        (2, "NP", "DET", "the"),
        (0, "NP", "JJ", "red"),
        (-1, "NP", "NN", "toy"),
        (1, "PP", "IN", "with"),
        (1, "NP", "DET", "a"),
        (0, "S", "NN", "hammer"),
    ])
}

pub fn arigatou_records() -> Vec<Record> {
    records(&[
        (1, "IP-MAT", "ADJI", "ありがとう"),
        (0, "IP-MAT", "VB2", "ござい"),
        (0, "IP-MAT", "AX", "ます"),
    ])
}

pub fn kajii_records() -> Vec<Record> {
    records(&[
        (1, "IP-MAT", "NP-SBJ", "*speaker*"),
        (3, "PP", "NP☆PRO", "そこ"),
        (-1, "IP-ADV", "P", "は"),
        (0, "IP-ADV", "NP-SBJ", "*"),
        (0, "IP-ADV", "ADVP☆ADV", "決して"),
        (2, "IP-REL", "NP-SBJ", "*T*"),
        (0, "IP-REL", "ADJN", "立派"),
        (-1, "NP-PRD", "AX", "な"),
        (-1, "IP-ADV", "N", "店"),
        (0, "IP-ADV", "AX", "で"),
        (0, "IP-ADV", "P", "は"),
        (0, "IP-ADV", "NEG", "なかっ"),
        (0, "IP-ADV", "AXD", "た"),
        (0, "IP-ADV", "FN", "の"),
        (-1, "PP", "AX", "だ"),
        (-1, "IP-MAT", "P", "が"),
        (0, "IP-MAT", "CONJ", "*"),
        (0, "IP-MAT", "PU", "、"),
        (4, "NP", "N", "果物屋"),
        (-1, "PP", "N", "固有"),
        (-1, "NP", "P", "の"),
        (-1, "PP", "N", "美しさ"),
        (-1, "IP-MAT", "P", "が"),
        (0, "IP-MAT", "NP-OB1", "*が*"),
        (1, "ADVP", "ADV", "最も"),
        (0, "ADVP", "ADJN", "露骨"),
        (-1, "IP-MAT", "AX", "に"),
        (0, "IP-MAT", "VB", "感ぜ"),
        (0, "IP-MAT", "VB2", "られ"),
        (0, "IP-MAT", "AXD", "た"),
        (0, "IP-MAT", "PU", "。"),
    ])
}

/// Each tree with its expected encoding.
pub fn trees_with_records() -> Vec<(&'static str, Vec<Record>)> {
    vec![
        (DAUGHTER_TREE, daughter_records()),
        (ARIGATOU_TREE, arigatou_records()),
        (KAJII_TREE, kajii_records()),
    ]
}
