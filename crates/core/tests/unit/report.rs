//! # Report Tests
//!
//! The text layout echoes the parameters, lists the index bits as offsets from the
//! least significant bit, then one verdict per reference.

use pretty_assertions::assert_eq;

use crate::common::{params, trace};

const EXPECTED: &str = "\
Address bits: 4
Cache sets: 2
Associativity: 1
Block size: 2

Indexing bit count: 1
Indexing bits: 2
Offset bit count: 1

.benchmark test
0000 miss
0000 hit
1100 miss
0001 hit
.end

Total cache miss count: 2
";

#[test]
fn text_report_layout() {
    let t = trace(&["0000", "0000", "1100", "0001"]);
    let report = idxsim_core::run(&params(4, 2, 2, 1), &t).unwrap();
    assert_eq!(report.to_string(), EXPECTED);
}

#[test]
fn empty_index_list_leaves_line_bare() {
    let t = trace(&["01", "10"]);
    let report = idxsim_core::run(&params(2, 1, 1, 2), &t).unwrap();
    let text = report.to_string();
    assert!(text.contains("Indexing bit count: 0\nIndexing bits:\nOffset bit count: 0\n"), "{text}");
}

#[test]
fn multiple_index_bits_follow_selection_order() {
    let t = trace(&["000", "001", "100", "101"]);
    let report = idxsim_core::run(&params(3, 1, 4, 1), &t).unwrap();
    // Positions [2, 0] become offsets [0, 2].
    assert!(report.to_string().contains("Indexing bits: 0 2\n"));
}

#[test]
fn json_report_carries_the_same_data() {
    let t = trace(&["0000", "0000", "1100", "0001"]);
    let report = idxsim_core::run(&params(4, 2, 2, 1), &t).unwrap();
    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert_eq!(json["params"]["Cache_sets"], 2);
    assert_eq!(json["index_bits"], serde_json::json!([2]));
    assert_eq!(json["benchmark"], "test");
    assert_eq!(json["miss_count"], 2);
    assert_eq!(json["outcomes"][1]["address"], "0000");
    assert_eq!(json["outcomes"][1]["access"], "hit");
    assert_eq!(json["stats"]["references"], 4);
}
