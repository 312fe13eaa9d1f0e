//! # Loader Tests
//!
//! Parameter files are `Key: value` pairs; trace files are `.benchmark <name>`,
//! addresses, `.end`.

use std::io::Write;

use idxsim_core::common::Error;
use idxsim_core::sim::loader::{
    load_params, load_trace, parse_params, parse_params_json, parse_trace,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::{addrs, params};

const PARAMS: &str = "Address_bits: 8\nBlock_size: 4\nCache_sets: 8\nAssociativity: 2\n";

#[test]
fn parses_canonical_params() {
    assert_eq!(parse_params(PARAMS).unwrap(), params(8, 4, 8, 2));
}

#[test]
fn key_order_and_colon_are_flexible() {
    let text = "Associativity 1 Cache_sets: 2\nBlock_size: 1 Address_bits 3";
    assert_eq!(parse_params(text).unwrap(), params(3, 1, 2, 1));
}

#[test]
fn later_value_overrides_earlier() {
    let text = format!("{PARAMS}Associativity: 4\n");
    assert_eq!(parse_params(&text).unwrap().associativity, 4);
}

#[test]
fn unknown_keys_are_ignored() {
    let text = format!("Replacement: 1\n{PARAMS}");
    assert_eq!(parse_params(&text).unwrap(), params(8, 4, 8, 2));
}

#[rstest]
#[case("Block_size: 4\nCache_sets: 8\nAssociativity: 2", "Address_bits")]
#[case("Address_bits: 8\nCache_sets: 8\nAssociativity: 2", "Block_size")]
#[case("Address_bits: 8\nBlock_size: 4\nAssociativity: 2", "Cache_sets")]
#[case("Address_bits: 8\nBlock_size: 4\nCache_sets: 8", "Associativity")]
fn missing_key_is_reported(#[case] text: &str, #[case] key: &str) {
    match parse_params(text) {
        Err(Error::MissingParam(missing)) => assert_eq!(missing, key),
        other => panic!("expected MissingParam, got {other:?}"),
    }
}

#[rstest]
#[case("Address_bits: eight")]
#[case("Address_bits: -8")]
#[case("Address_bits:")]
fn bad_value_is_reported(#[case] text: &str) {
    assert!(matches!(
        parse_params(text),
        Err(Error::InvalidParam { .. })
    ));
}

#[test]
fn parses_json_params() {
    let json = r#"{"Address_bits": 8, "Block_size": 4, "Cache_sets": 8, "Associativity": 2}"#;
    assert_eq!(parse_params_json(json).unwrap(), params(8, 4, 8, 2));
    assert!(matches!(parse_params_json("{"), Err(Error::Json(_))));
}

#[test]
fn parses_trace() {
    let text = ".benchmark loop\n0101\n0101\n1100\n.end\n";
    let trace = parse_trace(text, 4).unwrap();
    assert_eq!(trace.benchmark(), "loop");
    assert_eq!(trace.references(), addrs(&["0101", "0101", "1100"]).as_slice());
    assert_eq!(trace.distinct().len(), 2);
}

#[test]
fn tokens_after_end_are_ignored() {
    let text = ".benchmark t 01 .end 11 10";
    assert_eq!(parse_trace(text, 2).unwrap().len(), 1);
}

#[rstest]
#[case("")]
#[case("0101 .end")]
#[case(".benchmark")]
fn missing_benchmark_is_rejected(#[case] text: &str) {
    assert!(matches!(parse_trace(text, 4), Err(Error::MissingBenchmark)));
}

#[test]
fn missing_end_is_rejected() {
    assert!(matches!(
        parse_trace(".benchmark t 0101 0110", 4),
        Err(Error::MissingEnd)
    ));
}

#[test]
fn empty_trace_is_rejected() {
    assert!(matches!(
        parse_trace(".benchmark t .end", 4),
        Err(Error::EmptyTrace)
    ));
}

#[test]
fn bad_reference_reports_its_position() {
    let err = parse_trace(".benchmark t 0101 011 .end", 4).unwrap_err();
    match err {
        Error::Reference { line, source } => {
            assert_eq!(line, 2);
            assert!(matches!(*source, Error::AddressWidth { actual: 3, .. }));
        }
        other => panic!("expected Reference, got {other:?}"),
    }
}

#[test]
fn non_binary_reference_is_rejected() {
    let err = parse_trace(".benchmark t 0101 01a1 .end", 4).unwrap_err();
    assert!(matches!(
        err,
        Error::Reference { line: 2, ref source } if matches!(**source, Error::AddressDigit { digit: 'a', .. })
    ));
}

#[test]
fn loads_files_from_disk() {
    let dir = tempfile::tempdir().unwrap();

    let params_path = dir.path().join("cache.org");
    std::fs::File::create(&params_path)
        .unwrap()
        .write_all(PARAMS.as_bytes())
        .unwrap();
    let json_path = dir.path().join("cache.JSON");
    std::fs::write(
        &json_path,
        r#"{"Address_bits": 4, "Block_size": 1, "Cache_sets": 2, "Associativity": 1}"#,
    )
    .unwrap();
    let trace_path = dir.path().join("trace.lst");
    std::fs::write(&trace_path, ".benchmark disk\n0000\n1111\n.end\n").unwrap();

    assert_eq!(load_params(&params_path).unwrap(), params(8, 4, 8, 2));
    assert_eq!(load_params(&json_path).unwrap(), params(4, 1, 2, 1));
    assert_eq!(load_trace(&trace_path, 4).unwrap().benchmark(), "disk");
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.org");
    match load_params(&path) {
        Err(Error::Io { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected Io, got {other:?}"),
    }
}
