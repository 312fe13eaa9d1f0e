//! # Address Tests
//!
//! Width and alphabet validation, bit numbering and tag extraction.

use idxsim_core::common::{Address, Error};
use rstest::rstest;

#[test]
fn parse_accepts_binary_token_of_configured_width() {
    let addr = Address::parse("0110", 4).unwrap();
    assert_eq!(addr.as_str(), "0110");
    assert_eq!(addr.width(), 4);
    assert_eq!(addr.to_string(), "0110");
}

#[rstest]
#[case("011", 4, 3)]
#[case("01101", 4, 5)]
#[case("", 4, 0)]
fn parse_rejects_wrong_width(#[case] token: &str, #[case] bits: usize, #[case] actual: usize) {
    match Address::parse(token, bits) {
        Err(Error::AddressWidth {
            expected,
            actual: got,
            ..
        }) => {
            assert_eq!(expected, bits);
            assert_eq!(got, actual);
        }
        other => panic!("expected AddressWidth, got {other:?}"),
    }
}

#[rstest]
#[case("01a1", 'a', 2)]
#[case("2000", '2', 0)]
#[case("000x", 'x', 3)]
fn parse_rejects_non_binary_digits(#[case] token: &str, #[case] digit: char, #[case] position: usize) {
    match Address::parse(token, 4) {
        Err(Error::AddressDigit {
            digit: d,
            position: p,
            ..
        }) => {
            assert_eq!(d, digit);
            assert_eq!(p, position);
        }
        other => panic!("expected AddressDigit, got {other:?}"),
    }
}

/// Width is checked before the alphabet.
#[test]
fn width_error_takes_precedence() {
    assert!(matches!(
        Address::parse("0x", 4),
        Err(Error::AddressWidth { .. })
    ));
}

#[test]
fn bits_are_numbered_from_the_left() {
    let addr = Address::parse("1001", 4).unwrap();
    let bits: Vec<bool> = (0..4).map(|i| addr.bit(i)).collect();
    assert_eq!(bits, vec![true, false, false, true]);
}

#[test]
fn tag_covers_the_requested_prefix() {
    let addr = Address::parse("110010", 6).unwrap();
    assert_eq!(addr.tag(0).unwrap().as_str(), "");
    assert_eq!(addr.tag(3).unwrap().as_str(), "110");
    assert!(addr.tag(7).is_none());
}

/// Addresses differing only in the offset bits share a tag.
#[test]
fn offset_bits_do_not_affect_tag() {
    let a = Address::parse("10110", 5).unwrap();
    let b = Address::parse("10111", 5).unwrap();
    assert_ne!(a, b);
    assert_eq!(a.tag(4), b.tag(4));
}
