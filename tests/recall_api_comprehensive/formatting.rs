//! Normalization and display formatting through the facade

use phonerecall::{format, normalize_for_comparison, numbers_match};
use proptest::prelude::*;

use super::*;

#[test]
fn national_and_international_share_a_key() {
    let fr = cc("FR");
    assert_eq!(normalize_for_comparison("0102030405", fr), "0102030405");
    assert_eq!(normalize_for_comparison("+33102030405", fr), "0102030405");
    assert!(numbers_match("01 02 03 04 05", "+33 1 02 03 04 05", fr));
}

#[test]
fn foreign_numbers_keep_their_own_key() {
    let fr = cc("FR");
    assert_eq!(normalize_for_comparison("+15512345678", fr), "+15512345678");
    assert!(!numbers_match("+15512345678", "5512345678", fr));
}

#[test]
fn format_examples() {
    let fr = cc("FR");
    assert_eq!(format("", fr), "");
    assert_eq!(format("0102030405", fr), "01 02 03 04 05");
    assert_eq!(format("+33102030405", fr), "01 02 03 04 05");
    assert!(format("+15512345678", fr).starts_with("+1"));
}

#[test]
fn format_partial_input_falls_back_to_input() {
    for raw in ["01", "+", "abc", "+33", "0"] {
        assert_eq!(format(raw, cc("FR")), raw);
    }
}

#[test]
fn session_formats_with_preferred_country() {
    let session = session_in("US");
    assert_eq!(session.format("+15512345678"), "(551) 234-5678");
    session.set_country(cc("FR"));
    assert!(session.format("+15512345678").starts_with("+1"));
    assert!(session.numbers_match("0102030405", "+33102030405"));
}

proptest! {
    #[test]
    fn format_never_panics_on_partial_digits(raw in "\\+?[0-9a-z ()\\-]{0,20}") {
        for code in ["FR", "US", "GB", "JP"] {
            let _ = format(&raw, cc(code));
        }
    }
}
