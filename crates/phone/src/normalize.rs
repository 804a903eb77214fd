//! Canonical comparison keys
//!
//! Two spellings of the same number in the same country reduce to the same
//! key; numbers from different countries never collapse onto each other.
//!
//! | Input (context `FR`) | Key |
//! |----------------------|-----|
//! | `01 02 03 04 05`     | `0102030405` |
//! | `+33 1 02 03 04 05`  | `0102030405` |
//! | `+1 551 234 5678`    | `+15512345678` |

use crate::country::CountryCode;
use crate::parse::{clean, parse_international};

/// Reduce `raw` to the key used to compare numbers within `context`
///
/// - `+` form resolving to `context`: the national digits (trunk prefix
///   followed by the NSN), so it matches the locally dialed form.
/// - `+` form resolving elsewhere, or not resolving at all: the cleaned
///   `+`-prefixed digits.
/// - No `+`: the cleaned digits as typed. National digits are already in
///   the shape of a key, so a failed parse changes nothing.
pub fn normalize_for_comparison(raw: &str, context: CountryCode) -> String {
    let cleaned = clean(raw);
    let Some(digits) = cleaned.strip_prefix('+') else {
        return cleaned;
    };
    match parse_international(digits, context) {
        Some(number) if number.country() == context => number.national_digits(),
        _ => cleaned,
    }
}

/// Whether two raw numbers denote the same number within `context`
pub fn numbers_match(a: &str, b: &str, context: CountryCode) -> bool {
    normalize_for_comparison(a, context) == normalize_for_comparison(b, context)
}
