//! Display formatting
//!
//! Formatting runs on every keystroke of a number being typed, so it never
//! fails: anything that does not resolve is echoed back unchanged.

use crate::country::CountryCode;
use crate::parse::parse;

/// Render `raw` for display to a user whose country is `context`
///
/// Numbers of `context` use its national convention (`01 02 03 04 05`);
/// numbers of other countries use the international one
/// (`+1 551-234-5678`). Empty input yields an empty string.
pub fn format(raw: &str, context: CountryCode) -> String {
    if raw.is_empty() {
        return String::new();
    }
    match parse(raw, context) {
        Some(number) if number.country() == context => number.format_national(),
        Some(number) => number.format_international(),
        None => raw.to_string(),
    }
}
