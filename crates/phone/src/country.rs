//! Country codes and the country picker list
//!
//! [`CountryCode`] is a validated handle into the region table, so holding
//! one proves the code is supported. [`list_countries`] builds the picker
//! entries once per process.

use crate::metadata::{Region, REGIONS};
use once_cell::sync::Lazy;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Code used when nothing better is known
pub const FALLBACK_COUNTRY: &str = "US";

/// Offset from an ASCII uppercase letter to its regional-indicator symbol
const REGIONAL_INDICATOR_OFFSET: u32 = 0x1F1E6 - 'A' as u32;

/// Error returned when a code is not in the supported table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported country code: '{0}'")]
pub struct UnknownCountry(pub String);

/// Validated two-letter region code
///
/// Internally an index into the sorted region table, so ordering follows
/// the alphabetical order of the codes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CountryCode(u16);

impl CountryCode {
    /// Parse a code, accepting any ASCII case and surrounding whitespace
    ///
    /// # Errors
    ///
    /// Returns `UnknownCountry` if the code is not supported.
    pub fn parse(code: &str) -> Result<Self, UnknownCountry> {
        let upper = code.trim().to_ascii_uppercase();
        REGIONS
            .binary_search_by(|r| r.code.cmp(upper.as_str()))
            .map(|i| CountryCode(i as u16))
            .map_err(|_| UnknownCountry(code.to_string()))
    }

    /// The uppercase two-letter code
    pub fn as_str(&self) -> &'static str {
        self.region().code
    }

    /// English display name
    pub fn name(&self) -> &'static str {
        self.region().name
    }

    /// Country calling code, e.g. 33 for France
    pub fn calling_code(&self) -> u16 {
        self.region().calling_code
    }

    /// Flag glyph built from regional-indicator symbols
    pub fn flag(&self) -> String {
        flag_for(self.as_str())
    }

    pub(crate) fn region(&self) -> &'static Region {
        &REGIONS[self.0 as usize]
    }

    pub(crate) fn from_region(region: &'static Region) -> Self {
        // Regions handed out by the metadata module always live in REGIONS.
        let index = REGIONS
            .iter()
            .position(|r| std::ptr::eq(r, region))
            .unwrap_or_default();
        CountryCode(index as u16)
    }
}

impl Default for CountryCode {
    fn default() -> Self {
        CountryCode::parse(FALLBACK_COUNTRY).unwrap_or(CountryCode(0))
    }
}

impl fmt::Debug for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CountryCode({})", self.as_str())
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CountryCode {
    type Err = UnknownCountry;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CountryCode::parse(s)
    }
}

impl Serialize for CountryCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CountryCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        CountryCode::parse(&raw).map_err(de::Error::custom)
    }
}

/// One entry of the country picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryInfo {
    /// Region code
    pub code: CountryCode,
    /// English display name
    pub name: &'static str,
    /// Flag glyph
    pub flag: String,
}

static COUNTRY_LIST: Lazy<Vec<CountryInfo>> = Lazy::new(|| {
    let mut list: Vec<CountryInfo> = (0..REGIONS.len())
        .map(|i| {
            let code = CountryCode(i as u16);
            CountryInfo {
                code,
                name: code.name(),
                flag: code.flag(),
            }
        })
        .collect();
    list.sort_by(|a, b| collate(a.name, b.name).then_with(|| a.code.cmp(&b.code)));
    list
});

/// Every supported country, sorted by display name
pub fn list_countries() -> &'static [CountryInfo] {
    &COUNTRY_LIST
}

/// Picker entry for `code`
pub fn find_country(code: CountryCode) -> &'static CountryInfo {
    // COUNTRY_LIST holds exactly one entry per region.
    let list = list_countries();
    list.iter()
        .find(|c| c.code == code)
        .unwrap_or(&list[0])
}

/// Map each ASCII letter of `code` to its regional-indicator symbol
///
/// Non-letters are dropped, so the result is empty for garbage input.
pub fn flag_for(code: &str) -> String {
    code.chars()
        .filter(char::is_ascii_alphabetic)
        .filter_map(|c| char::from_u32(c.to_ascii_uppercase() as u32 + REGIONAL_INDICATOR_OFFSET))
        .collect()
}

/// Accent- and case-insensitive comparison of display names
fn collate(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(&collation_key(b))
}

/// Compatibility-decomposed, mark-free, lowercase form of `name`
///
/// Letters with no decomposition (`ø`, `ł`, `æ`) fold to their base
/// spelling by hand.
fn collation_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    for c in name.nfkd().filter(|c| !is_combining_mark(*c)) {
        match c {
            'Ø' | 'ø' => key.push('o'),
            'Ł' | 'ł' => key.push('l'),
            'Đ' | 'đ' => key.push('d'),
            'Æ' | 'æ' => key.push_str("ae"),
            'Œ' | 'œ' => key.push_str("oe"),
            'Þ' | 'þ' => key.push_str("th"),
            'ß' => key.push_str("ss"),
            other => key.extend(other.to_lowercase()),
        }
    }
    key
}
