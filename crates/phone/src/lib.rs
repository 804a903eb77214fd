//! Phone number normalization and formatting
//!
//! Pure, stateless functions that interpret a raw number against a country
//! context:
//! - [`normalize_for_comparison`]: canonical key for equality checks
//! - [`format`]: best-effort display string, echoing input it cannot parse
//! - [`list_countries`]: the supported countries with names and flags
//!
//! Numbers without a `+` are read in the national dialing convention of the
//! context country; `+`-prefixed numbers carry their own country.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod country;
pub mod format;
mod metadata;
pub mod normalize;
pub mod parse;

pub use country::{find_country, flag_for, list_countries, CountryCode, CountryInfo, UnknownCountry, FALLBACK_COUNTRY};
pub use format::format;
pub use normalize::{normalize_for_comparison, numbers_match};
pub use parse::{clean, parse, PhoneNumber};
