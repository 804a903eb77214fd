//! phonerecall - contact store and phone-number recall engine
//!
//! phonerecall keeps a small personal list of contacts and quizzes the user
//! on their numbers. Numbers are stored as typed; they are normalized only
//! when compared and formatted only when shown, relative to a preferred
//! dialing country.
//!
//! # Quick Start
//!
//! ```ignore
//! use phonerecall::{CountryCode, KeypadKey, RecallSession};
//!
//! let session = RecallSession::ephemeral();
//! session.set_country(CountryCode::parse("FR")?);
//!
//! let alice = session.contacts().add("Alice", "+33 1 02 03 04 05")?;
//! assert_eq!(session.format(&alice.number), "01 02 03 04 05");
//!
//! let mut game = session.new_game();
//! for c in "0102030405".chars() {
//!     game.press(KeypadKey::from_char(c).unwrap());
//! }
//! game.check(session.country());
//! ```
//!
//! # Architecture
//!
//! - `phonerecall-core`: records, identifiers, errors
//! - `phonerecall-phone`: stateless normalization and formatting
//! - `phonerecall-storage`: key-value backends (memory, files)
//! - `phonerecall-engine`: store, change bus, country preference, game
//!
//! Front ends subscribe to the session's [`ChangeBus`] and re-read
//! [`ContactStore::list_all`] whenever it fires.

pub use phonerecall_core::{Contact, ContactId, ContactPatch, Error, Result};
pub use phonerecall_engine::{
    detect_country_from_locale, ChangeBus, ContactStore, CountryPreference, GameSession,
    KeypadKey, Outcome, RecallConfig, RecallSession, Score, SharedBackend, SubscriptionId,
    UpdateOutcome, CONFIG_FILE_NAME, DEFAULT_NAMESPACE,
};
pub use phonerecall_phone::{
    clean, find_country, flag_for, format, list_countries, normalize_for_comparison,
    numbers_match, parse, CountryCode, CountryInfo, PhoneNumber, UnknownCountry,
    FALLBACK_COUNTRY,
};
pub use phonerecall_storage::{FileBackend, KvBackend, MemoryBackend};
