//! Recall engine for phonerecall
//!
//! This crate orchestrates the lower layers:
//! - ContactStore: CRUD over the persisted contact collection
//! - ChangeBus: payload-free change notifications for views
//! - CountryPreference: persisted dialing context with locale fallback
//! - GameSession: shuffled recall quiz over a contact snapshot
//! - RecallSession: wires config, backend, bus and stores together
//!
//! Views subscribe to the bus and re-read `ContactStore::list_all()` when
//! notified; the store is the single source of truth.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bus;
pub mod config;
pub mod country;
pub mod game;
pub mod session;
pub mod store;

pub use bus::{ChangeBus, SubscriptionId};
pub use config::{RecallConfig, CONFIG_FILE_NAME, DEFAULT_NAMESPACE};
pub use country::{detect_country_from_locale, CountryPreference};
pub use game::{GameSession, KeypadKey, Outcome, Score};
pub use session::{RecallSession, SharedBackend};
pub use store::{ContactStore, UpdateOutcome};
