//! Recall API Comprehensive Test Suite
//!
//! Exercises the public facade end to end: contacts, notifications,
//! country selection, formatting and the recall game.
//!
//! ## Running Tests
//!
//! ```bash
//! # Run the whole suite
//! cargo test --test recall_api_comprehensive
//!
//! # Run one area
//! cargo test --test recall_api_comprehensive contacts::
//! cargo test --test recall_api_comprehensive game::
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use phonerecall::{ChangeBus, ContactStore, CountryCode, MemoryBackend, RecallSession};

mod contacts;
mod country;
mod formatting;
mod game;
mod notifications;

const CONTACTS_KEY: &str = "memory-phonenumbers-contacts";

/// Store over a fresh in-memory backend
fn memory_store() -> ContactStore<MemoryBackend> {
    ContactStore::new(MemoryBackend::new(), CONTACTS_KEY, Arc::new(ChangeBus::new()))
}

/// Subscribe a counter to `bus`
fn count_notifications(bus: &ChangeBus) -> Arc<AtomicUsize> {
    let count = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&count);
    bus.subscribe(move || {
        seen.fetch_add(1, Ordering::SeqCst);
    });
    count
}

fn cc(code: &str) -> CountryCode {
    CountryCode::parse(code).unwrap()
}

/// In-memory session pinned to `country`
fn session_in(country: &str) -> RecallSession {
    let session = RecallSession::ephemeral();
    session.set_country(cc(country));
    session
}
