//! ContactStore: CRUD over the persisted contact collection
//!
//! ## Design
//!
//! The whole collection is one JSON array under a single key. Every mutation
//! is a read-modify-write of that array: load, change, persist, then notify
//! the bus. Nothing is cached, so the backend is always the source of truth
//! and `list_all()` after a notification sees exactly what was written.
//!
//! ## Failure Model
//!
//! - Reads never fail. A missing key, an unreadable backend, or a blob that
//!   does not decode as a contact array all read as an empty collection and
//!   are logged at `warn`.
//! - Writes propagate their error. The bus is only notified once the new
//!   collection has been persisted.
//! - A missing id is an outcome, not an error: `UpdateOutcome::NotFound` or
//!   `false` from `delete`.

use std::sync::Arc;

use phonerecall_core::{Contact, ContactId, ContactPatch, Error, Result};
use phonerecall_storage::KvBackend;

use crate::bus::ChangeBus;

/// Result of [`ContactStore::update`]
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The record after the patch was applied
    Updated(Contact),
    /// No record has the requested id
    NotFound,
}

impl UpdateOutcome {
    /// True when a record was found
    pub fn is_updated(&self) -> bool {
        matches!(self, UpdateOutcome::Updated(_))
    }

    /// The updated record, if any
    pub fn into_contact(self) -> Option<Contact> {
        match self {
            UpdateOutcome::Updated(contact) => Some(contact),
            UpdateOutcome::NotFound => None,
        }
    }
}

/// Persisted contact collection
pub struct ContactStore<B: KvBackend> {
    backend: B,
    key: String,
    bus: Arc<ChangeBus>,
}

impl<B: KvBackend> ContactStore<B> {
    /// Create a store keeping its collection under `key`
    pub fn new(backend: B, key: impl Into<String>, bus: Arc<ChangeBus>) -> Self {
        Self {
            backend,
            key: key.into(),
            bus,
        }
    }

    /// Bus notified after every persisted change
    pub fn bus(&self) -> &Arc<ChangeBus> {
        &self.bus
    }

    /// Storage key of the collection
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Every stored contact, in insertion order
    pub fn list_all(&self) -> Vec<Contact> {
        let raw = match self.backend.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(
                    target: "phonerecall::store",
                    key = %self.key,
                    error = %e,
                    "Failed to read contacts, treating as empty"
                );
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<Contact>>(&raw) {
            Ok(contacts) => contacts,
            Err(e) => {
                let e = Error::corruption(&self.key, e.to_string());
                tracing::warn!(
                    target: "phonerecall::store",
                    error = %e,
                    bytes = raw.len(),
                    "Ignoring undecodable contact collection"
                );
                Vec::new()
            }
        }
    }

    /// Look up one contact
    pub fn get(&self, id: ContactId) -> Option<Contact> {
        self.list_all().into_iter().find(|c| c.id == id)
    }

    /// Number of stored contacts
    pub fn len(&self) -> usize {
        self.list_all().len()
    }

    /// True when nothing is stored
    pub fn is_empty(&self) -> bool {
        self.list_all().is_empty()
    }

    /// Validate, assign an id, append and persist a new contact
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if either field is empty after trimming,
    /// or the backend error if the collection cannot be written.
    pub fn add(&self, name: &str, number: &str) -> Result<Contact> {
        let contact = Contact::new(name, number)?;
        let mut contacts = self.list_all();
        contacts.push(contact.clone());
        self.save(&contacts)?;

        tracing::debug!(
            target: "phonerecall::store",
            id = %contact.id,
            total = contacts.len(),
            "Added contact"
        );
        self.bus.notify();
        Ok(contact)
    }

    /// Apply `patch` to the contact with `id`
    ///
    /// A patch that leaves the record unchanged is reported as `Updated`
    /// without writing or notifying.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if a provided field is empty after
    /// trimming, or the backend error if the collection cannot be written.
    pub fn update(&self, id: ContactId, patch: &ContactPatch) -> Result<UpdateOutcome> {
        let mut contacts = self.list_all();
        let Some(index) = contacts.iter().position(|c| c.id == id) else {
            return Ok(UpdateOutcome::NotFound);
        };

        let mut updated = contacts[index].clone();
        patch.apply(&mut updated)?;
        if updated == contacts[index] {
            return Ok(UpdateOutcome::Updated(updated));
        }

        contacts[index] = updated.clone();
        self.save(&contacts)?;

        tracing::debug!(target: "phonerecall::store", id = %id, "Updated contact");
        self.bus.notify();
        Ok(UpdateOutcome::Updated(updated))
    }

    /// Remove the contact with `id`
    ///
    /// Returns `true` if a record was removed.
    ///
    /// # Errors
    ///
    /// Returns the backend error if the collection cannot be written.
    pub fn delete(&self, id: ContactId) -> Result<bool> {
        let mut contacts = self.list_all();
        let before = contacts.len();
        contacts.retain(|c| c.id != id);
        if contacts.len() == before {
            return Ok(false);
        }

        self.save(&contacts)?;
        tracing::debug!(
            target: "phonerecall::store",
            id = %id,
            total = contacts.len(),
            "Deleted contact"
        );
        self.bus.notify();
        Ok(true)
    }

    /// Remove the whole persisted collection
    ///
    /// Listeners are notified only if something was stored.
    ///
    /// # Errors
    ///
    /// Returns the backend error if the key cannot be removed.
    pub fn clear(&self) -> Result<()> {
        if self.backend.remove(&self.key)? {
            tracing::debug!(target: "phonerecall::store", key = %self.key, "Cleared contacts");
            self.bus.notify();
        }
        Ok(())
    }

    fn save(&self, contacts: &[Contact]) -> Result<()> {
        let blob = serde_json::to_string(contacts)?;
        self.backend.set(&self.key, &blob)
    }
}

impl<B: KvBackend> std::fmt::Debug for ContactStore<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactStore")
            .field("key", &self.key)
            .field("bus", &self.bus)
            .finish_non_exhaustive()
    }
}
