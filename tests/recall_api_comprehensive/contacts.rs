//! Contact CRUD through the public API

use std::collections::HashSet;

use phonerecall::{ContactId, ContactPatch, Error, FileBackend, KvBackend, UpdateOutcome};
use tempfile::TempDir;

use super::*;

#[test]
fn add_then_list_has_one_trimmed_record() {
    let store = memory_store();
    let existing = store.add("Existing", "1").unwrap();

    let added = store.add("  Alice Smith  ", "\t01 02 03 04 05 ").unwrap();
    let all = store.list_all();

    assert_eq!(all.len(), 2);
    let fresh: Vec<_> = all.iter().filter(|c| c.id == added.id).collect();
    assert_eq!(fresh.len(), 1);
    assert_eq!(fresh[0].name, "Alice Smith");
    assert_eq!(fresh[0].number, "01 02 03 04 05");
    assert!(!added.id.to_string().is_empty());
    assert_ne!(added.id, existing.id);
}

#[test]
fn ten_thousand_ids_are_distinct() {
    let ids: HashSet<ContactId> = (0..10_000).map(|_| ContactId::new()).collect();
    assert_eq!(ids.len(), 10_000);
}

#[test]
fn sequential_adds_get_distinct_ids() {
    let store = memory_store();
    let a = store.add("Same", "1").unwrap();
    let b = store.add("Same", "1").unwrap();
    assert_ne!(a.id, b.id);
    assert_eq!(store.list_all().len(), 2);
}

#[test]
fn add_rejects_empty_fields() {
    let store = memory_store();
    for (name, number) in [("", "1"), ("   ", "1"), ("Bob", ""), ("Bob", " \n ")] {
        let err = store.add(name, number).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }), "{:?}", err);
    }
    assert!(store.list_all().is_empty());
}

#[test]
fn delete_missing_returns_false_and_changes_nothing() {
    let store = memory_store();
    store.add("A", "1").unwrap();
    let before = store.list_all();

    assert!(!store.delete(ContactId::new()).unwrap());
    assert!(!store.delete(ContactId::new()).unwrap());
    assert_eq!(store.list_all(), before);
}

#[test]
fn update_missing_is_not_found_and_creates_nothing() {
    let store = memory_store();
    let outcome = store
        .update(ContactId::new(), &ContactPatch::name("Ghost").with_number("1"))
        .unwrap();
    assert_eq!(outcome, UpdateOutcome::NotFound);
    assert!(store.list_all().is_empty());
}

#[test]
fn rename_round_trip_keeps_number() {
    let store = memory_store();
    let contact = store.add("Alice", "+33 1 02 03 04 05").unwrap();

    store
        .update(contact.id, &ContactPatch::name("Alicia"))
        .unwrap()
        .into_contact()
        .unwrap();

    let all = store.list_all();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, contact.id);
    assert_eq!(all[0].name, "Alicia");
    assert_eq!(all[0].number, "+33 1 02 03 04 05");
}

#[test]
fn update_trims_patched_fields() {
    let store = memory_store();
    let contact = store.add("Alice", "1").unwrap();
    let updated = store
        .update(contact.id, &ContactPatch::number("  06 12 34 56 78 "))
        .unwrap()
        .into_contact()
        .unwrap();
    assert_eq!(updated.number, "06 12 34 56 78");
}

#[test]
fn corrupted_blob_lists_empty() {
    let backend = MemoryBackend::with_entries([(CONTACTS_KEY, "[{\"oops\":")]);
    let store = ContactStore::new(backend, CONTACTS_KEY, Arc::new(ChangeBus::new()));
    assert!(store.list_all().is_empty());
    assert!(store.get(ContactId::new()).is_none());
}

#[test]
fn file_backend_persists_across_sessions() {
    let dir = TempDir::new().unwrap();
    let id = {
        let session = RecallSession::open_dir(dir.path()).unwrap();
        session.contacts().add("Alice", "0102030405").unwrap().id
    };

    let session = RecallSession::open_dir(dir.path()).unwrap();
    let contact = session.contacts().get(id).unwrap();
    assert_eq!(contact.name, "Alice");

    let backend = FileBackend::open(dir.path()).unwrap();
    assert!(backend.get(CONTACTS_KEY).unwrap().unwrap().contains("Alice"));
}
