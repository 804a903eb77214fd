//! Change bus behavior as seen by subscribers

use phonerecall::{ContactId, ContactPatch};

use super::*;

#[test]
fn every_successful_mutation_notifies_once() {
    let session = RecallSession::ephemeral();
    let count = count_notifications(session.bus());
    let store = session.contacts();

    let a = store.add("A", "1").unwrap();
    assert_eq!(count.load(Ordering::SeqCst), 1);
    store.update(a.id, &ContactPatch::name("B")).unwrap().into_contact().unwrap();
    assert_eq!(count.load(Ordering::SeqCst), 2);
    assert!(store.delete(a.id).unwrap());
    assert_eq!(count.load(Ordering::SeqCst), 3);
    store.add("C", "2").unwrap();
    store.clear().unwrap();
    assert_eq!(count.load(Ordering::SeqCst), 5);
}

#[test]
fn no_change_means_no_notification() {
    let session = RecallSession::ephemeral();
    let store = session.contacts();
    let a = store.add("A", "1").unwrap();
    let count = count_notifications(session.bus());

    assert!(store.add("", "1").is_err());
    assert!(!store.update(ContactId::new(), &ContactPatch::name("X")).unwrap().is_updated());
    assert!(store.update(a.id, &ContactPatch::name("A")).unwrap().is_updated());
    assert!(!store.delete(ContactId::new()).unwrap());

    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn unsubscribe_is_idempotent() {
    let bus = ChangeBus::new();
    let count = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&count);
    let id = bus.subscribe(move || {
        seen.fetch_add(1, Ordering::SeqCst);
    });
    let other = count_notifications(&bus);

    assert!(bus.unsubscribe(id));
    assert!(!bus.unsubscribe(id));
    bus.notify();

    assert_eq!(count.load(Ordering::SeqCst), 0);
    assert_eq!(other.load(Ordering::SeqCst), 1);
}

#[test]
fn listeners_read_the_persisted_state() {
    let session = Arc::new(RecallSession::ephemeral());
    let names = Arc::new(parking_lot::Mutex::new(Vec::new()));
    let bus = Arc::clone(session.bus());
    {
        let session = Arc::clone(&session);
        let names = Arc::clone(&names);
        bus.subscribe(move || {
            let all = session.contacts().list_all();
            names.lock().push(all.iter().map(|c| c.name.clone()).collect::<Vec<_>>());
        });
    }

    let a = session.contacts().add("Alice", "1").unwrap();
    session.contacts().update(a.id, &ContactPatch::name("Alicia")).unwrap().into_contact().unwrap();

    assert_eq!(
        *names.lock(),
        vec![vec!["Alice".to_string()], vec!["Alicia".to_string()]]
    );
}
