//! ChangeBus: payload-free change notifications
//!
//! ## Design
//!
//! Views register a zero-argument callback. Every successful mutation of the
//! contact store calls `notify()`, and each view then pulls a fresh snapshot
//! from the store. Notifications carry no data, so a view can never render a
//! payload that disagrees with what is actually persisted.
//!
//! The bus is an explicit object shared through `Arc`, scoped to one
//! application session.
//!
//! ## Re-entrancy
//!
//! Callbacks run after the registry lock is released, so a callback may
//! subscribe or unsubscribe (including itself) without deadlocking. Such
//! changes take effect from the next `notify()`.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

type Listener = Arc<dyn Fn() + Send + Sync>;

/// Handle returned by [`ChangeBus::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Observer registry for store changes
#[derive(Default)]
pub struct ChangeBus {
    next_id: AtomicU64,
    listeners: RwLock<Vec<(SubscriptionId, Listener)>>,
}

impl ChangeBus {
    /// Create an empty bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener`; it is called on every subsequent notification
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners.write().push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener
    ///
    /// Returns `true` if it was registered. Unsubscribing twice is harmless.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.write();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    /// Call every registered listener, in subscription order
    pub fn notify(&self) {
        let snapshot: Vec<Listener> = self
            .listeners
            .read()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        tracing::trace!(
            target: "phonerecall::bus",
            listeners = snapshot.len(),
            "Notifying change listeners"
        );
        for listener in snapshot {
            listener();
        }
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.read().len()
    }
}

impl fmt::Debug for ChangeBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
