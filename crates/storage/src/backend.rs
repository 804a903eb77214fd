//! Key-value backend abstraction
//!
//! This trait enables swapping the in-memory map for a file-backed store
//! (or anything else that can hold a few string blobs) without touching the
//! engine.
//!
//! Each call is independent: there is no transaction spanning a read and a
//! later write, so a read-modify-write performed by a caller is
//! last-write-wins against any other writer of the same key.

use phonerecall_core::Result;
use std::sync::Arc;

/// String key → string value store
///
/// Thread safety: implementations must be `Send + Sync` so one backend can be
/// shared (behind an `Arc`) by every component of a session.
pub trait KvBackend: Send + Sync {
    /// Get the value stored under `key`
    ///
    /// Returns None if the key has never been written or was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the write does not complete.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`
    ///
    /// Returns `true` if a value was present.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be modified.
    fn remove(&self, key: &str) -> Result<bool>;
}

impl<T: KvBackend + ?Sized> KvBackend for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<bool> {
        (**self).remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryBackend;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_backends_are_send_sync() {
        assert_send_sync::<MemoryBackend>();
        assert_send_sync::<Arc<dyn KvBackend>>();
    }

    #[test]
    fn test_arc_forwards_to_inner() {
        let shared: Arc<dyn KvBackend> = Arc::new(MemoryBackend::new());
        let other = Arc::clone(&shared);

        shared.set("k", "v").unwrap();
        assert_eq!(other.get("k").unwrap().as_deref(), Some("v"));
        assert!(other.remove("k").unwrap());
        assert!(shared.get("k").unwrap().is_none());
    }
}
