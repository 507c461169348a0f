//! Injected key/value persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client backs this with `localStorage`, the CLI with a JSON
//! file, and tests with [`MemoryStore`]. Session and locale state only ever
//! read and write through this trait.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Error returned when a store cannot persist a change.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No backing storage exists (private mode, SSR, missing file system).
    #[error("storage unavailable")]
    Unavailable,
    /// The backend refused the write.
    #[error("storage write failed: {0}")]
    Write(String),
}

/// String key/value storage with synchronous reads and writes.
pub trait KeyValueStore: Send + Sync {
    /// Read a value. Missing keys and unreadable storage both yield `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete a key. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the backend rejects the delete.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Shared handle to a store implementation.
pub type SharedStore = Arc<dyn KeyValueStore>;

/// Process-local store used by tests and server-side rendering.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor returning the store behind a [`SharedStore`].
    #[must_use]
    pub fn shared() -> SharedStore {
        Arc::new(Self::new())
    }

    /// Snapshot of every entry, in key order.
    #[must_use]
    pub fn entries(&self) -> BTreeMap<String, String> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).remove(key);
        Ok(())
    }
}
