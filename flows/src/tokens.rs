//! Stored session tokens.
//!
//! Token presence is the only authentication signal the frontends use; the
//! backend remains the judge of validity.

#[cfg(test)]
#[path = "tokens_test.rs"]
mod tokens_test;

use std::fmt;
use std::sync::Arc;

use crate::listeners::{Listeners, Subscription};
use crate::store::{SharedStore, StoreError};

pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Cleared on logout; nothing writes it.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Emitted whenever the stored access token changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    SignedIn,
    SignedOut,
}

/// Session token service over an injected store.
#[derive(Clone)]
pub struct SessionTokens {
    store: SharedStore,
    listeners: Arc<Listeners<SessionEvent>>,
}

impl fmt::Debug for SessionTokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionTokens")
            .field("authenticated", &self.is_authenticated())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl SessionTokens {
    #[must_use]
    pub fn new(store: SharedStore) -> Self {
        Self { store, listeners: Arc::new(Listeners::default()) }
    }

    /// The stored access token, ignoring empty values.
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.store.get(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    /// Persist a freshly issued access token.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the write fails; listeners are not
    /// notified in that case.
    pub fn store_access_token(&self, token: &str) -> Result<(), StoreError> {
        self.store.set(ACCESS_TOKEN_KEY, token)?;
        self.listeners.emit(&SessionEvent::SignedIn);
        Ok(())
    }

    /// Remove both token keys. Both removals are attempted even if the first
    /// fails; listeners always hear `SignedOut`.
    ///
    /// # Errors
    ///
    /// Returns the first store error encountered.
    pub fn clear(&self) -> Result<(), StoreError> {
        let access = self.store.remove(ACCESS_TOKEN_KEY);
        let refresh = self.store.remove(REFRESH_TOKEN_KEY);
        self.listeners.emit(&SessionEvent::SignedOut);
        access.and(refresh)
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&SessionEvent) + Send + Sync + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        self.listeners.unsubscribe(subscription)
    }
}
