//! UI locale and its persisted preference.

#[cfg(test)]
#[path = "locale_test.rs"]
mod locale_test;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::listeners::{Listeners, Subscription};
use crate::store::{SharedStore, StoreError};

pub const LOCALE_KEY: &str = "locale";

/// Supported UI languages. French is the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Fr,
    En,
}

impl Locale {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Fr => "fr",
            Self::En => "en",
        }
    }

    /// Lenient parse of a stored value: only `en` (any case) selects English.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("en") { Self::En } else { Self::Fr }
    }

    /// Strict parse for user input.
    #[must_use]
    pub fn from_code(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "fr" => Some(Self::Fr),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Fr => Self::En,
            Self::En => Self::Fr,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Locale preference service over an injected store.
#[derive(Clone)]
pub struct LocalePreference {
    store: SharedStore,
    listeners: Arc<Listeners<Locale>>,
}

impl fmt::Debug for LocalePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalePreference").field("locale", &self.get()).finish()
    }
}

impl LocalePreference {
    #[must_use]
    pub fn new(store: SharedStore) -> Self {
        Self { store, listeners: Arc::new(Listeners::default()) }
    }

    #[must_use]
    pub fn get(&self) -> Locale {
        self.store.get(LOCALE_KEY).map_or_else(Locale::default, |raw| Locale::parse(&raw))
    }

    /// Persist `locale` and notify listeners.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the write fails.
    pub fn set(&self, locale: Locale) -> Result<(), StoreError> {
        self.store.set(LOCALE_KEY, locale.code())?;
        self.listeners.emit(&locale);
        Ok(())
    }

    /// Switch to the other locale and return it.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the write fails.
    pub fn toggle(&self) -> Result<Locale, StoreError> {
        let next = self.get().toggled();
        self.set(next)?;
        Ok(next)
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&Locale) + Send + Sync + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        self.listeners.unsubscribe(subscription)
    }
}
