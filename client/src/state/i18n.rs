//! Locale context.
//!
//! The signal starts at the default locale on both server and client so the
//! hydrated markup matches; [`I18n::load`] then switches to the stored
//! preference once the app is running in the browser.

use flows::locale::{Locale, LocalePreference};
use flows::listeners::Subscription;
use flows::messages::{MessageKey, Notice, translate};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct I18n {
    locale: RwSignal<Locale>,
    prefs: StoredValue<LocalePreference>,
}

impl I18n {
    /// Build the context and keep the signal in sync with the preference.
    /// Returns the listener subscription so the owner can drop it.
    pub fn new(prefs: LocalePreference) -> (Self, Subscription) {
        let locale = RwSignal::new(Locale::default());
        let subscription = prefs.subscribe(move |next| locale.set(*next));
        (Self { locale, prefs: StoredValue::new(prefs) }, subscription)
    }

    /// Adopt the stored preference.
    pub fn load(&self) {
        let stored = self.prefs.with_value(LocalePreference::get);
        self.locale.set(stored);
    }

    pub fn unsubscribe(&self, subscription: Subscription) {
        self.prefs.with_value(|prefs| prefs.unsubscribe(subscription));
    }

    pub fn locale(&self) -> Locale {
        self.locale.get()
    }

    pub fn t(&self, key: MessageKey) -> &'static str {
        translate(key, self.locale.get())
    }

    pub fn render(&self, notice: &Notice) -> String {
        notice.render(self.locale.get())
    }

    pub fn set_locale(&self, locale: Locale) {
        if let Err(e) = self.prefs.with_value(|prefs| prefs.set(locale)) {
            leptos::logging::warn!("[i18n] locale not persisted: {e}");
            self.locale.set(locale);
        }
    }

    pub fn toggle_locale(&self) {
        self.set_locale(self.locale.get_untracked().toggled());
    }
}
