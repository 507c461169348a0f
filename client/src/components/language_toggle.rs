//! Button switching between French and English.

#[cfg(test)]
#[path = "language_toggle_test.rs"]
mod language_toggle_test;

use flows::locale::Locale;
use flows::messages::MessageKey;
use leptos::prelude::*;

use crate::state::i18n::I18n;

/// The button shows the locale a click switches to.
fn target_label(current: Locale) -> &'static str {
    match current.toggled() {
        Locale::Fr => "FR",
        Locale::En => "EN",
    }
}

#[component]
pub fn LanguageToggle() -> impl IntoView {
    let i18n = expect_context::<I18n>();

    view! {
        <button
            type="button"
            class="language-toggle"
            aria-label=move || i18n.t(MessageKey::NavToggleLanguage)
            on:click=move |_| i18n.toggle_locale()
        >
            {move || target_label(i18n.locale())}
        </button>
    }
}
