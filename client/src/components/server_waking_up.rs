//! Full-screen placeholder shown until the backend answers `/ready`.

use flows::messages::MessageKey;
use leptos::prelude::*;

use crate::state::i18n::I18n;

#[component]
pub fn ServerWakingUp() -> impl IntoView {
    let i18n = expect_context::<I18n>();

    view! {
        <main class="server-waking" aria-busy="true">
            <div class="server-waking__spinner" aria-hidden="true"></div>
            <h1 class="server-waking__title">{move || i18n.t(MessageKey::ServerWakingTitle)}</h1>
            <p class="server-waking__subtitle">{move || i18n.t(MessageKey::ServerWakingSubtitle)}</p>
            <p class="server-waking__tip">{move || i18n.t(MessageKey::ServerWakingTip)}</p>
        </main>
    }
}
