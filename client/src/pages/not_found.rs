//! Fallback page for unknown paths.

use flows::messages::MessageKey;
use flows::nav::Redirect;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::neon_button::{NeonButton, Variant};
use crate::state::i18n::I18n;
use crate::state::nav::Navigation;
use crate::util::browser;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let i18n = expect_context::<I18n>();
    let navigation = expect_context::<Navigation>();
    let navigate = use_navigate();

    let go_home = Callback::new(move |()| navigation.follow(&navigate, Redirect::push("/")));
    let go_back = Callback::new(move |()| browser::history_back());

    view! {
        <section class="not-found">
            <p class="not-found__code">"404"</p>
            <h1>{move || i18n.t(MessageKey::NotFoundTitle)}</h1>
            <p>{move || i18n.t(MessageKey::NotFoundSubtitle)}</p>
            <div class="not-found__actions">
                <NeonButton on_press=go_home>{move || i18n.t(MessageKey::NotFoundGoHome)}</NeonButton>
                <NeonButton variant=Variant::Ghost on_press=go_back>
                    {move || i18n.t(MessageKey::NotFoundGoBack)}
                </NeonButton>
            </div>
        </section>
    }
}
