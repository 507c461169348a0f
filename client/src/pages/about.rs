//! Static about page.

use flows::messages::MessageKey;
use flows::nav::Redirect;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::neon_button::{NeonButton, Variant};
use crate::state::i18n::I18n;
use crate::state::nav::Navigation;

const VALUES: &[MessageKey] = &[MessageKey::AboutValueSimple, MessageKey::AboutValueFast, MessageKey::AboutValueHonest];

#[component]
pub fn AboutPage() -> impl IntoView {
    let i18n = expect_context::<I18n>();
    let navigation = expect_context::<Navigation>();
    let navigate = use_navigate();

    let go_home = Callback::new(move |()| navigation.follow(&navigate, Redirect::push("/")));

    view! {
        <section class="about">
            <h1>{move || i18n.t(MessageKey::AboutTitle)}</h1>
            <p class="about__description">{move || i18n.t(MessageKey::AboutDescription)}</p>
            <h2>{move || i18n.t(MessageKey::AboutValuesTitle)}</h2>
            <ul class="about__values">
                {VALUES.iter().map(|key| {
                    let key = *key;
                    view! { <li>{move || i18n.t(key)}</li> }
                }).collect_view()}
            </ul>
            <NeonButton variant=Variant::Ghost on_press=go_home>
                {move || i18n.t(MessageKey::AboutBackHome)}
            </NeonButton>
        </section>
    }
}
