//! Public landing page.

use flows::messages::MessageKey;
use flows::nav::{Route, open_auth_modal};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::neon_button::{NeonButton, Variant};
use crate::state::i18n::I18n;
use crate::state::nav::{CurrentLocation, Navigation};

const FEATURES: &[(MessageKey, MessageKey)] = &[
    (MessageKey::LandingFeatureFocusTitle, MessageKey::LandingFeatureFocusDesc),
    (MessageKey::LandingFeatureFastTitle, MessageKey::LandingFeatureFastDesc),
    (MessageKey::LandingFeatureReadyTitle, MessageKey::LandingFeatureReadyDesc),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let i18n = expect_context::<I18n>();
    let navigation = expect_context::<Navigation>();
    let current = expect_context::<CurrentLocation>().0;
    let navigate = use_navigate();

    let open_form = Callback::new(move |route: Route| {
        let redirect = current.with_untracked(|location| open_auth_modal(route, location));
        navigation.follow(&navigate, redirect);
    });

    view! {
        <section class="landing">
            <div class="landing__hero">
                <h1 class="landing__title">{move || i18n.t(MessageKey::LandingHeroTitle)}</h1>
                <p class="landing__subtitle">{move || i18n.t(MessageKey::LandingHeroSubtitle)}</p>
                <div class="landing__cta">
                    <NeonButton on_press=Callback::new(move |()| open_form.run(Route::Signup))>
                        {move || i18n.t(MessageKey::LandingCtaSignup)}
                    </NeonButton>
                    <NeonButton variant=Variant::Ghost on_press=Callback::new(move |()| open_form.run(Route::Login))>
                        {move || i18n.t(MessageKey::LandingCtaLogin)}
                    </NeonButton>
                </div>
            </div>
            <ul class="landing__features">
                {FEATURES
                    .iter()
                    .map(|(title, desc)| {
                        let (title, desc) = (*title, *desc);
                        view! {
                            <li class="landing__feature">
                                <h2>{move || i18n.t(title)}</h2>
                                <p>{move || i18n.t(desc)}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
