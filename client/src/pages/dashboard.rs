//! Signed-in home: greeting, account summary, and the (empty) stacks section.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use flows::messages::MessageKey;
use flows::profile::ProfileLoad;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::neon_button::NeonButton;
use crate::state::auth::Session;
use crate::state::i18n::I18n;
use crate::state::nav::Navigation;

fn greeting_line(greeting: &str, name: &str) -> String {
    format!("{greeting}, {name}")
}

fn status_key(is_active: bool) -> MessageKey {
    if is_active { MessageKey::DashboardAccountActive } else { MessageKey::DashboardAccountInactive }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let i18n = expect_context::<I18n>();
    let session = expect_context::<Session>();
    let navigation = expect_context::<Navigation>();
    let navigate = use_navigate();

    let profile = RwSignal::new(ProfileLoad::default());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_me().await;
        if let Err(e) = &result {
            leptos::logging::warn!("[dashboard] profile unavailable: {e}");
        }
        let action = profile.try_update(|load| load.apply(result));
        if action == Some(flows::profile::ProfileAction::ForceLogout) {
            navigation.follow(&navigate, session.logout());
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (&navigate, session, navigation);

    let empty_stacks = Signal::derive(|| true);

    view! {
        <section class="dashboard">
            <Show
                when=move || !profile.with(ProfileLoad::is_loading)
                fallback=move || view! { <p class="dashboard__loading">{i18n.t(MessageKey::CommonLoading)}</p> }
            >
                {move || {
                    profile.with(|load| load.user().cloned()).map(|user| {
                        let greeting = greeting_line(i18n.t(MessageKey::DashboardGreeting), &user.display_name());
                        view! {
                            <header class="dashboard__header">
                                <h1>{greeting}</h1>
                                <p>{i18n.t(MessageKey::DashboardSubtitle)}</p>
                            </header>
                            <article class="dashboard__card">
                                <h2>{i18n.t(MessageKey::DashboardAccountTitle)}</h2>
                                <dl class="dashboard__account">
                                    <dt>"ID"</dt>
                                    <dd>{user.id.clone()}</dd>
                                    <dt>"Email"</dt>
                                    <dd>{user.email.clone()}</dd>
                                </dl>
                                <span class=if user.is_active { "badge badge--active" } else { "badge badge--inactive" }>
                                    {i18n.t(status_key(user.is_active))}
                                </span>
                            </article>
                        }
                    })
                }}
                <article class="dashboard__card dashboard__stacks">
                    <h2>{move || i18n.t(MessageKey::DashboardStacksTitle)}</h2>
                    <p class="dashboard__empty">{move || i18n.t(MessageKey::CommonComingSoon)}</p>
                    <NeonButton disabled=empty_stacks>
                        {move || i18n.t(MessageKey::DashboardStacksCreate)}
                    </NeonButton>
                </article>
            </Show>
        </section>
    }
}
