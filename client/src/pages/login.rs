//! Email + password login, rendered as a page or inside the auth modal.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use flows::forms::LoginInput;
use flows::messages::{MessageKey, Notice};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::language_toggle::LanguageToggle;
use crate::components::neon_button::{NeonButton, Variant};
use crate::state::auth::Session;
use crate::state::i18n::I18n;
use crate::state::nav::Navigation;
use crate::util::browser;

pub(crate) fn card_class(modal: bool) -> &'static str {
    if modal { "auth-card auth-card--modal" } else { "auth-card" }
}

fn submit_label(loading: bool) -> MessageKey {
    if loading { MessageKey::LoginSubmitLoading } else { MessageKey::LoginSubmit }
}

#[component]
pub fn LoginPage(#[prop(optional)] modal: bool) -> impl IntoView {
    let i18n = expect_context::<I18n>();
    let session = expect_context::<Session>();
    let navigation = expect_context::<Navigation>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<Notice>);

    let disabled = Signal::derive(move || {
        loading.get() || !LoginInput::new(email.get(), password.get()).can_submit()
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let form = match LoginInput::new(email.get_untracked(), password.get_untracked()).validate() {
            Ok(form) => form,
            Err(key) => {
                error.set(Some(key.into()));
                return;
            }
        };
        email.set(form.username.clone());
        error.set(None);
        loading.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&form).await {
                    Ok(token) => {
                        if let Err(e) = session.store_token(&token.access_token) {
                            leptos::logging::warn!("[login] token not persisted: {e}");
                        }
                        navigation.follow(&navigate, session.login_succeeded());
                    }
                    Err(e) => {
                        leptos::logging::debug_warn!("[login] request failed: {e}");
                        error.set(Some(flows::forms::login::failure_notice(&e)));
                    }
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (form, &navigate, session, navigation);
        }
    };

    let on_cancel = Callback::new(move |()| browser::history_back());

    view! {
        <section class=card_class(modal)>
            <Show when=move || !modal>
                <div class="auth-card__toolbar">
                    <LanguageToggle/>
                </div>
            </Show>
            <header class="auth-card__header">
                <h1>{move || i18n.t(MessageKey::LoginTitle)}<span class="auth-card__dot">"."</span></h1>
                <p>{move || i18n.t(MessageKey::LoginSubtitle)}</p>
            </header>
            <div class="auth-card__error" aria-live="polite">
                {move || error.get().map(|notice| view! { <p class="auth-card__banner">{i18n.render(&notice)}</p> })}
            </div>
            <form class="auth-form" on:submit=on_submit novalidate=true>
                <input
                    class="auth-form__input"
                    type="email"
                    autocomplete="email"
                    placeholder=move || i18n.t(MessageKey::LoginEmailPlaceholder)
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="auth-form__input"
                    type="password"
                    autocomplete="current-password"
                    placeholder=move || i18n.t(MessageKey::LoginPasswordPlaceholder)
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <NeonButton kind="submit" full_width=true disabled=disabled>
                    {move || i18n.t(submit_label(loading.get()))}
                </NeonButton>
                <Show when=move || modal>
                    <NeonButton variant=Variant::Ghost full_width=true on_press=on_cancel>
                        {move || i18n.t(MessageKey::CommonCancel)}
                    </NeonButton>
                </Show>
            </form>
        </section>
    }
}
