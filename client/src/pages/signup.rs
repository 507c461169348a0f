//! Account creation form, rendered as a page or inside the auth modal.
//!
//! DESIGN
//! ======
//! All field rules live in `flows::forms::SignupForm`; this page only routes
//! input/blur events to it and renders its single active error. A successful
//! registration is followed by a token request with the same credentials.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use flows::forms::{ActiveError, Field, SignupForm};
use flows::messages::MessageKey;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::language_toggle::LanguageToggle;
use crate::components::neon_button::{NeonButton, Variant};
use crate::pages::login::card_class;
use crate::state::auth::Session;
use crate::state::i18n::I18n;
use crate::state::nav::Navigation;
use crate::util::browser;

fn apply_input(form: &mut SignupForm, field: Field, value: &str) {
    match field {
        Field::FirstName => form.set_first_name(value),
        Field::LastName => form.set_last_name(value),
        Field::JobTitle => form.set_job_title(value),
        Field::Email => form.set_email(value),
        Field::ConfirmEmail => form.set_confirm_email(value),
        Field::Password => form.set_password(value),
        Field::ConfirmPassword => form.set_confirm_password(value),
    }
}

fn apply_blur(form: &mut SignupForm, field: Field) -> bool {
    match field {
        Field::FirstName => form.blur_first_name(),
        Field::LastName => form.blur_last_name(),
        Field::JobTitle => form.blur_job_title(),
        Field::Email => form.blur_email(),
        Field::ConfirmEmail => form.blur_confirm_email(),
        Field::Password => form.blur_password(),
        Field::ConfirmPassword => form.blur_confirm_password(),
    }
}

fn input_class(active: Option<ActiveError>, field: Field) -> &'static str {
    if active.is_some_and(|error| error.marks(field)) {
        "auth-form__input auth-form__input--invalid"
    } else {
        "auth-form__input"
    }
}

fn input_type(field: Field, show_password: bool) -> &'static str {
    match field {
        Field::Email | Field::ConfirmEmail => "email",
        Field::Password | Field::ConfirmPassword if !show_password => "password",
        _ => "text",
    }
}

fn placeholder(field: Field) -> MessageKey {
    match field {
        Field::FirstName => MessageKey::SignupFirstNamePlaceholder,
        Field::LastName => MessageKey::SignupLastNamePlaceholder,
        Field::JobTitle => MessageKey::SignupJobTitlePlaceholder,
        Field::Email => MessageKey::SignupEmailPlaceholder,
        Field::ConfirmEmail => MessageKey::SignupEmailConfirmPlaceholder,
        Field::Password => MessageKey::SignupPasswordPlaceholder,
        Field::ConfirmPassword => MessageKey::SignupPasswordConfirmPlaceholder,
    }
}

const FIELDS: &[Field] = &[
    Field::FirstName,
    Field::LastName,
    Field::JobTitle,
    Field::Email,
    Field::ConfirmEmail,
    Field::Password,
    Field::ConfirmPassword,
];

#[component]
fn SignupInput(form: RwSignal<SignupForm>, field: Field) -> impl IntoView {
    let i18n = expect_context::<I18n>();
    let active = Memo::new(move |_| form.with(SignupForm::active_error));

    view! {
        <input
            class=move || input_class(active.get(), field)
            type=move || input_type(field, form.with(SignupForm::show_password))
            placeholder=move || i18n.t(placeholder(field))
            aria-invalid=move || active.get().is_some_and(|e| e.marks(field)).to_string()
            prop:value=move || form.with(|f| f.value(field).to_owned())
            on:input=move |ev| form.update(|f| apply_input(f, field, &event_target_value(&ev)))
            on:blur=move |_| form.update(|f| {
                apply_blur(f, field);
            })
        />
    }
}

#[component]
pub fn SignupPage(#[prop(optional)] modal: bool) -> impl IntoView {
    let i18n = expect_context::<I18n>();
    let session = expect_context::<Session>();
    let navigation = expect_context::<Navigation>();
    let navigate = use_navigate();

    let form = RwSignal::new(SignupForm::new());
    let disabled = Signal::derive(move || form.with(SignupForm::is_disabled));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = form.try_update(SignupForm::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let login = wire::LoginForm::new(&request.email, &request.password);
                let result = match crate::net::api::register(&request).await {
                    Ok(()) => crate::net::api::login(&login).await,
                    Err(e) => Err(e),
                };
                match result {
                    Ok(token) => {
                        if let Err(e) = session.store_token(&token.access_token) {
                            leptos::logging::warn!("[signup] token not persisted: {e}");
                        }
                        form.update(|f| f.finish_submit(Ok(())));
                        navigation.follow(&navigate, session.login_succeeded());
                    }
                    Err(e) => {
                        leptos::logging::debug_warn!("[signup] request failed: {e}");
                        form.update(|f| f.finish_submit(Err(e)));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &navigate, session, navigation);
        }
    };

    let on_cancel = Callback::new(move |()| browser::history_back());
    let toggle_password = Callback::new(move |()| form.update(SignupForm::toggle_show_password));

    view! {
        <section class=card_class(modal)>
            <Show when=move || !modal>
                <div class="auth-card__toolbar">
                    <LanguageToggle/>
                </div>
            </Show>
            <header class="auth-card__header">
                <h1>{move || i18n.t(MessageKey::SignupTitle)}<span class="auth-card__dot">"."</span></h1>
                <p>{move || i18n.t(MessageKey::SignupSubtitle)}</p>
            </header>
            <div class="auth-card__error" aria-live="polite">
                {move || {
                    form.with(|f| f.banner().cloned())
                        .map(|notice| view! { <p class="auth-card__banner">{i18n.render(&notice)}</p> })
                }}
            </div>
            <form class="auth-form" on:submit=on_submit novalidate=true>
                {FIELDS.iter().map(|field| view! { <SignupInput form field=*field/> }).collect_view()}
                {move || {
                    form.with(SignupForm::active_error)
                        .map(|error| {
                            view! {
                                <p class="auth-form__field-error" id=error.element_id() role="alert">
                                    {i18n.t(error.message)}
                                </p>
                            }
                        })
                }}
                <button type="button" class="auth-form__reveal" on:click=move |_| toggle_password.run(())>
                    {move || {
                        let key = if form.with(SignupForm::show_password) {
                            MessageKey::SignupHidePassword
                        } else {
                            MessageKey::SignupShowPassword
                        };
                        i18n.t(key)
                    }}
                </button>
                <NeonButton kind="submit" full_width=true disabled=disabled>
                    {move || {
                        let key = if form.with(SignupForm::is_loading) {
                            MessageKey::SignupSubmitLoading
                        } else {
                            MessageKey::SignupSubmit
                        };
                        i18n.t(key)
                    }}
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
