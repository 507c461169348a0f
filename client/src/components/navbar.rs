//! Top navigation bar.
//!
//! Signed-out users get login/signup buttons that open the forms as modals
//! over the current page; signed-in users get a logout button. On narrow
//! screens the actions collapse into a menu that Escape closes.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use flows::messages::MessageKey;
use flows::nav::{Redirect, Route, open_auth_modal};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::language_toggle::LanguageToggle;
use crate::state::auth::Session;
use crate::state::i18n::I18n;
use crate::state::nav::{CurrentLocation, Navigation};

fn brand_href(authenticated: bool) -> &'static str {
    if authenticated { "/dashboard" } else { "/" }
}

fn menu_class(open: bool) -> &'static str {
    if open { "navbar__menu navbar__menu--open" } else { "navbar__menu" }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let i18n = expect_context::<I18n>();
    let session = expect_context::<Session>();
    let navigation = expect_context::<Navigation>();
    let current = expect_context::<CurrentLocation>().0;
    let navigate = use_navigate();
    let menu_open = RwSignal::new(false);

    let authenticated = move || session.flow().with(|f| f.is_authenticated());

    let nav_brand = navigate.clone();
    let on_brand = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        menu_open.set(false);
        navigation.follow(&nav_brand, Redirect::push(brand_href(session.is_authenticated())));
    };

    let nav_modal = navigate.clone();
    let open_form = Callback::new(move |route: Route| {
        menu_open.set(false);
        let redirect = current.with_untracked(|location| open_auth_modal(route, location));
        navigation.follow(&nav_modal, redirect);
    });

    let nav_logout = navigate;
    let on_logout = move |_| {
        menu_open.set(false);
        navigation.follow(&nav_logout, session.logout());
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" && menu_open.get_untracked() {
            menu_open.set(false);
        }
    };

    view! {
        <nav class="navbar" on:keydown=on_keydown>
            <a class="navbar__brand" href=move || brand_href(authenticated()) on:click=on_brand>
                "Stakr"
                <span class="navbar__brand-dot">"."</span>
            </a>
            <button
                type="button"
                class="navbar__burger"
                aria-label=move || i18n.t(MessageKey::NavMenu)
                aria-expanded=move || menu_open.get().to_string()
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
            <div class=move || menu_class(menu_open.get())>
                <LanguageToggle/>
                <Show
                    when=authenticated
                    fallback=move || {
                        view! {
                            <button type="button" class="navbar__action" on:click=move |_| open_form.run(Route::Login)>
                                {move || i18n.t(MessageKey::NavLogin)}
                            </button>
                            <button
                                type="button"
                                class="navbar__action navbar__action--primary"
                                on:click=move |_| open_form.run(Route::Signup)
                            >
                                {move || i18n.t(MessageKey::NavSignup)}
                            </button>
                        }
                    }
                >
                    <button type="button" class="navbar__action" on:click=on_logout.clone()>
                        {move || i18n.t(MessageKey::NavLogout)}
                    </button>
                </Show>
            </div>
        </nav>
    }
}
