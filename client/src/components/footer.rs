//! Site footer with the about link and backend version.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use flows::messages::MessageKey;
use flows::nav::Redirect;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::i18n::I18n;
use crate::state::nav::Navigation;

/// Backend version as shown to users, when the backend reported one.
#[derive(Clone, Copy)]
pub struct BackendVersion(pub RwSignal<Option<String>>);

fn version_text(label: &str, version: Option<&str>) -> Option<String> {
    let version = version.map(str::trim).filter(|v| !v.is_empty())?;
    Some(format!("{label} {version}"))
}

#[component]
pub fn Footer() -> impl IntoView {
    let i18n = expect_context::<I18n>();
    let version = expect_context::<BackendVersion>().0;
    let navigation = expect_context::<Navigation>();
    let navigate = use_navigate();

    let on_about = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        navigation.follow(&navigate, Redirect::push("/about"));
    };

    view! {
        <footer class="footer">
            <a class="footer__link" href="/about" on:click=on_about>
                {move || i18n.t(MessageKey::NavAbout)}
            </a>
            <span class="footer__brand">"© Stakr"</span>
            <span class="footer__version">
                {move || version.with(|v| version_text(i18n.t(MessageKey::FooterVersion), v.as_deref()))}
            </span>
        </footer>
    }
}
