//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the session, locale, navigation, and readiness contexts. Until
//! the backend answers `/ready` every route shows the waking-up screen; after
//! that, [`Screen`] resolves the current location through the session's route
//! guard and renders either a page or a page with an auth modal on top.

use flows::locale::LocalePreference;
use flows::messages::MessageKey;
use flows::nav::{Outcome, Route as AppRoute};
use flows::tokens::SessionTokens;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::{BackendVersion, Footer};
use crate::components::modal::Modal;
use crate::components::navbar::Navbar;
use crate::components::page_transition::PageTransition;
use crate::components::server_waking_up::ServerWakingUp;
use crate::components::toast::Toast;
use crate::pages::{
    about::AboutPage, dashboard::DashboardPage, landing::LandingPage, login::LoginPage,
    not_found::NotFoundPage, signup::SignupPage,
};
use crate::state::auth::Session;
use crate::state::i18n::I18n;
use crate::state::nav::{CurrentLocation, Navigation};
use crate::util::browser;
use crate::util::config::API_URL_META;
use crate::util::storage::BrowserStorage;

/// Set once the backend has answered `/ready`.
#[derive(Clone, Copy)]
pub struct BackendReady(pub RwSignal<bool>);

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions, api_base_url: String) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_URL_META content=api_base_url/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = BrowserStorage::shared();
    let session = Session::new(SessionTokens::new(store.clone()));
    let (i18n, locale_subscription) = I18n::new(LocalePreference::new(store));
    let ready = RwSignal::new(false);
    let version = RwSignal::new(None::<String>);

    provide_context(session);
    provide_context(i18n);
    provide_context(Navigation::new());
    provide_context(BackendReady(ready));
    provide_context(BackendVersion(version));
    on_cleanup(move || i18n.unsubscribe(locale_subscription));

    Effect::new(move || i18n.load());
    Effect::new(move || browser::set_document_lang(i18n.locale().code()));

    #[cfg(feature = "hydrate")]
    {
        let mut poll = flows::ready::ReadinessPoll::new();
        let cancel = poll.cancel_handle();
        leptos::task::spawn_local(async move {
            let became_ready = flows::ready::poll_until_ready(
                &mut poll,
                crate::net::api::check_ready,
                gloo_timers::future::sleep,
            )
            .await;
            if !became_ready {
                return;
            }
            leptos::logging::log!("[app] backend ready after {} probe(s)", poll.attempts());
            ready.set(true);
            match crate::net::api::fetch_version().await {
                Ok(body) => version.set(Some(body.version)),
                Err(e) => leptos::logging::warn!("[app] version unavailable: {e}"),
            }
        });
        on_cleanup(move || cancel.cancel());
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/stakr.css"/>
        <Title text="Stakr"/>

        <Router>
            <Routes fallback=|| view! { <Screen/> }>
                <Route path=StaticSegment("") view=Screen/>
                <Route path=StaticSegment("login") view=Screen/>
                <Route path=StaticSegment("signup") view=Screen/>
                <Route path=StaticSegment("dashboard") view=Screen/>
                <Route path=StaticSegment("about") view=Screen/>
                <Route path=WildcardSegment("any") view=Screen/>
            </Routes>
        </Router>
    }
}

/// Waking-up placeholder until the backend is ready, then the routed layout.
#[component]
fn Screen() -> impl IntoView {
    let ready = expect_context::<BackendReady>().0;

    view! {
        <Show when=move || ready.get() fallback=|| view! { <ServerWakingUp/> }>
            <Layout/>
        </Show>
    }
}

#[component]
fn Layout() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigation = expect_context::<Navigation>();
    let i18n = expect_context::<I18n>();
    let navigate = use_navigate();
    let pathname = use_location().pathname;

    let current = Memo::new(move |_| navigation.location(&pathname.get()));
    provide_context(CurrentLocation(current));

    Effect::new(move || {
        let location = current.get();
        session.observe_location(&location);
        navigation.observe(&location.path);
    });

    let resolved = Memo::new(move |_| {
        let location = current.get();
        session.flow().with(|flow| flow.view(&location))
    });

    Effect::new(move || {
        if let Outcome::Redirect(redirect) = resolved.get().page {
            leptos::logging::log!("[guard] {} -> {}", current.get_untracked().path, redirect.to);
            navigation.follow(&navigate, redirect);
        }
    });

    let page = Memo::new(move |_| match resolved.get().page {
        Outcome::Render(route) => Some(route),
        Outcome::Redirect(_) => None,
    });
    let modal = Memo::new(move |_| resolved.with(|view| view.nav.modal_route()));
    let signed_out = Memo::new(move |_| session.flow().with(|flow| flow.signed_out_notice()));

    let close_modal = Callback::new(move |()| browser::history_back());
    let toast_done = Callback::new(move |()| session.dismiss_signed_out_notice());

    view! {
        <div class="app-layout">
            <Navbar/>
            <PageTransition>
                {move || page.get().map(|route| render_route(route, false))}
            </PageTransition>
            <Footer/>
            {move || {
                modal
                    .get()
                    .map(|route| {
                        view! { <Modal on_close=close_modal>{render_route(route, true)}</Modal> }
                    })
            }}
            <Show when=move || signed_out.get()>
                <Toast
                    message=Signal::derive(move || i18n.t(MessageKey::CommonSignedOut).to_owned())
                    on_done=toast_done
                />
            </Show>
        </div>
    }
}

fn render_route(route: AppRoute, in_modal: bool) -> AnyView {
    match route {
        AppRoute::Landing => view! { <LandingPage/> }.into_any(),
        AppRoute::Login => view! { <LoginPage modal=in_modal/> }.into_any(),
        AppRoute::Signup => view! { <SignupPage modal=in_modal/> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage/> }.into_any(),
        AppRoute::About => view! { <AboutPage/> }.into_any(),
        AppRoute::NotFound => view! { <NotFoundPage/> }.into_any(),
    }
}
