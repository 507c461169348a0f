//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once by the app root. Pages call into it on login, signup, and
//! logout and follow the [`Redirect`] it hands back; the route screen reads
//! its guard state on every location change.

use flows::flow::AuthFlow;
use flows::nav::{DEFAULT_AFTER_LOGIN, Location, Redirect};
use flows::store::StoreError;
use flows::tokens::SessionTokens;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct Session {
    flow: RwSignal<AuthFlow>,
    tokens: StoredValue<SessionTokens>,
}

impl Session {
    /// Optimistic session from token presence.
    pub fn new(tokens: SessionTokens) -> Self {
        Self { flow: RwSignal::new(AuthFlow::from_tokens(&tokens)), tokens: StoredValue::new(tokens) }
    }

    pub fn flow(&self) -> RwSignal<AuthFlow> {
        self.flow
    }

    pub fn is_authenticated(&self) -> bool {
        self.flow.with(AuthFlow::is_authenticated)
    }

    pub fn observe_location(&self, location: &Location) {
        self.flow.update(|flow| flow.observe_location(location));
    }

    /// Persist a freshly issued access token.
    ///
    /// # Errors
    ///
    /// Returns the storage error when `localStorage` rejects the write.
    pub fn store_token(&self, token: &str) -> Result<(), StoreError> {
        self.tokens.with_value(|tokens| tokens.store_access_token(token))
    }

    /// Mark the session signed in and return the post-login navigation.
    pub fn login_succeeded(&self) -> Redirect {
        self.flow
            .try_update(AuthFlow::login_succeeded)
            .unwrap_or_else(|| Redirect::replace(DEFAULT_AFTER_LOGIN))
    }

    /// Clear tokens and return the navigation to the landing page.
    ///
    /// A storage failure is logged; the in-memory session signs out anyway.
    pub fn logout(&self) -> Redirect {
        leptos::logging::log!("[session] logging out");
        let tokens = self.tokens.get_value();
        let Some((redirect, cleared)) = self.flow.try_update(|flow| flow.logout(&tokens)) else {
            return Redirect::replace("/");
        };
        if let Err(e) = cleared {
            leptos::logging::warn!("[session] tokens not cleared: {e}");
        }
        redirect
    }

    pub fn dismiss_signed_out_notice(&self) {
        self.flow.update(AuthFlow::dismiss_signed_out_notice);
    }
}
