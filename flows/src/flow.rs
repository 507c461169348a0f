//! Root session controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app root owns one [`AuthFlow`]. It is told about every location change
//! and every login/signup/logout, and answers with what to render or where to
//! navigate. The logging-out flag keeps the dashboard guard from bouncing to
//! `/login` in the frame between clearing the session and landing on `/`.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use crate::nav::{self, DEFAULT_AFTER_LOGIN, Guard, Location, NavState, Outcome, Redirect};
use crate::store::StoreError;
use crate::tokens::SessionTokens;

/// What the root renders for a location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct View {
    pub nav: NavState,
    /// Guard decision for the page area (the background when a modal is open).
    pub page: Outcome,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthFlow {
    authenticated: bool,
    logging_out: bool,
    signed_out_notice: bool,
    redirect_to: String,
}

impl Default for AuthFlow {
    fn default() -> Self {
        Self::new(false)
    }
}

impl AuthFlow {
    #[must_use]
    pub fn new(authenticated: bool) -> Self {
        Self {
            authenticated,
            logging_out: false,
            signed_out_notice: false,
            redirect_to: DEFAULT_AFTER_LOGIN.to_owned(),
        }
    }

    /// Optimistic state from token presence at mount.
    #[must_use]
    pub fn from_tokens(tokens: &SessionTokens) -> Self {
        Self::new(tokens.is_authenticated())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    #[must_use]
    pub fn is_logging_out(&self) -> bool {
        self.logging_out
    }

    #[must_use]
    pub fn signed_out_notice(&self) -> bool {
        self.signed_out_notice
    }

    /// Target the next successful login/signup will navigate to.
    #[must_use]
    pub fn redirect_target(&self) -> &str {
        &self.redirect_to
    }

    #[must_use]
    pub fn guard(&self) -> Guard {
        Guard { authenticated: self.authenticated, logging_out: self.logging_out }
    }

    /// Record a location change: freezes the post-login target and ends the
    /// logout transition once the landing page is reached.
    pub fn observe_location(&mut self, location: &Location) {
        self.redirect_to = location.redirect_target();
        if location.path == "/" {
            self.logging_out = false;
        }
    }

    #[must_use]
    pub fn view(&self, location: &Location) -> View {
        let nav = NavState::from_location(location, self.authenticated);
        let page = nav::resolve(nav.page_location(location), self.guard());
        View { nav, page }
    }

    /// Login or signup stored a token.
    pub fn login_succeeded(&mut self) -> Redirect {
        self.authenticated = true;
        self.logging_out = false;
        Redirect::replace(self.redirect_to.clone())
    }

    /// Sign out: clear both token keys and head to the landing page.
    ///
    /// The in-memory session is signed out even when storage fails; the
    /// storage result is handed back so the caller can report it.
    pub fn logout(&mut self, tokens: &SessionTokens) -> (Redirect, Result<(), StoreError>) {
        self.logging_out = true;
        let cleared = tokens.clear();
        self.authenticated = false;
        self.signed_out_notice = true;
        self.redirect_to = DEFAULT_AFTER_LOGIN.to_owned();
        (Redirect::replace("/"), cleared)
    }

    pub fn dismiss_signed_out_notice(&mut self) {
        self.signed_out_notice = false;
    }
}
