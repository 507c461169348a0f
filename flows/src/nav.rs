//! Routes, navigation state, and the route guard.
//!
//! DESIGN
//! ======
//! Login and signup render either as a page or as a modal over the location
//! the user came from. That choice is an explicit union ([`NavState`]) rather
//! than an optional field checked at render time, so both render paths are
//! exhaustive.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Where login/signup send the user when no origin was carried.
pub const DEFAULT_AFTER_LOGIN: &str = "/dashboard";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Login,
    Signup,
    Dashboard,
    About,
    NotFound,
}

impl Route {
    /// Match a path, ignoring query, fragment, and a trailing slash.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        match normalize_path(path) {
            "/" => Self::Landing,
            "/login" => Self::Login,
            "/signup" => Self::Signup,
            "/dashboard" => Self::Dashboard,
            "/about" => Self::About,
            _ => Self::NotFound,
        }
    }

    /// Canonical path. Not-found has none of its own.
    #[must_use]
    pub fn path(self) -> Option<&'static str> {
        match self {
            Self::Landing => Some("/"),
            Self::Login => Some("/login"),
            Self::Signup => Some("/signup"),
            Self::Dashboard => Some("/dashboard"),
            Self::About => Some("/about"),
            Self::NotFound => None,
        }
    }

    #[must_use]
    pub fn is_auth_form(self) -> bool {
        matches!(self, Self::Login | Self::Signup)
    }

    #[must_use]
    pub fn requires_auth(self) -> bool {
        matches!(self, Self::Dashboard)
    }
}

/// Strip query, fragment, and trailing slashes. An empty result is `/`.
#[must_use]
pub fn normalize_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// State carried alongside a navigation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocationState {
    /// Guarded path the user originally asked for.
    pub from: Option<String>,
    /// Location to keep rendering underneath a login/signup modal.
    pub background: Option<Box<Location>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub state: LocationState,
}

impl Location {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), state: LocationState::default() }
    }

    #[must_use]
    pub fn with_state(path: impl Into<String>, state: LocationState) -> Self {
        Self { path: path.into(), state }
    }

    #[must_use]
    pub fn route(&self) -> Route {
        Route::from_path(&self.path)
    }

    /// The carried origin, or the dashboard.
    #[must_use]
    pub fn redirect_target(&self) -> String {
        self.state.from.clone().unwrap_or_else(|| DEFAULT_AFTER_LOGIN.to_owned())
    }
}

/// How the current location is rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavState {
    /// A single routed page.
    Page { route: Route },
    /// An auth form overlaid on a background location.
    Modal { route: Route, background: Location },
}

impl NavState {
    /// A location renders as a modal only when it is an auth form, it carries
    /// a background, and the user is signed out.
    #[must_use]
    pub fn from_location(location: &Location, authenticated: bool) -> Self {
        let route = location.route();
        match &location.state.background {
            Some(background) if route.is_auth_form() && !authenticated => {
                Self::Modal { route, background: background.as_ref().clone() }
            }
            _ => Self::Page { route },
        }
    }

    /// Location driving the main page area.
    #[must_use]
    pub fn page_location<'a>(&'a self, current: &'a Location) -> &'a Location {
        match self {
            Self::Page { .. } => current,
            Self::Modal { background, .. } => background,
        }
    }

    #[must_use]
    pub fn modal_route(&self) -> Option<Route> {
        match self {
            Self::Page { .. } => None,
            Self::Modal { route, .. } => Some(*route),
        }
    }
}

/// A navigation the app must perform instead of rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub to: String,
    /// Replace the current history entry instead of pushing.
    pub replace: bool,
    pub state: LocationState,
}

impl Redirect {
    #[must_use]
    pub fn replace(to: impl Into<String>) -> Self {
        Self { to: to.into(), replace: true, state: LocationState::default() }
    }

    /// Plain forward navigation with empty state.
    #[must_use]
    pub fn push(to: impl Into<String>) -> Self {
        Self { to: to.into(), replace: false, state: LocationState::default() }
    }
}

/// Guard decision for one route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Render(Route),
    Redirect(Redirect),
}

/// Inputs the guard needs from the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Guard {
    pub authenticated: bool,
    pub logging_out: bool,
}

/// Decide whether `location` may render.
#[must_use]
pub fn resolve(location: &Location, guard: Guard) -> Outcome {
    let route = location.route();
    match route {
        Route::Landing | Route::Login | Route::Signup if guard.authenticated => {
            Outcome::Redirect(Redirect::replace(DEFAULT_AFTER_LOGIN))
        }
        Route::Dashboard if guard.logging_out => Outcome::Redirect(Redirect::replace("/")),
        Route::Dashboard if !guard.authenticated => Outcome::Redirect(Redirect {
            to: "/login".to_owned(),
            replace: true,
            state: LocationState { from: Some(location.path.clone()), background: None },
        }),
        _ => Outcome::Render(route),
    }
}

/// Navigation that opens login or signup over `current`.
#[must_use]
pub fn open_auth_modal(route: Route, current: &Location) -> Redirect {
    let to = route.path().unwrap_or("/login").to_owned();
    // Never nest backgrounds: a modal opened from a modal keeps the original page.
    let background = current.state.background.clone().unwrap_or_else(|| Box::new(current.clone()));
    Redirect {
        to,
        replace: false,
        state: LocationState { from: current.state.from.clone(), background: Some(background) },
    }
}
