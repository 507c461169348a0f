//! Navigation state that rides along with router navigations.
//!
//! DESIGN
//! ======
//! The router only tracks paths. The `from` origin and the modal background
//! are remembered here, keyed by the destination path, right before each
//! in-app navigation. Back/forward to a remembered path restores its state,
//! the same way a history entry would.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use std::collections::HashMap;

use flows::direction::{Direction, DirectionTracker};
use flows::nav::{Location, LocationState, Redirect, normalize_path};
use leptos::prelude::*;
use leptos_router::NavigateOptions;

/// Remembered state per destination path.
#[derive(Clone, Debug, Default)]
pub struct NavStates {
    by_path: HashMap<String, LocationState>,
}

impl NavStates {
    pub fn remember(&mut self, to: &str, state: LocationState) {
        self.by_path.insert(normalize_path(to).to_owned(), state);
    }

    /// Location for `path` with whatever state was remembered for it.
    #[must_use]
    pub fn location(&self, path: &str) -> Location {
        let key = normalize_path(path);
        let state = self.by_path.get(key).cloned().unwrap_or_default();
        Location::with_state(key, state)
    }
}

/// Router-side navigation context: remembered states plus the inferred
/// transition direction.
#[derive(Clone, Copy)]
pub struct Navigation {
    states: StoredValue<NavStates>,
    tracker: StoredValue<DirectionTracker>,
    last_seen: StoredValue<Option<String>>,
    direction: RwSignal<Direction>,
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigation {
    pub fn new() -> Self {
        Self {
            states: StoredValue::new(NavStates::default()),
            tracker: StoredValue::new(DirectionTracker::default()),
            last_seen: StoredValue::new(None),
            direction: RwSignal::new(Direction::Forward),
        }
    }

    pub fn location(&self, path: &str) -> Location {
        self.states.with_value(|states| states.location(path))
    }

    /// Record a location change for the page transition. Repeated reports
    /// of the same path are ignored.
    pub fn observe(&self, path: &str) {
        if self.last_seen.with_value(|last| last.as_deref() == Some(path)) {
            return;
        }
        self.last_seen.set_value(Some(path.to_owned()));
        let mut direction = Direction::Forward;
        self.tracker.update_value(|tracker| direction = tracker.observe(path));
        self.direction.set(direction);
    }

    pub fn direction(&self) -> Direction {
        self.direction.get()
    }

    /// Remember the redirect's state, then navigate.
    pub fn follow<F>(&self, navigate: &F, redirect: Redirect)
    where
        F: Fn(&str, NavigateOptions),
    {
        let Redirect { to, replace, state } = redirect;
        self.states.update_value(|states| states.remember(&to, state));
        navigate(&to, NavigateOptions { replace, ..NavigateOptions::default() });
    }
}

/// The resolved current location, provided by the route screen.
#[derive(Clone, Copy)]
pub struct CurrentLocation(pub Memo<Location>);
