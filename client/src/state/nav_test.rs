use flows::nav::{NavState, Route, open_auth_modal};

use super::*;

#[test]
fn unknown_paths_have_empty_state() {
    let states = NavStates::default();
    assert_eq!(states.location("/about"), Location::new("/about"));
    assert_eq!(states.location("").path, "/");
}

#[test]
fn remembered_state_is_keyed_without_query() {
    let mut states = NavStates::default();
    let state = LocationState { from: Some("/dashboard".into()), background: None };
    states.remember("/login?next=1", state.clone());
    assert_eq!(states.location("/login").state, state);
}

#[test]
fn modal_background_round_trips_through_memory() {
    let mut states = NavStates::default();
    let landing = Location::new("/");
    let redirect = open_auth_modal(Route::Signup, &landing);
    states.remember(&redirect.to, redirect.state);

    let location = states.location("/signup");
    assert_eq!(
        NavState::from_location(&location, false),
        NavState::Modal { route: Route::Signup, background: landing }
    );
}

#[test]
fn plain_navigation_overwrites_old_state() {
    let mut states = NavStates::default();
    let modal = open_auth_modal(Route::Login, &Location::new("/"));
    states.remember(&modal.to, modal.state);
    let plain = Redirect::push("/login");
    states.remember(&plain.to, plain.state);
    assert_eq!(states.location("/login"), Location::new("/login"));
}

#[test]
fn trailing_slash_shares_remembered_state() {
    let mut states = NavStates::default();
    let state = LocationState { from: Some("/dashboard".into()), background: None };
    states.remember("/login", state.clone());
    let location = states.location("/login/");
    assert_eq!(location.path, "/login");
    assert_eq!(location.state, state);
}
