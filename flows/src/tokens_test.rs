use std::sync::Mutex;

use super::*;
use crate::store::{KeyValueStore, MemoryStore};

fn tokens() -> (Arc<MemoryStore>, SessionTokens) {
    let store = Arc::new(MemoryStore::new());
    let tokens = SessionTokens::new(store.clone());
    (store, tokens)
}

#[test]
fn empty_token_is_not_authenticated() {
    let (store, tokens) = tokens();
    assert!(!tokens.is_authenticated());
    store.set(ACCESS_TOKEN_KEY, "").unwrap();
    assert!(!tokens.is_authenticated());
    assert_eq!(tokens.access_token(), None);
}

#[test]
fn storing_token_authenticates_and_notifies() {
    let (_, tokens) = tokens();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    tokens.subscribe(move |e| sink.lock().unwrap().push(*e));

    tokens.store_access_token("abc").unwrap();

    assert_eq!(tokens.access_token().as_deref(), Some("abc"));
    assert_eq!(*seen.lock().unwrap(), [SessionEvent::SignedIn]);
}

#[test]
fn clear_removes_both_keys() {
    let (store, tokens) = tokens();
    store.set(ACCESS_TOKEN_KEY, "a").unwrap();
    store.set(REFRESH_TOKEN_KEY, "r").unwrap();
    store.set("locale", "en").unwrap();

    tokens.clear().unwrap();

    let keys: Vec<_> = store.entries().into_keys().collect();
    assert_eq!(keys, ["locale"]);
    assert!(!tokens.is_authenticated());
}

#[test]
fn unsubscribed_listener_is_silent() {
    let (_, tokens) = tokens();
    let seen = Arc::new(Mutex::new(0));
    let sink = Arc::clone(&seen);
    let sub = tokens.subscribe(move |_| *sink.lock().unwrap() += 1);
    assert!(tokens.unsubscribe(sub));
    tokens.clear().unwrap();
    assert_eq!(*seen.lock().unwrap(), 0);
}
