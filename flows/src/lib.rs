//! Session, navigation, and form flows for the Stakr frontends.
//!
//! This crate is UI-framework agnostic: the Leptos client wraps these types
//! in signals and the CLI drives them directly. Browser globals never appear
//! here; persistence goes through the injected [`store::KeyValueStore`].

pub mod direction;
pub mod flow;
pub mod forms;
pub mod listeners;
pub mod locale;
pub mod messages;
pub mod nav;
pub mod profile;
pub mod ready;
pub mod store;
pub mod tokens;
