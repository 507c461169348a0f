//! Dashboard profile load.
//!
//! The profile is fetched once per dashboard mount. A failure means the stored
//! token is no good, so the owner must log out; this type makes sure it is
//! asked to do so only once.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use wire::{ApiError, User};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ProfileLoad {
    #[default]
    Loading,
    Loaded(User),
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileAction {
    Show,
    ForceLogout,
    /// A late or duplicate result after the load settled.
    Ignore,
}

impl ProfileLoad {
    pub fn apply(&mut self, result: Result<User, ApiError>) -> ProfileAction {
        if !matches!(self, Self::Loading) {
            return ProfileAction::Ignore;
        }
        match result {
            Ok(user) => {
                *self = Self::Loaded(user);
                ProfileAction::Show
            }
            Err(_) => {
                *self = Self::Failed;
                ProfileAction::ForceLogout
            }
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Loaded(user) => Some(user),
            _ => None,
        }
    }
}
