//! Login form rules.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use wire::{ApiError, Failure, LoginForm};

use super::validate::{is_valid_email, normalize_email};
use crate::messages::{MessageKey, Notice};

/// Raw login field values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

impl LoginInput {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }

    /// Submit is enabled once both fields are filled and the email looks valid.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        let email = self.email.trim();
        !email.is_empty() && !self.password.is_empty() && is_valid_email(email)
    }

    /// Normalize and check the fields before a request.
    ///
    /// # Errors
    ///
    /// Returns the banner key for the first failing field.
    pub fn validate(&self) -> Result<LoginForm, MessageKey> {
        let email = normalize_email(&self.email);
        if email.is_empty() || !is_valid_email(&email) {
            return Err(MessageKey::LoginEmailInvalid);
        }
        if self.password.is_empty() {
            return Err(MessageKey::LoginPasswordRequired);
        }
        Ok(LoginForm::new(&email, &self.password))
    }
}

/// Banner for a failed token request.
#[must_use]
pub fn failure_notice(error: &ApiError) -> Notice {
    match error.failure() {
        Failure::ServerStarting => MessageKey::LoginErrorServerStarting.into(),
        Failure::ServerError => MessageKey::LoginErrorServerError.into(),
        Failure::Rejected { detail: Some(detail), .. } => Notice::Text(detail),
        Failure::Rejected { detail: None, .. } => MessageKey::LoginErrorIncorrectCredentials.into(),
    }
}
