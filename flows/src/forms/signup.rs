//! Signup form state machine.
//!
//! DESIGN
//! ======
//! Field errors live in an ordered map keyed by [`ErrorSlot`]; only the first
//! one in slot order is shown (see [`SignupForm::active_error`]). Typing into
//! a field clears its error once the new value is valid, blurring a field
//! formats it and re-validates it, and submit re-validates everything in slot
//! order and stops at the first failure.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use std::collections::BTreeMap;

use wire::{ApiError, Failure, RegisterRequest};

use super::validate::{
    PASSWORD_MIN_CHARS, format_last_name, is_valid_email, is_valid_first_name_format, is_valid_name,
    normalize_email, title_case,
};
use crate::messages::{MessageKey, Notice};

/// Input fields, used to mark which inputs an error points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    JobTitle,
    Email,
    ConfirmEmail,
    Password,
    ConfirmPassword,
}

/// Error slots in display priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorSlot {
    FirstName,
    LastName,
    JobTitle,
    /// The email field; the backend calls it `username`.
    Username,
    EmailMismatch,
    ConfirmEmail,
    Password,
    ConfirmPassword,
}

impl ErrorSlot {
    /// DOM id of the element rendering this error.
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Self::FirstName => "signup-error-first_name",
            Self::LastName => "signup-error-last_name",
            Self::JobTitle => "signup-error-job_title",
            Self::Username => "signup-error-username",
            Self::EmailMismatch => "signup-error-emails",
            Self::ConfirmEmail => "signup-error-confirm_email",
            Self::Password | Self::ConfirmPassword => "signup-error-passwords",
        }
    }

    /// Inputs marked invalid while this error is active.
    #[must_use]
    pub fn fields(self) -> &'static [Field] {
        match self {
            Self::FirstName => &[Field::FirstName],
            Self::LastName => &[Field::LastName],
            Self::JobTitle => &[Field::JobTitle],
            Self::Username => &[Field::Email],
            Self::EmailMismatch => &[Field::Email, Field::ConfirmEmail],
            Self::ConfirmEmail => &[Field::ConfirmEmail],
            Self::Password => &[Field::Password],
            Self::ConfirmPassword => &[Field::Password, Field::ConfirmPassword],
        }
    }
}

/// The one field error currently on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveError {
    pub slot: ErrorSlot,
    pub message: MessageKey,
}

impl ActiveError {
    #[must_use]
    pub fn element_id(&self) -> &'static str {
        self.slot.element_id()
    }

    #[must_use]
    pub fn marks(&self, field: Field) -> bool {
        self.slot.fields().contains(&field)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    first_name: String,
    last_name: String,
    job_title: String,
    email: String,
    confirm_email: String,
    password: String,
    confirm_password: String,
    show_password: bool,
    loading: bool,
    banner: Option<Notice>,
    errors: BTreeMap<ErrorSlot, MessageKey>,
}

impl SignupForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::JobTitle => &self.job_title,
            Field::Email => &self.email,
            Field::ConfirmEmail => &self.confirm_email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    #[must_use]
    pub fn show_password(&self) -> bool {
        self.show_password
    }

    pub fn toggle_show_password(&mut self) {
        self.show_password = !self.show_password;
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn banner(&self) -> Option<&Notice> {
        self.banner.as_ref()
    }

    #[must_use]
    pub fn error(&self, slot: ErrorSlot) -> Option<MessageKey> {
        self.errors.get(&slot).copied()
    }

    #[must_use]
    pub fn active_error(&self) -> Option<ActiveError> {
        self.errors.iter().next().map(|(slot, message)| ActiveError { slot: *slot, message: *message })
    }

    /// Submit is enabled when required fields are filled, the email is valid,
    /// and both confirmations match.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        let email = self.email.trim();
        let confirm = self.confirm_email.trim();
        !self.first_name.trim().is_empty()
            && !self.last_name.trim().is_empty()
            && !email.is_empty()
            && !confirm.is_empty()
            && !self.password.is_empty()
            && !self.confirm_password.is_empty()
            && is_valid_email(email)
            && email.to_lowercase() == confirm.to_lowercase()
            && self.password == self.confirm_password
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.loading || !self.can_submit()
    }

    // Typing

    pub fn set_first_name(&mut self, raw: &str) {
        self.first_name = raw.to_owned();
        if is_valid_name(raw) && is_valid_first_name_format(raw) {
            self.clear(ErrorSlot::FirstName);
        }
    }

    pub fn set_last_name(&mut self, raw: &str) {
        self.last_name = raw.to_owned();
        if is_valid_name(raw) {
            self.clear(ErrorSlot::LastName);
        }
    }

    pub fn set_job_title(&mut self, raw: &str) {
        self.job_title = raw.to_owned();
        self.clear(ErrorSlot::JobTitle);
    }

    pub fn set_email(&mut self, raw: &str) {
        self.email = raw.to_owned();
        let normalized = normalize_email(raw);
        if !normalized.is_empty() && is_valid_email(&normalized) {
            self.clear(ErrorSlot::Username);
        }
        self.clear_email_mismatch_if_fixed();
    }

    pub fn set_confirm_email(&mut self, raw: &str) {
        self.confirm_email = raw.to_owned();
        let normalized = normalize_email(raw);
        if !normalized.is_empty() && is_valid_email(&normalized) {
            self.clear(ErrorSlot::ConfirmEmail);
        }
        self.clear_email_mismatch_if_fixed();
    }

    pub fn set_password(&mut self, raw: &str) {
        self.password = raw.to_owned();
        if raw.chars().count() >= PASSWORD_MIN_CHARS {
            self.clear(ErrorSlot::Password);
        }
        self.clear_password_mismatch_if_fixed();
    }

    pub fn set_confirm_password(&mut self, raw: &str) {
        self.confirm_password = raw.to_owned();
        self.clear_password_mismatch_if_fixed();
    }

    // Blur

    pub fn blur_first_name(&mut self) -> bool {
        self.first_name = title_case(&self.first_name);
        match first_name_error(&self.first_name) {
            Some(key) => self.fail(ErrorSlot::FirstName, key),
            None => self.pass(ErrorSlot::FirstName),
        }
    }

    pub fn blur_last_name(&mut self) -> bool {
        self.last_name = format_last_name(&self.last_name);
        if is_valid_name(&self.last_name) {
            self.pass(ErrorSlot::LastName)
        } else {
            self.fail(ErrorSlot::LastName, MessageKey::SignupLastNameRequired)
        }
    }

    pub fn blur_job_title(&mut self) -> bool {
        self.job_title = title_case(&self.job_title);
        self.pass(ErrorSlot::JobTitle)
    }

    pub fn blur_email(&mut self) -> bool {
        self.email = normalize_email(&self.email);
        if self.email.is_empty() || !is_valid_email(&self.email) {
            self.clear(ErrorSlot::EmailMismatch);
            return self.fail(ErrorSlot::Username, MessageKey::SignupEmailInvalid);
        }
        self.clear(ErrorSlot::Username);
        self.confirm_email = normalize_email(&self.confirm_email);
        if !self.confirm_email.is_empty() && self.confirm_email != self.email {
            self.errors.insert(ErrorSlot::EmailMismatch, MessageKey::SignupEmailMismatch);
        } else {
            self.clear(ErrorSlot::EmailMismatch);
        }
        true
    }

    pub fn blur_confirm_email(&mut self) -> bool {
        self.confirm_email = normalize_email(&self.confirm_email);
        if self.confirm_email.is_empty() || !is_valid_email(&self.confirm_email) {
            self.clear(ErrorSlot::EmailMismatch);
            return self.fail(ErrorSlot::ConfirmEmail, MessageKey::SignupEmailInvalid);
        }
        if normalize_email(&self.email) != self.confirm_email {
            return self.fail(ErrorSlot::EmailMismatch, MessageKey::SignupEmailMismatch);
        }
        self.clear(ErrorSlot::EmailMismatch);
        self.pass(ErrorSlot::ConfirmEmail)
    }

    pub fn blur_password(&mut self) -> bool {
        if let Some(key) = password_error(&self.password) {
            return self.fail(ErrorSlot::Password, key);
        }
        self.clear(ErrorSlot::Password);
        if !self.confirm_password.is_empty() && self.confirm_password != self.password {
            self.errors.insert(ErrorSlot::ConfirmPassword, MessageKey::SignupPasswordMismatch);
        } else {
            self.clear(ErrorSlot::ConfirmPassword);
        }
        true
    }

    pub fn blur_confirm_password(&mut self) -> bool {
        if self.confirm_password.is_empty() || self.confirm_password != self.password {
            return self.fail(ErrorSlot::ConfirmPassword, MessageKey::SignupPasswordMismatch);
        }
        self.pass(ErrorSlot::ConfirmPassword)
    }

    // Submit

    /// Validate everything and, when it passes, enter the loading state and
    /// return the registration payload. Returns `None` after recording the
    /// first failing field.
    pub fn begin_submit(&mut self) -> Option<RegisterRequest> {
        if self.loading {
            return None;
        }
        self.banner = None;
        self.errors.clear();

        let first_name = self.first_name.trim().to_owned();
        let last_name = self.last_name.trim().to_owned();
        let job_title = self.job_title.trim().to_owned();
        self.email = normalize_email(&self.email);

        if let Some(key) = first_name_error(&first_name) {
            self.fail(ErrorSlot::FirstName, key);
            return None;
        }
        if !is_valid_name(&last_name) {
            self.fail(ErrorSlot::LastName, MessageKey::SignupLastNameRequired);
            return None;
        }
        if !is_valid_email(&self.email) {
            self.fail(ErrorSlot::Username, MessageKey::SignupEmailInvalid);
            return None;
        }
        let confirm = normalize_email(&self.confirm_email);
        if confirm.is_empty() || confirm != self.email {
            self.fail(ErrorSlot::EmailMismatch, MessageKey::SignupEmailMismatch);
            return None;
        }
        if let Some(key) = password_error(&self.password) {
            self.fail(ErrorSlot::Password, key);
            return None;
        }
        if self.password != self.confirm_password {
            self.fail(ErrorSlot::ConfirmPassword, MessageKey::SignupPasswordMismatch);
            return None;
        }

        self.loading = true;
        Some(RegisterRequest {
            first_name,
            last_name,
            job_title: (!job_title.is_empty()).then_some(job_title),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }

    /// Leave the loading state and map a failure onto the form.
    pub fn finish_submit(&mut self, result: Result<(), ApiError>) {
        self.loading = false;
        let Err(error) = result else {
            return;
        };
        match (error.failure(), error.status()) {
            (Failure::ServerStarting, _) => {
                self.banner = Some(MessageKey::SignupErrorServerStarting.into());
            }
            (_, Some(400)) => {
                self.errors.insert(ErrorSlot::Username, MessageKey::SignupErrorEmailAlreadyUsed);
            }
            _ => {
                self.banner = Some(
                    error.backend_message().map_or(MessageKey::SignupErrorGeneric.into(), Notice::Text),
                );
            }
        }
    }

    fn fail(&mut self, slot: ErrorSlot, key: MessageKey) -> bool {
        self.errors.insert(slot, key);
        false
    }

    fn pass(&mut self, slot: ErrorSlot) -> bool {
        self.clear(slot);
        true
    }

    fn clear(&mut self, slot: ErrorSlot) {
        self.errors.remove(&slot);
    }

    fn clear_email_mismatch_if_fixed(&mut self) {
        let email = normalize_email(&self.email);
        if !email.is_empty() && email == normalize_email(&self.confirm_email) {
            self.clear(ErrorSlot::EmailMismatch);
        }
    }

    fn clear_password_mismatch_if_fixed(&mut self) {
        if !self.password.is_empty() && self.password == self.confirm_password {
            self.clear(ErrorSlot::ConfirmPassword);
        }
    }
}

fn first_name_error(value: &str) -> Option<MessageKey> {
    if !is_valid_name(value) {
        Some(MessageKey::SignupFirstNameRequired)
    } else if !is_valid_first_name_format(value) {
        Some(MessageKey::SignupFirstNameInvalidFormat)
    } else {
        None
    }
}

fn password_error(value: &str) -> Option<MessageKey> {
    if value.is_empty() {
        Some(MessageKey::SignupPasswordRequired)
    } else if value.chars().count() < PASSWORD_MIN_CHARS {
        Some(MessageKey::SignupPasswordTooShort)
    } else {
        None
    }
}
