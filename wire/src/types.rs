//! Request and response bodies.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::ApiError;

/// Credentials for the OAuth2 password flow, sent form-encoded.
///
/// The backend names the email field `username`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    #[must_use]
    pub fn new(email: &str, password: &str) -> Self {
        Self { username: email.to_owned(), password: password.to_owned() }
    }

    /// Encode as an `application/x-www-form-urlencoded` body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if serialization fails.
    pub fn encode(&self) -> Result<String, ApiError> {
        serde_urlencoded::to_string(self).map_err(|e| ApiError::Encode(e.to_string()))
    }
}

/// Successful token endpoint response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Registration payload. `job_title` serializes as `null` when absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub job_title: Option<String>,
    pub email: String,
    pub password: String,
}

/// Profile returned by `/auth/users/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Numeric on older backends, UUID string on newer ones.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl User {
    /// Name used in greetings: first name, else the email local part.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self.first_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_owned(),
            _ => self.email.split('@').next().unwrap_or_default().to_owned(),
        }
    }
}

/// Body of `/version`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct VersionResponse {
    pub version: String,
}

fn default_active() -> bool {
    true
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => Ok(number.to_string()),
        serde_json::Value::String(text) => Ok(text),
        _ => Err(D::Error::custom("expected number or string id")),
    }
}
