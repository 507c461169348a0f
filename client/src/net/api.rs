//! REST calls to the Stakr backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs that report a transport error, since the API is
//! only called from the browser.
//!
//! Every request carries `Authorization: Bearer <token>` when an access token
//! is stored, and omits the header otherwise. Debug builds log each request
//! and response to the console.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`ApiError::Status`] with the parsed JSON body so
//! callers can classify them; nothing here panics or retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use serde::de::DeserializeOwned;
use wire::{ApiError, LoginForm, RegisterRequest, TokenResponse, User, VersionResponse};

#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
}

#[cfg(any(test, feature = "hydrate"))]
impl Verb {
    fn label(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

#[cfg(feature = "hydrate")]
enum Body {
    Empty,
    Form(String),
    Json(String),
}

#[cfg(any(test, feature = "hydrate"))]
fn request_log_line(verb: Verb, path: &str, authorized: bool) -> String {
    let auth = if authorized { "bearer" } else { "anonymous" };
    format!("[api] -> {} {path} ({auth})", verb.label())
}

#[cfg(any(test, feature = "hydrate"))]
fn response_log_line(verb: Verb, path: &str, status: u16) -> String {
    format!("[api] <- {} {path} {status}", verb.label())
}

#[cfg(any(test, feature = "hydrate"))]
fn auth_header(token: Option<&str>) -> Option<String> {
    token.filter(|t| !t.is_empty()).map(wire::bearer)
}

#[cfg(any(test, feature = "hydrate"))]
/// Map a status and raw body onto success text or an [`ApiError`].
fn check_status(status: u16, body: String) -> Result<String, ApiError> {
    if (200..300).contains(&status) {
        Ok(body)
    } else {
        Err(ApiError::from_response(status, &body))
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn stored_token() -> Option<String> {
    flows::tokens::SessionTokens::new(crate::util::storage::BrowserStorage::shared()).access_token()
}

#[cfg(feature = "hydrate")]
async fn send(verb: Verb, path: &str, body: Body) -> Result<String, ApiError> {
    use gloo_net::http::RequestBuilder;

    let url = wire::endpoint_url(&crate::util::config::api_base_url(), path);
    let token = stored_token();
    if cfg!(debug_assertions) {
        leptos::logging::log!("{}", request_log_line(verb, path, token.is_some()));
    }

    let mut builder = match verb {
        Verb::Get => RequestBuilder::new(&url).method(gloo_net::http::Method::GET),
        Verb::Post => RequestBuilder::new(&url).method(gloo_net::http::Method::POST),
    };
    if let Some(value) = auth_header(token.as_deref()) {
        builder = builder.header("Authorization", &value);
    }
    let request = match body {
        Body::Empty => builder.build(),
        Body::Form(text) => builder.header("Content-Type", wire::FORM_CONTENT_TYPE).body(text),
        Body::Json(text) => builder.header("Content-Type", "application/json").body(text),
    }
    .map_err(|e| ApiError::Transport(e.to_string()))?;

    let response = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = response.status();
    if cfg!(debug_assertions) {
        leptos::logging::log!("{}", response_log_line(verb, path, status));
    }
    let text = response.text().await.unwrap_or_default();
    check_status(status, text)
}

#[cfg(not(feature = "hydrate"))]
fn unavailable<T>() -> Result<T, ApiError> {
    Err(ApiError::Transport("not available on server".to_owned()))
}

/// Probe `GET /ready`. Any non-2xx status or transport error reads as not ready.
pub async fn check_ready() -> bool {
    #[cfg(feature = "hydrate")]
    {
        send(Verb::Get, wire::READY_PATH, Body::Empty).await.is_ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Exchange credentials for an access token via `POST /auth/token`.
///
/// # Errors
///
/// Returns the classified [`ApiError`] for transport, status, or decode failures.
pub async fn login(form: &LoginForm) -> Result<TokenResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = form.encode()?;
        let text = send(Verb::Post, wire::TOKEN_PATH, Body::Form(body)).await?;
        decode(&text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        unavailable()
    }
}

/// Create an account via `POST /auth/register`.
///
/// # Errors
///
/// Returns the classified [`ApiError`]; a 400 means the email is taken.
pub async fn register(request: &RegisterRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::to_string(request).map_err(|e| ApiError::Encode(e.to_string()))?;
        send(Verb::Post, wire::REGISTER_PATH, Body::Json(body)).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        unavailable()
    }
}

/// Fetch the signed-in user's profile from `GET /auth/users/me`.
///
/// # Errors
///
/// Returns the classified [`ApiError`]; callers treat any error as an invalid session.
pub async fn fetch_me() -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let text = send(Verb::Get, wire::ME_PATH, Body::Empty).await?;
        decode(&text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        unavailable()
    }
}

/// Fetch the backend version from `GET /version`.
///
/// # Errors
///
/// Returns the classified [`ApiError`].
pub async fn fetch_version() -> Result<VersionResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let text = send(Verb::Get, wire::VERSION_PATH, Body::Empty).await?;
        decode(&text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        unavailable()
    }
}
