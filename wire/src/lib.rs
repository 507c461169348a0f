//! HTTP contract between the Stakr frontends and the backend API.
//!
//! This crate owns endpoint paths, request/response bodies, and the mapping
//! from HTTP failures onto the few buckets the UI distinguishes. It carries no
//! transport of its own: the browser client sends requests with `gloo-net`,
//! the CLI with `reqwest`, and both decode through the types defined here.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

mod error;
mod types;

pub use error::{ApiError, Failure, format_backend_error};
pub use types::{LoginForm, RegisterRequest, TokenResponse, User, VersionResponse};

/// Readiness probe; succeeds once the API and its database are up.
pub const READY_PATH: &str = "/ready";
/// OAuth2 password-flow token endpoint (form-encoded body).
pub const TOKEN_PATH: &str = "/auth/token";
/// Account registration endpoint (JSON body).
pub const REGISTER_PATH: &str = "/auth/register";
/// Current-user profile endpoint (bearer-authenticated).
pub const ME_PATH: &str = "/auth/users/me";
/// Backend version endpoint.
pub const VERSION_PATH: &str = "/version";

/// Content type used for the token endpoint body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Join an API base URL and an endpoint path with exactly one slash.
#[must_use]
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if base.is_empty() {
        return format!("/{path}");
    }
    format!("{base}/{path}")
}

/// `Authorization` header value for a stored access token.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
