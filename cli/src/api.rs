//! REST calls to the Stakr backend over `reqwest`.
//!
//! Mirrors the browser client's calls: the stored access token is attached as
//! a bearer header when present, and every request and response status is
//! logged at debug level.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use flows::tokens::SessionTokens;
use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use wire::{ApiError, LoginForm, RegisterRequest, TokenResponse, User, VersionResponse};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

enum Body {
    Empty,
    Form(String),
    Json(String),
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: SessionTokens,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: &str, tokens: SessionTokens) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned(), tokens })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send(&self, method: Method, path: &str, body: Body) -> Result<String, ApiError> {
        let url = wire::endpoint_url(&self.base_url, path);
        let token = self.tokens.access_token();
        tracing::debug!(%method, path, bearer = token.is_some(), "api request");

        let mut request = self.http.request(method.clone(), url);
        if let Some(value) = token.as_deref().filter(|t| !t.is_empty()).map(wire::bearer) {
            request = request.header(AUTHORIZATION, value);
        }
        request = match body {
            Body::Empty => request,
            Body::Form(text) => request.header(CONTENT_TYPE, wire::FORM_CONTENT_TYPE).body(text),
            Body::Json(text) => request.header(CONTENT_TYPE, "application/json").body(text),
        };

        let response = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        tracing::debug!(%method, path, status, "api response");
        let text = response.text().await.unwrap_or_default();
        if (200..300).contains(&status) { Ok(text) } else { Err(ApiError::from_response(status, &text)) }
    }

    /// Probe `GET /ready`. Any non-2xx status or transport error reads as not ready.
    pub async fn check_ready(&self) -> bool {
        self.send(Method::GET, wire::READY_PATH, Body::Empty).await.is_ok()
    }

    /// # Errors
    ///
    /// Returns the classified [`ApiError`] for transport, status, or decode failures.
    pub async fn login(&self, form: &LoginForm) -> Result<TokenResponse, ApiError> {
        let body = self.send(Method::POST, wire::TOKEN_PATH, Body::Form(form.encode()?)).await?;
        decode(&body)
    }

    /// # Errors
    ///
    /// Returns the classified [`ApiError`]; a 400 means the email is taken.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let json = serde_json::to_string(request).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.send(Method::POST, wire::REGISTER_PATH, Body::Json(json)).await.map(|_| ())
    }

    /// # Errors
    ///
    /// Returns the classified [`ApiError`]; 401 when the stored token is stale.
    pub async fn fetch_me(&self) -> Result<User, ApiError> {
        let body = self.send(Method::GET, wire::ME_PATH, Body::Empty).await?;
        decode(&body)
    }

    /// # Errors
    ///
    /// Returns the classified [`ApiError`] for transport, status, or decode failures.
    pub async fn fetch_version(&self) -> Result<VersionResponse, ApiError> {
        let body = self.send(Method::GET, wire::VERSION_PATH, Body::Empty).await?;
        decode(&body)
    }
}

fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
