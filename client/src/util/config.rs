//! Backend base URL resolution.
//!
//! The host renders the URL into `<meta name="stakr-api-url">`. Static builds
//! fall back to the `STAKR_API_URL` value baked in at compile time, then to a
//! local development backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const API_URL_META: &str = "stakr-api-url";
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Pick the first non-blank candidate, without a trailing slash.
#[must_use]
pub fn resolve_api_base_url(meta: Option<&str>, compiled: Option<&str>) -> String {
    [meta, compiled]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_owned()
}

/// Base URL the browser sends API requests to.
pub fn api_base_url() -> String {
    #[cfg(feature = "hydrate")]
    {
        let meta = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(&format!("meta[name=\"{API_URL_META}\"]")).ok().flatten())
            .and_then(|el| el.get_attribute("content"));
        resolve_api_base_url(meta.as_deref(), option_env!("STAKR_API_URL"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        resolve_api_base_url(None, option_env!("STAKR_API_URL"))
    }
}
