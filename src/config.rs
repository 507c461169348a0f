//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::HostError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_LOG_FILTER: &str = "stakr=info,tower_http=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Backend base URL handed to the browser, without a trailing slash.
    pub api_url: String,
}

impl HostConfig {
    /// Build host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `STAKR_API_URL`: default `http://localhost:8000`
    pub fn from_env() -> Result<Self, HostError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> Result<Self, HostError> {
        let port = parse_u16("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let api_url = lookup("STAKR_API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_owned())
            .trim()
            .trim_end_matches('/')
            .to_owned();
        Ok(Self { port, api_url })
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_u16(key: &'static str, raw: Option<String>, default: u16) -> Result<u16, HostError> {
    match raw {
        Some(raw) => raw.trim().parse::<u16>().map_err(|_| HostError::InvalidEnv { var: key, value: raw }),
        None => Ok(default),
    }
}
