//! API failures and the buckets the UI shows them in.
//!
//! ERROR HANDLING
//! ==============
//! Every transport hands back an [`ApiError`]. Forms never branch on it
//! directly; they ask for its [`Failure`] bucket and render a single banner.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Error returned by any backend call.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// No response was received (network down, CORS, DNS, timeout).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("server responded with status {status}")]
    Status { status: u16, body: Option<Value> },
    /// A 2xx body could not be decoded into the expected type.
    #[error("response decode failed: {0}")]
    Decode(String),
    /// The request body could not be encoded.
    #[error("request encode failed: {0}")]
    Encode(String),
}

/// What the user is told about a failed call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Failure {
    /// 503: the API is still booting.
    ServerStarting,
    /// Any other 5xx, or no usable response at all.
    ServerError,
    /// 4xx, with the backend's `detail` string when it sent one.
    Rejected { status: u16, detail: Option<String> },
}

impl ApiError {
    /// Build a status error from a raw response body. Non-JSON bodies are dropped.
    #[must_use]
    pub fn from_response(status: u16, raw_body: &str) -> Self {
        let body = serde_json::from_str::<Value>(raw_body).ok();
        Self::Status { status, body }
    }

    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The backend's `detail` field when it is a plain string.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Status { body: Some(body), .. } => body
                .get("detail")
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_owned),
            _ => None,
        }
    }

    #[must_use]
    pub fn failure(&self) -> Failure {
        match self {
            Self::Status { status: 503, .. } => Failure::ServerStarting,
            Self::Status { status, .. } if *status >= 500 => Failure::ServerError,
            Self::Status { status, .. } => Failure::Rejected { status: *status, detail: self.detail() },
            Self::Transport(_) | Self::Decode(_) | Self::Encode(_) => Failure::ServerError,
        }
    }

    /// Readable message built from the response body, if there is one.
    #[must_use]
    pub fn backend_message(&self) -> Option<String> {
        match self {
            Self::Status { status, body } => format_backend_error(Some(*status), body.as_ref()),
            _ => None,
        }
    }
}

/// Turn a backend error body into one display line.
///
/// Picks the first present of `detail`, `message`, `error`. A string is
/// percent-decoded when it contains `%XX`, then repaired if it looks like UTF-8
/// that was read as Latin-1. Anything else renders as the body's JSON. The
/// status, when known, is prefixed as `"<status> - "`. Returns `None` when
/// there is no object body to work with.
#[must_use]
pub fn format_backend_error(status: Option<u16>, body: Option<&Value>) -> Option<String> {
    let body = body.filter(|b| b.is_object())?;
    let prefix = status.map(|s| format!("{s} - ")).unwrap_or_default();

    let picked = ["detail", "message", "error"]
        .iter()
        .find_map(|key| body.get(*key).filter(|v| !v.is_null()));

    if let Some(Value::String(text)) = picked {
        let decoded = percent_decode_if_encoded(text);
        let repaired = repair_mojibake(&decoded).unwrap_or(decoded);
        return Some(format!("{prefix}{repaired}"));
    }

    Some(format!("{prefix}{body}"))
}

fn percent_decode_if_encoded(text: &str) -> String {
    if !has_percent_escape(text) {
        return text.to_owned();
    }
    urlencoding::decode(text).map_or_else(|_| text.to_owned(), std::borrow::Cow::into_owned)
}

fn has_percent_escape(text: &str) -> bool {
    text.as_bytes()
        .windows(3)
        .any(|w| w[0] == b'%' && w[1].is_ascii_hexdigit() && w[2].is_ascii_hexdigit())
}

/// Re-decode text whose UTF-8 bytes were interpreted as Latin-1 (`Ã©` -> `é`).
fn repair_mojibake(text: &str) -> Option<String> {
    let chars: Vec<char> = text.chars().collect();
    let suspicious = chars
        .windows(2)
        .any(|w| matches!(w[0], 'Ã' | 'Â') && ('\u{80}'..='\u{FF}').contains(&w[1]));
    if !suspicious {
        return None;
    }

    let bytes = chars
        .iter()
        .map(|c| u8::try_from(u32::from(*c)).ok())
        .collect::<Option<Vec<u8>>>()?;
    let fixed = String::from_utf8(bytes).ok()?;
    fixed
        .chars()
        .any(|c| ('\u{C0}'..='\u{17F}').contains(&c))
        .then_some(fixed)
}
