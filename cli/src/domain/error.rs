//! Typed domain error enums.
//!
//! Every failure the core can report has a variant here so callers can match
//! on it. The CLI converts them to `anyhow::Error` with `?` at the edge.

use thiserror::Error;

/// Longest body excerpt kept in a [`FetchError::Status`].
pub const BODY_EXCERPT_LIMIT: usize = 1024;

// ── Fetch errors ──────────────────────────────────────────────────────────────

/// Failure of a single HTTP GET.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to fetch {url}: {reason}")]
    Transport { url: String, reason: String },

    #[error("got {code} status code from {url}, body: {body}")]
    Status { code: u16, url: String, body: String },
}

impl FetchError {
    /// Build a status error, truncating `body` to [`BODY_EXCERPT_LIMIT`] bytes.
    #[must_use]
    pub fn status(code: u16, url: &str, body: &str) -> Self {
        Self::Status {
            code,
            url: url.to_string(),
            body: excerpt(body, BODY_EXCERPT_LIMIT).to_string(),
        }
    }

    /// HTTP status code, if the server answered at all.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Cut `text` to at most `limit` bytes without splitting a character.
#[must_use]
pub fn excerpt(text: &str, limit: usize) -> &str {
    if text.len() <= limit {
        return text;
    }
    let mut end = limit;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

// ── Key extraction errors ─────────────────────────────────────────────────────

/// Failure to obtain at least one authorized key from a URL.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyExtractError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("ssh: no key found")]
    NoKeyFound,
}

// ── Server URL errors ─────────────────────────────────────────────────────────

/// Failure to derive a server URL from environment data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServerUrlError {
    #[error("{0} not found in environment data")]
    VariableNotFound(String),

    #[error("invalid server URL {value:?}: {reason}")]
    InvalidUrl { value: String, reason: String },
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration key/value validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value for {key}: {value}\n\nExpected: {expected}")]
    InvalidValue {
        key: String,
        value: String,
        expected: String,
    },
}
