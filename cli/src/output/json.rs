//! JSON output helpers.
//!
//! Provides the machine-readable renderer and the error-object formatter used
//! by all `--json` code paths when a command fails.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::domain::error::{ConfigError, FetchError, KeyExtractError, ServerUrlError};

/// Renders output types as pretty-printed JSON on stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    /// Print `value` as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<()> {
        let out = serde_json::to_string_pretty(value).context("JSON serialization failed")?;
        println!("{out}");
        Ok(())
    }
}

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails (should not happen in
/// practice — `serde_json` only fails on non-finite floats and maps with
/// non-string keys, neither of which appear here).
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Stable machine-readable code for an error chain.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    if let Some(e) = err.downcast_ref::<KeyExtractError>() {
        return match e {
            KeyExtractError::NoKeyFound => "NO_KEY_FOUND",
            KeyExtractError::Fetch(f) => fetch_code(f),
        };
    }
    if let Some(e) = err.downcast_ref::<FetchError>() {
        return fetch_code(e);
    }
    if let Some(e) = err.downcast_ref::<ServerUrlError>() {
        return match e {
            ServerUrlError::VariableNotFound(_) => "VARIABLE_NOT_FOUND",
            ServerUrlError::InvalidUrl { .. } => "INVALID_SERVER_URL",
        };
    }
    if err.downcast_ref::<ConfigError>().is_some() {
        return "INVALID_CONFIG";
    }
    "ERROR"
}

fn fetch_code(err: &FetchError) -> &'static str {
    match err {
        FetchError::InvalidUrl { .. } => "INVALID_URL",
        FetchError::Transport { .. } => "TRANSPORT_ERROR",
        FetchError::Status { .. } => "HTTP_STATUS",
    }
}
