//! Application service — authorized-key retrieval use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! The network call is routed through the injected [`Fetcher`].

use std::time::Duration;

use ssh_key::PublicKey;

use crate::application::ports::Fetcher;
use crate::domain::error::KeyExtractError;
use crate::domain::ssh::{parse_authorized_key_line, require_keys};

/// Timeout for key fetches, sized for metadata-service style endpoints.
pub const KEY_FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Fetch `url` and return every valid authorized key in it, in source order.
///
/// # Errors
///
/// Returns the fetcher's error unchanged if the request fails, or
/// [`KeyExtractError::NoKeyFound`] if the body holds no valid key.
pub fn extract_keys(
    fetcher: &impl Fetcher,
    url: &str,
) -> Result<Vec<PublicKey>, KeyExtractError> {
    extract_keys_with_timeout(fetcher, url, KEY_FETCH_TIMEOUT)
}

/// Same as [`extract_keys`] with a caller-chosen timeout.
///
/// # Errors
///
/// See [`extract_keys`].
pub fn extract_keys_with_timeout(
    fetcher: &impl Fetcher,
    url: &str,
    timeout: Duration,
) -> Result<Vec<PublicKey>, KeyExtractError> {
    tracing::debug!(url, timeout_secs = timeout.as_secs_f64(), "fetching authorized keys");
    let body = fetcher.get(url, timeout)?;

    let text = String::from_utf8_lossy(&body);
    let mut keys = Vec::new();
    for (index, line) in text.lines().enumerate() {
        match parse_authorized_key_line(line) {
            Some(key) => keys.push(key),
            None if !line.trim().is_empty() => {
                tracing::trace!(line = index + 1, "skipping unparseable key line");
            }
            None => {}
        }
    }

    tracing::debug!(url, count = keys.len(), "parsed authorized keys");
    require_keys(keys)
}
