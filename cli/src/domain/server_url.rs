//! Cluster server URL canonicalization.
//!
//! Pure string handling: nothing here resolves hosts or opens connections.

use std::net::Ipv6Addr;

use nodeboot_common::{ALTERNATE_PORT, DEFAULT_API_PORT, DEFAULT_SCHEME, K3S_URL_VAR};
use url::Url;

use crate::domain::error::ServerUrlError;

/// Returns `true` if `input` already carries an `http` or `https` scheme.
#[must_use]
pub fn has_scheme(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

/// Qualifies a bare host or IP as `https://<host>:6443`.
///
/// Input that already has a scheme is returned unchanged, so applying this
/// twice is the same as applying it once.
///
/// Bare IPv6 literals are the one departure from plain concatenation: they
/// are bracketed (`https://[fd00::1]:6443`), since `https://fd00::1:6443`
/// is not a URL.
#[must_use]
pub fn format_server_url(input: &str) -> String {
    if has_scheme(input) {
        return input.to_string();
    }
    if input.parse::<Ipv6Addr>().is_ok() {
        return format!("{DEFAULT_SCHEME}://[{input}]:{DEFAULT_API_PORT}");
    }
    format!("{DEFAULT_SCHEME}://{input}:{DEFAULT_API_PORT}")
}

/// Iterates the `KEY=VALUE` assignments of an environment blob.
///
/// Keys and values are trimmed; lines without `=` are skipped.
pub fn env_assignments(text: &str) -> impl Iterator<Item = (&str, &str)> {
    text.lines().filter_map(|line| {
        let (key, value) = line.split_once('=')?;
        Some((key.trim(), value.trim()))
    })
}

/// Looks up `name` in an environment blob. The last assignment wins.
#[must_use]
pub fn lookup_env_var<'a>(text: &'a str, name: &str) -> Option<&'a str> {
    env_assignments(text)
        .filter(|(key, _)| *key == name)
        .map(|(_, value)| value)
        .last()
}

/// Rewrites the port of `raw` to `port`, keeping scheme, host and path.
///
/// A value without `://` is a bare host and is qualified with
/// [`format_server_url`] first. Anything else must parse as an `http` or
/// `https` URL as-is; the scheme is matched case-insensitively.
///
/// # Errors
///
/// Returns [`ServerUrlError::InvalidUrl`] if the value does not parse as an
/// `http`/`https` URL with a host.
pub fn remap_port(raw: &str, port: u16) -> Result<String, ServerUrlError> {
    let invalid = |reason: String| ServerUrlError::InvalidUrl {
        value: raw.to_string(),
        reason,
    };

    let parsed = if raw.contains("://") {
        Url::parse(raw)
    } else {
        Url::parse(&format_server_url(raw))
    };
    let mut url = parsed.map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {:?}", url.scheme())));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid("missing host".to_string()));
    }
    url.set_port(Some(port))
        .map_err(|()| invalid("URL cannot carry a port".to_string()))?;

    let mut out = String::from(url.as_str());
    // `Url` always serializes an empty path as "/"; keep the bare form.
    if url.path() == "/" && url.query().is_none() && url.fragment().is_none() {
        out.truncate(out.trim_end_matches('/').len());
    }
    Ok(out)
}

/// Derives the alternate-service URL from environment data.
///
/// Finds `K3S_URL` and swaps its port for the alternate port (8443).
///
/// # Errors
///
/// Returns [`ServerUrlError::VariableNotFound`] if `K3S_URL` is absent and
/// [`ServerUrlError::InvalidUrl`] if its value is not a usable URL.
pub fn server_url_from_env_data(data: &[u8]) -> Result<String, ServerUrlError> {
    let text = String::from_utf8_lossy(data);
    let value = lookup_env_var(&text, K3S_URL_VAR)
        .ok_or_else(|| ServerUrlError::VariableNotFound(K3S_URL_VAR.to_string()))?;
    remap_port(value, ALTERNATE_PORT)
}
