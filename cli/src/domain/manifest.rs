//! Flat `key: "value"` manifest rendering.

use std::fmt::Write as _;

/// Renders `pairs` as one `key: "value"` line each, in iteration order.
///
/// Values are wrapped in double quotes but not escaped; callers embedding
/// quotes must escape them beforehand.
#[must_use]
pub fn render_manifest<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut out = String::new();
    for (key, value) in pairs {
        let _ = writeln!(out, "{}: \"{}\"", key.as_ref(), value.as_ref());
    }
    out
}

/// Splits a `KEY=VALUE` command-line assignment on its first `=`.
///
/// # Errors
///
/// Returns an error message if there is no `=` or the key is empty.
pub fn parse_assignment(arg: &str) -> Result<(String, String), String> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{arg}'"))?;
    if key.is_empty() {
        return Err(format!("empty key in '{arg}'"));
    }
    Ok((key.to_string(), value.to_string()))
}
