//! Authorized-keys parsing.
//!
//! Lines are `[options] <algorithm> <base64-blob> [comment]`. A line is only
//! accepted when its blob decodes to key data of the named algorithm.

use std::str::FromStr;

use nodeboot_common::KeyRecord;
use ssh_key::authorized_keys::Entry;
use ssh_key::{HashAlg, PublicKey};

use crate::domain::error::KeyExtractError;

/// Parses a single authorized-keys line.
///
/// Returns `None` for blank lines, `#` comments and anything that is not a
/// well-formed key.
#[must_use]
pub fn parse_authorized_key_line(line: &str) -> Option<PublicKey> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    Entry::from_str(line)
        .ok()
        .map(|entry| entry.public_key().clone())
}

/// Parses every valid key in `data`, in source order. Invalid lines are
/// dropped.
#[must_use]
pub fn parse_authorized_keys(data: &[u8]) -> Vec<PublicKey> {
    String::from_utf8_lossy(data)
        .lines()
        .filter_map(parse_authorized_key_line)
        .collect()
}

/// Rejects an empty key collection.
///
/// # Errors
///
/// Returns [`KeyExtractError::NoKeyFound`] if `keys` is empty.
pub fn require_keys(keys: Vec<PublicKey>) -> Result<Vec<PublicKey>, KeyExtractError> {
    if keys.is_empty() {
        return Err(KeyExtractError::NoKeyFound);
    }
    Ok(keys)
}

/// SHA-256 fingerprint in the `SHA256:<base64>` form printed by `ssh-keygen -l`.
#[must_use]
pub fn fingerprint(key: &PublicKey) -> String {
    key.fingerprint(HashAlg::Sha256).to_string()
}

/// Flattens a key into its serializable record.
#[must_use]
pub fn key_record(key: &PublicKey) -> KeyRecord {
    let comment = key.comment();
    KeyRecord {
        algorithm: key.algorithm().as_str().to_string(),
        fingerprint: fingerprint(key),
        comment: (!comment.is_empty()).then(|| comment.to_string()),
        openssh: key.to_openssh().unwrap_or_default(),
    }
}
