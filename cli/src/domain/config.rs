//! Domain types and validators for nodeboot configuration.
//!
//! Pure functions only — no I/O, no filesystem access.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const VALID_CONFIG_KEYS: &[&str] = &["fetch.timeout_secs", "status.phase_file"];

/// Bounds for `fetch.timeout_secs`.
pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 300;

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.nodeboot/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NodebootConfig {
    /// Remote key fetching.
    #[serde(default)]
    pub fetch: FetchConfig,
    /// Local status reporting.
    #[serde(default)]
    pub status: StatusConfig,
}

/// Remote fetch settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Whole-request timeout for key fetches, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Status settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusConfig {
    /// File listing component phases, one per line.
    #[serde(default = "default_phase_file")]
    pub phase_file: String,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            phase_file: default_phase_file(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_phase_file() -> String {
    "/var/lib/nodeboot/phases".to_string()
}

impl NodebootConfig {
    /// Read a setting by its dotted key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown.
    pub fn get(&self, key: &str) -> Result<String> {
        validate_config_key(key)?;
        Ok(match key {
            "fetch.timeout_secs" => self.fetch.timeout_secs.to_string(),
            _ => self.status.phase_file.clone(),
        })
    }

    /// Validate and apply a setting by its dotted key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value is invalid.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_config_key(key)?;
        validate_config_value(key, value)?;
        match key {
            "fetch.timeout_secs" => self.fetch.timeout_secs = value.parse()?,
            _ => self.status.phase_file = value.to_string(),
        }
        Ok(())
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a configuration key against the whitelist.
///
/// # Errors
///
/// Returns an error if the key is not in the allowed list.
pub fn validate_config_key(key: &str) -> Result<()> {
    if !VALID_CONFIG_KEYS.contains(&key) {
        return Err(ConfigError::UnknownKey {
            key: key.to_string(),
            valid: VALID_CONFIG_KEYS.join(", "),
        }
        .into());
    }
    Ok(())
}

/// Validates a configuration value for the given key.
///
/// # Errors
///
/// Returns an error if the value is not valid for the key.
pub fn validate_config_value(key: &str, value: &str) -> Result<()> {
    let invalid = |expected: String| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        expected,
    };
    match key {
        "fetch.timeout_secs" => {
            let in_range = value
                .parse::<u64>()
                .is_ok_and(|secs| (MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&secs));
            if !in_range {
                return Err(invalid(format!(
                    "whole seconds between {MIN_TIMEOUT_SECS} and {MAX_TIMEOUT_SECS}"
                ))
                .into());
            }
        }
        "status.phase_file" => {
            if !value.starts_with('/') {
                return Err(invalid("an absolute path".to_string()).into());
            }
        }
        _ => {}
    }
    Ok(())
}

// ── Unit tests ───────────────────────────────────────────────────────────────
