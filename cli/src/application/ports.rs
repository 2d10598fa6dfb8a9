//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;

use crate::domain::config::NodebootConfig;
use crate::domain::error::FetchError;

// ── HTTP Fetch Port ───────────────────────────────────────────────────────────

/// One bounded-time HTTP GET.
///
/// Implementations must treat any status in `[200, 400)` as success and return
/// the raw body; everything else is a [`FetchError`]. Exactly one request is
/// made per call.
pub trait Fetcher {
    /// Fetch `url`, giving up once `timeout` has elapsed.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on an invalid URL, a transport failure or a
    /// disallowed status code.
    fn get(&self, url: &str, timeout: Duration) -> Result<Vec<u8>, FetchError>;
}

impl<T: Fetcher + ?Sized> Fetcher for &T {
    fn get(&self, url: &str, timeout: Duration) -> Result<Vec<u8>, FetchError> {
        (**self).get(url, timeout)
    }
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts configuration persistence.
pub trait ConfigStore {
    /// Load the configuration, falling back to defaults when none is stored.
    fn load(&self) -> Result<NodebootConfig>;
    /// Persist the given configuration.
    fn save(&self, config: &NodebootConfig) -> Result<()>;
    /// Location of the backing file.
    fn path(&self) -> Result<PathBuf>;
}

// ── Status Port ───────────────────────────────────────────────────────────────

/// Local source of component phases used to judge node readiness.
pub trait PhaseSource {
    /// Current phases, one per component. Must not reach the network.
    fn phases(&self) -> Result<Vec<String>>;
}
