use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse readiness of the local node
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum NodeStatus {
    Ready,
    NotReady,
    #[default]
    Unknown,
}

impl NodeStatus {
    /// Token shown to operators and embedded in manifests.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::NotReady => "not ready",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One authorized key as reported by `nodeboot keys --json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyRecord {
    pub algorithm: String,
    /// SHA-256 fingerprint, e.g. `SHA256:uH4b...`
    pub fingerprint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// The key re-encoded as a single authorized-keys line.
    pub openssh: String,
}

/// Result of fetching authorized keys from a URL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeysOutput {
    pub source: String,
    pub count: usize,
    pub keys: Vec<KeyRecord>,
}

/// Node readiness together with the phases it was derived from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusOutput {
    pub status: NodeStatus,
    pub phases: Vec<String>,
}

/// Canonical cluster server URL
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerUrlOutput {
    pub server_url: String,
}
