//! HTTP infrastructure — implements `Fetcher` with a blocking `ureq` agent.

use std::io::Read;
use std::time::Duration;

use crate::application::ports::Fetcher;
use crate::domain::error::FetchError;

/// Upper bound on how much of a response body is read.
const MAX_BODY_BYTES: u64 = 10 * 1024 * 1024;

/// Production fetcher. Holds no mutable state, so one instance can be shared
/// across threads.
#[derive(Debug, Clone)]
pub struct UreqFetcher {
    user_agent: String,
}

impl UreqFetcher {
    /// Create a fetcher that identifies itself with `user_agent`.
    #[must_use]
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
        }
    }
}

impl Default for UreqFetcher {
    fn default() -> Self {
        Self::new(concat!("nodeboot/", env!("CARGO_PKG_VERSION")))
    }
}

impl Fetcher for UreqFetcher {
    fn get(&self, url: &str, timeout: Duration) -> Result<Vec<u8>, FetchError> {
        url::Url::parse(url).map_err(|e| FetchError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        // The agent-wide timeout covers DNS, connect, redirects and the body.
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(&self.user_agent)
            .build();

        let response = match agent.get(url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(code, response)) => {
                let body = read_body(response).unwrap_or_default();
                return Err(FetchError::status(code, url, &String::from_utf8_lossy(&body)));
            }
            Err(ureq::Error::Transport(t)) => return Err(transport(url, &t)),
        };

        let code = response.status();
        let body = read_body(response).map_err(|e| transport(url, &e))?;
        if !(200..400).contains(&code) {
            return Err(FetchError::status(code, url, &String::from_utf8_lossy(&body)));
        }
        tracing::debug!(url, code, bytes = body.len(), "fetch complete");
        Ok(body)
    }
}

/// Reads the whole body, failing rather than truncating past the cap.
fn read_body(response: ureq::Response) -> std::io::Result<Vec<u8>> {
    let mut body = Vec::new();
    response
        .into_reader()
        .take(MAX_BODY_BYTES + 1)
        .read_to_end(&mut body)?;
    if body.len() as u64 > MAX_BODY_BYTES {
        return Err(std::io::Error::other(format!(
            "response body exceeds {} MiB",
            MAX_BODY_BYTES / (1024 * 1024)
        )));
    }
    Ok(body)
}

fn transport(url: &str, err: &impl std::fmt::Display) -> FetchError {
    FetchError::Transport {
        url: url.to_string(),
        reason: err.to_string(),
    }
}
