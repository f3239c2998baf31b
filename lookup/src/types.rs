//! Public types and internal error taxonomy for the lookup crate.

use std::time::Duration;

/// A resolved state/city pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub state: String,
    pub city: String,
}

/// Lookup transport configuration.
///
/// The endpoint is templated with the PIN as its final path segment. Tests
/// point it at a local mock server; production uses the public postal
/// pincode service.
#[derive(Debug, Clone)]
pub struct LookupConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

pub(crate) const DEFAULT_ENDPOINT: &str = "https://api.postalpincode.in/pincode";
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Why the remote attempt produced no location. Internal only: every
/// variant degrades to the fallback table at the crate boundary.
#[derive(Debug, thiserror::Error)]
pub(crate) enum LookupError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("response body was not in the expected shape")]
    Malformed,
    #[error("service reported no match for the PIN")]
    NotResolved,
}
