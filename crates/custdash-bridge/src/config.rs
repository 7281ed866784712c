use serde::{Deserialize, Serialize};

/// Base URL of the public JSONPlaceholder API, used when nothing else is
/// configured.
pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com";

/// Default timeout for a single remote request, in milliseconds.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Global application configuration.
///
/// Missing keys in a stored configuration file fall back to their defaults, so
/// older files keep loading after new options are introduced.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the remote REST data source.
    pub api_url: String,
    /// Timeout applied to every remote request, in milliseconds.
    pub request_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl Config {
    /// Replaces the configured API URL with `override_url` when it is set and
    /// not blank.
    pub fn with_api_url_override(mut self, override_url: Option<&str>) -> Self {
        if let Some(url) = override_url.map(str::trim).filter(|url| !url.is_empty()) {
            self.api_url = url.to_owned();
        }
        self
    }
}
