//! Web-search provider configuration.

use serde::{Deserialize, Serialize};

/// Default per-call timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Search API endpoint (e.g., `https://api.search.example/v1/search`).
    #[serde(default)]
    pub endpoint: String,

    /// Search API key.
    #[serde(default)]
    pub api_key: String,

    /// Per-call timeout in seconds. A timed-out call degrades to fallback
    /// content instead of failing the request.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SearchConfig {
    /// Check if the search config has the minimum required fields for live
    /// calls. Demo mode works without any of them.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.endpoint.is_empty() && !self.api_key.is_empty()
    }
}
