//! Weather provider configuration.

use serde::{Deserialize, Serialize};

/// Default forecast endpoint (OpenWeatherMap-compatible 5-day/3-hour API).
fn default_endpoint() -> String {
    "https://api.openweathermap.org/data/2.5/forecast".to_string()
}

/// Default per-call timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WeatherConfig {
    /// Forecast API endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Weather API key.
    #[serde(default)]
    pub api_key: String,

    /// Per-call timeout in seconds. A missing forecast means no badge,
    /// never a failed request.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl WeatherConfig {
    /// Check if live forecast calls can be made.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.endpoint.is_empty() && !self.api_key.is_empty()
    }
}
