//! General pipeline configuration.

use scout_core::enums::Mode;
use serde::{Deserialize, Serialize};

/// Default opportunity window in days.
const fn default_window_days() -> u32 {
    14
}

/// Default search radius in miles.
const fn default_radius_miles() -> f64 {
    50.0
}

/// Default per-type result cap.
const fn default_results_per_type() -> usize {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default run mode when a request does not specify one.
    #[serde(default)]
    pub default_mode: Mode,

    /// Opportunity window in days when no profile provides one.
    #[serde(default = "default_window_days")]
    pub window_days: u32,

    /// Search radius in miles when no profile provides one.
    #[serde(default = "default_radius_miles")]
    pub radius_miles: f64,

    /// Maximum cards built per opportunity type.
    #[serde(default = "default_results_per_type")]
    pub results_per_type: usize,

    /// Operator-provided latitude for the operating location. Profiles carry
    /// only a region string; without coordinates the pipeline skips weather
    /// and distance signals instead of erroring.
    #[serde(default)]
    pub lat: Option<f64>,

    /// Operator-provided longitude for the operating location.
    #[serde(default)]
    pub lng: Option<f64>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_mode: Mode::default(),
            window_days: default_window_days(),
            radius_miles: default_radius_miles(),
            results_per_type: default_results_per_type(),
            lat: None,
            lng: None,
        }
    }
}
