use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One daily forecast sample in imperial units, aggregated by the weather
/// provider from its finer-grained slots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherSample {
    /// Probability of precipitation, 0–100.
    pub precip_pct: f64,
    pub wind_mph: f64,
    pub temp_f: f64,
}
