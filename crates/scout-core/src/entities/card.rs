use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{OpportunityType, WeatherBadge};

/// One canonical, scored opportunity. Created once by the card builder and
/// never mutated afterwards.
///
/// Invariants enforced at construction:
/// - `fit_score` ∈ [0, 100]
/// - `roi_est = est_revenue − cost` when both are present; all three
///   financial fields are null together otherwise
/// - `weather_badge` is only ever set for weather-eligible types with a
///   known location and an obtainable forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OpportunityCard {
    pub title: String,
    #[serde(rename = "type")]
    pub ty: OpportunityType,
    pub date: Option<NaiveDate>,
    pub deadline: Option<NaiveDate>,
    pub location: Option<String>,
    pub est_revenue: Option<f64>,
    pub cost: Option<f64>,
    pub roi_est: Option<f64>,
    pub fit_score: u8,
    /// Data quality, 0.0–1.0. Fallback cards are capped at 0.3.
    pub confidence: f64,
    pub weather_badge: Option<WeatherBadge>,
    pub link: String,
    pub provider: String,
    /// `{type}_{hash8(url)}_{millis}` — see [`crate::source_id`].
    pub source_id: String,
    pub notes: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}
