//! Weather badge classification.
//!
//! A pure function over one daily forecast sample. Rules are evaluated in
//! precedence order — first match wins:
//! 1. `good`  — precip < 20 AND wind < 15 AND 55 ≤ temp ≤ 85
//! 2. `mixed` — precip < 50 OR 15 ≤ wind ≤ 25
//! 3. `poor`  — otherwise
//!
//! Whether a badge applies at all (event-like type, known location,
//! obtainable forecast) is the card builder's decision; this module only
//! classifies a sample it is given.

use scout_core::entities::WeatherSample;
use scout_core::enums::WeatherBadge;

/// Classify one forecast sample.
#[must_use]
pub fn classify(sample: WeatherSample) -> WeatherBadge {
    let WeatherSample {
        precip_pct: precip,
        wind_mph: wind,
        temp_f: temp,
    } = sample;

    if precip < 20.0 && wind < 15.0 && (55.0..=85.0).contains(&temp) {
        WeatherBadge::Good
    } else if precip < 50.0 || (15.0..=25.0).contains(&wind) {
        WeatherBadge::Mixed
    } else {
        WeatherBadge::Poor
    }
}
