//! Deterministic demo-mode provider.
//!
//! Serves canned hits and a canned forecast through the same capability
//! traits as the live client, so the whole pipeline runs offline. Given the
//! same query and anchor date, the output is identical on every call.

use chrono::{Days, NaiveDate, Utc};

use crate::{ForecastCapability, SearchCapability, SearchOutcome};
use scout_core::entities::{RawHit, WeatherSample};

/// Offline provider for `demo` mode.
#[derive(Debug, Clone)]
pub struct DemoProvider {
    today: NaiveDate,
}

impl Default for DemoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoProvider {
    /// Demo provider anchored at today's date.
    #[must_use]
    pub fn new() -> Self {
        Self {
            today: Utc::now().date_naive(),
        }
    }

    /// Demo provider anchored at a fixed date, for deterministic tests.
    #[must_use]
    pub const fn anchored_at(today: NaiveDate) -> Self {
        Self { today }
    }

    fn slug(query: &str) -> String {
        query
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '-'
                }
            })
            .collect::<String>()
            .split('-')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("-")
    }
}

impl SearchCapability for DemoProvider {
    async fn search(&self, query: &str, limit: usize) -> SearchOutcome {
        let slug = Self::slug(query);
        let hits = (1..=3_u64)
            .take(limit)
            .map(|i| RawHit {
                title: format!("Demo listing {i}: {query}"),
                url: format!("https://demo.scout.invalid/{slug}/{i}"),
                snippet: format!(
                    "Deterministic demo listing for \"{query}\". Applications open."
                ),
                date: self.today.checked_add_days(Days::new(3 * i)),
                provider: Some("demo".to_string()),
            })
            .collect();
        SearchOutcome::Hits(hits)
    }
}

impl ForecastCapability for DemoProvider {
    async fn forecast(&self, _lat: f64, _lng: f64, _date: NaiveDate) -> Option<WeatherSample> {
        // A clear, calm, mild day — classifies as `good`.
        Some(WeatherSample {
            precip_pct: 10.0,
            wind_mph: 8.0,
            temp_f: 72.0,
        })
    }
}
