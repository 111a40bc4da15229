//! # scout-providers
//!
//! HTTP clients for the external capabilities Scout consumes:
//! - web search (`search(query, limit) -> hits`)
//! - weather forecast (`forecast(lat, lng, date) -> sample`)
//!
//! Both capabilities degrade instead of failing: transport errors, bad
//! statuses, and timeouts surface as [`SearchOutcome::Unavailable`] or a
//! missing forecast, never as a request failure. `demo` mode serves
//! deterministic canned data through the same interfaces so the whole
//! pipeline runs offline.

pub mod demo;
pub mod search;
pub mod weather;

mod error;
mod http;

pub use demo::DemoProvider;
pub use error::ProviderError;

use chrono::NaiveDate;
use scout_config::{SearchConfig, WeatherConfig};
use scout_core::entities::{RawHit, WeatherSample};

// ── Outcomes ───────────────────────────────────────────────────────

/// Result of one per-type search, with provider failure modeled explicitly
/// so downstream code handles every case instead of relying on sentinels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The provider answered; zero hits is a valid answer.
    Hits(Vec<RawHit>),
    /// The provider was unavailable and a synthetic fallback hit stands in.
    /// Cards built from it carry reduced confidence and a fallback note.
    Degraded(RawHit),
    /// The provider was unavailable and no fallback has been attached yet.
    Unavailable,
}

// ── Capabilities ───────────────────────────────────────────────────

/// The search capability consumed by the orchestrator.
#[allow(async_fn_in_trait)]
pub trait SearchCapability {
    /// Issue one search. Never errors: provider failure is `Unavailable`.
    async fn search(&self, query: &str, limit: usize) -> SearchOutcome;
}

/// The weather capability consumed by the card builder.
#[allow(async_fn_in_trait)]
pub trait ForecastCapability {
    /// One daily sample for the coordinates, `None` when the forecast is
    /// unobtainable or does not cover `date`.
    async fn forecast(&self, lat: f64, lng: f64, date: NaiveDate) -> Option<WeatherSample>;
}

// ── Client ─────────────────────────────────────────────────────────

/// Live HTTP client for both capabilities.
pub struct ProviderClient {
    http: reqwest::Client,
    search_config: SearchConfig,
    weather_config: WeatherConfig,
}

impl ProviderClient {
    /// Create a new provider client.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(search_config: SearchConfig, weather_config: WeatherConfig) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("scout/0.1")
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("reqwest client should build"),
            search_config,
            weather_config,
        }
    }
}

impl SearchCapability for ProviderClient {
    async fn search(&self, query: &str, limit: usize) -> SearchOutcome {
        let timeout = std::time::Duration::from_secs(self.search_config.timeout_secs);
        match tokio::time::timeout(timeout, self.search_web(query, limit)).await {
            Ok(Ok(hits)) => SearchOutcome::Hits(hits),
            Ok(Err(e)) => {
                tracing::warn!(query, %e, "search provider unavailable");
                SearchOutcome::Unavailable
            }
            Err(_) => {
                tracing::warn!(query, timeout_secs = timeout.as_secs(), "search timed out");
                SearchOutcome::Unavailable
            }
        }
    }
}

impl ForecastCapability for ProviderClient {
    async fn forecast(&self, lat: f64, lng: f64, date: NaiveDate) -> Option<WeatherSample> {
        let timeout = std::time::Duration::from_secs(self.weather_config.timeout_secs);
        let daily = match tokio::time::timeout(timeout, self.forecast_daily(lat, lng)).await {
            Ok(Ok(daily)) => daily,
            Ok(Err(e)) => {
                tracing::warn!(lat, lng, %e, "weather provider unavailable");
                return None;
            }
            Err(_) => {
                tracing::warn!(lat, lng, "weather forecast timed out");
                return None;
            }
        };
        daily
            .into_iter()
            .find(|(day, _)| *day == date)
            .map(|(_, sample)| sample)
    }
}
