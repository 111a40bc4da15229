//! Weather forecast client.
//!
//! Speaks the OpenWeatherMap 5-day/3-hour forecast API in imperial units.
//! The 3-hour slots are aggregated to one sample per day before badge
//! classification: worst-case precipitation probability, mean wind, mean
//! temperature.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate};

use crate::{error::ProviderError, http::check_response, ProviderClient};
use scout_core::entities::WeatherSample;

#[derive(serde::Deserialize)]
struct ForecastResponse {
    list: Vec<ForecastSlot>,
}

#[derive(serde::Deserialize)]
struct ForecastSlot {
    /// Unix timestamp of the slot.
    dt: i64,
    main: SlotMain,
    wind: SlotWind,
    /// Probability of precipitation, 0.0–1.0.
    #[serde(default)]
    pop: f64,
}

#[derive(serde::Deserialize)]
struct SlotMain {
    temp: f64,
}

#[derive(serde::Deserialize)]
struct SlotWind {
    speed: f64,
}

/// Collapse 3-hour slots into one daily sample each: max precipitation
/// probability, mean wind, mean temperature.
fn aggregate_daily(slots: &[ForecastSlot]) -> Vec<(NaiveDate, WeatherSample)> {
    let mut by_day: BTreeMap<NaiveDate, Vec<&ForecastSlot>> = BTreeMap::new();
    for slot in slots {
        let Some(ts) = DateTime::from_timestamp(slot.dt, 0) else {
            continue;
        };
        by_day.entry(ts.date_naive()).or_default().push(slot);
    }

    by_day
        .into_iter()
        .map(|(day, slots)| {
            #[allow(clippy::cast_precision_loss)]
            let n = slots.len() as f64;
            let sample = WeatherSample {
                precip_pct: slots.iter().map(|s| s.pop * 100.0).fold(0.0, f64::max),
                wind_mph: slots.iter().map(|s| s.wind.speed).sum::<f64>() / n,
                temp_f: slots.iter().map(|s| s.main.temp).sum::<f64>() / n,
            };
            (day, sample)
        })
        .collect()
}

impl ProviderClient {
    /// Fetch the forecast for `lat`/`lng` and aggregate it to daily samples.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] if no API key is configured, the HTTP
    /// request fails, the provider returns a non-success status, or the
    /// response cannot be parsed. Callers reach this through
    /// [`ForecastCapability::forecast`](crate::ForecastCapability::forecast),
    /// which maps every error to a missing sample.
    pub async fn forecast_daily(
        &self,
        lat: f64,
        lng: f64,
    ) -> Result<Vec<(NaiveDate, WeatherSample)>, ProviderError> {
        if !self.weather_config.is_configured() {
            return Err(ProviderError::NotConfigured { provider: "weather" });
        }
        let url = format!(
            "{}?lat={lat}&lon={lng}&appid={}&units=imperial",
            self.weather_config.endpoint, self.weather_config.api_key
        );
        let resp = check_response(self.http.get(&url).send().await?).await?;

        let data: ForecastResponse = resp.json().await?;
        Ok(aggregate_daily(&data.list))
    }
}
