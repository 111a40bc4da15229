//! Card builder.
//!
//! Normalizes one raw search hit into a canonical [`OpportunityCard`]:
//! best-effort text heuristics for dates and location mentions, then the
//! fit scoring engine, the financial estimator, and the weather badge
//! classifier in sequence. Never fails on malformed text — missing fields
//! become `None`, and only a hit with no usable title or URL is dropped.

use chrono::NaiveDate;

use scout_core::entities::{OpportunityCard, RawHit, Scope};
use scout_core::enums::OpportunityType;
use scout_core::source_id;
use scout_providers::ForecastCapability;

use crate::finance;
use crate::rates::ConversionRateTable;
use crate::scoring;
use crate::weather_badge;

/// The exact note carried by fallback cards, making them identifiable.
pub const FALLBACK_NOTE: &str = "Fallback data - web search unavailable";

/// Confidence ceiling for fallback cards.
pub const FALLBACK_CONFIDENCE: f64 = 0.3;

/// Read-only context shared by every card built for one request.
pub struct CardContext<'a> {
    pub scope: &'a Scope,
    pub rates: &'a ConversionRateTable,
    /// `max_budget` from the opportunities profile.
    pub budget: Option<f64>,
    /// `indoor_only` preference from the opportunities profile.
    pub indoor_only: bool,
    /// The search phrase that produced the hit, cited in card notes.
    pub search_phrase: &'a str,
}

/// Build one card from one raw hit. Returns `None` only for a hit with no
/// usable title or URL (the malformed-hit case — dropped, others proceed).
pub async fn build<F: ForecastCapability>(
    hit: &RawHit,
    ty: OpportunityType,
    fallback: bool,
    ctx: &CardContext<'_>,
    weather: &F,
) -> Option<OpportunityCard> {
    let title = hit.title.trim();
    if title.is_empty() || hit.url.trim().is_empty() {
        tracing::debug!(ty = %ty, url = %hit.url, "dropping malformed hit");
        return None;
    }

    let text = format!("{} {}", hit.title, hit.snippet);
    let date = hit.date.or_else(|| find_date(&hit.snippet));
    let deadline = find_deadline(&hit.snippet);
    let location = mentioned_location(ctx.scope, &text);

    let estimate = finance::estimate(&ctx.scope.industry, ty, ctx.rates, fallback);
    let signals = scoring::evaluate(
        ctx.scope,
        ty,
        &text,
        estimate.map(|e| e.cost),
        ctx.budget,
        estimate.is_some(),
    );

    let weather_badge = match (ty.weather_eligible(), &location, date) {
        (true, Some(_), Some(date)) if ctx.scope.location.has_coords() => {
            let (lat, lng) = (
                ctx.scope.location.lat.unwrap_or_default(),
                ctx.scope.location.lng.unwrap_or_default(),
            );
            weather
                .forecast(lat, lng, date)
                .await
                .map(weather_badge::classify)
        }
        _ => None,
    };

    let (pros, cons) = pros_and_cons(signals, ty, ctx.indoor_only);

    Some(OpportunityCard {
        title: title.to_string(),
        ty,
        date,
        deadline,
        location,
        est_revenue: estimate.map(|e| e.est_revenue),
        cost: estimate.map(|e| e.cost),
        roi_est: estimate.map(|e| e.roi_est),
        fit_score: signals.score(),
        confidence: if fallback {
            FALLBACK_CONFIDENCE
        } else {
            confidence(hit)
        },
        weather_badge,
        link: hit.url.clone(),
        provider: hit
            .provider
            .clone()
            .unwrap_or_else(|| ty.default_provider().to_string()),
        source_id: source_id::source_id(ty, &hit.url),
        notes: if fallback {
            FALLBACK_NOTE.to_string()
        } else {
            let phrase: String = ctx.search_phrase.chars().take(50).collect();
            format!("Found via search: {phrase}")
        },
        pros,
        cons,
    })
}

/// Deterministic data-quality estimate for a real hit: dated, descriptive,
/// provider-attributed hits rate higher. Always within (0.3, 1.0).
fn confidence(hit: &RawHit) -> f64 {
    let mut c = 0.6;
    if hit.date.is_some() {
        c += 0.1;
    }
    if hit.snippet.len() >= 40 {
        c += 0.1;
    }
    if hit.provider.is_some() {
        c += 0.1;
    }
    c
}

/// Scan free text for the first `YYYY-MM-DD` occurrence.
fn find_date(text: &str) -> Option<NaiveDate> {
    let bytes = text.as_bytes();
    for start in 0..bytes.len().saturating_sub(9) {
        if let Some(slice) = text.get(start..start + 10) {
            if let Ok(date) = NaiveDate::parse_from_str(slice, "%Y-%m-%d") {
                return Some(date);
            }
        }
    }
    None
}

/// A deadline is only inferred when the text announces one. The scan runs
/// entirely over the lowercased copy: lowercasing can change byte lengths,
/// so offsets found in it are not valid in the original, while the
/// `YYYY-MM-DD` digits it looks for survive lowercasing unchanged.
fn find_deadline(snippet: &str) -> Option<NaiveDate> {
    let lower = snippet.to_lowercase();
    let marker = ["apply by", "deadline", "due by", "closes"]
        .iter()
        .filter_map(|m| lower.find(m))
        .min()?;
    find_date(&lower[marker..])
}

/// Best-effort location mention: the scope's city (or state) appearing in
/// the candidate text.
fn mentioned_location(scope: &Scope, text: &str) -> Option<String> {
    let haystack = text.to_lowercase();
    let city = scope.location.city.trim();
    let state = scope.location.state.trim();

    if !city.is_empty() && haystack.contains(&city.to_lowercase()) {
        if state.is_empty() {
            return Some(city.to_string());
        }
        return Some(format!("{city}, {state}"));
    }
    if !state.is_empty() && haystack.contains(&state.to_lowercase()) {
        return Some(state.to_string());
    }
    None
}

/// Pros and cons derived from the same signals used for scoring, so every
/// line traces back to a criterion.
fn pros_and_cons(
    signals: scoring::FitSignals,
    ty: OpportunityType,
    indoor_only: bool,
) -> (Vec<String>, Vec<String>) {
    let mut pros = Vec::new();
    let mut cons = Vec::new();

    if signals.industry_match {
        pros.push("Matches your industry".to_string());
    } else {
        cons.push("Industry alignment unclear".to_string());
    }
    if signals.region_match {
        pros.push("Within operating region".to_string());
    } else {
        cons.push("Outside preferred region".to_string());
    }
    if signals.affordable {
        pros.push("Within budget".to_string());
    } else {
        cons.push("Exceeds budget".to_string());
    }
    if signals.roi_context {
        pros.push("ROI estimate available".to_string());
    }
    if ty.weather_eligible() {
        cons.push("Weather dependent".to_string());
        if indoor_only {
            cons.push("Conflicts with indoor-only preference".to_string());
        }
    }

    (pros, cons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scout_core::entities::{Location, WeatherSample};
    use scout_core::enums::{Mode, WeatherBadge};

    /// Forecast stub with a fixed sample, or none at all.
    struct FixedForecast(Option<WeatherSample>);

    impl ForecastCapability for FixedForecast {
        async fn forecast(&self, _: f64, _: f64, _: NaiveDate) -> Option<WeatherSample> {
            self.0
        }
    }

    fn tampa_scope() -> Scope {
        Scope {
            company_id: "c1".into(),
            industry: "Food Truck".into(),
            naics: None,
            location: Location {
                city: "Tampa".into(),
                state: "FL".into(),
                lat: Some(27.95),
                lng: Some(-82.46),
            },
            radius_miles: 50.0,
            window_days: 14,
            types: vec![OpportunityType::LocalEvents],
            mode: Mode::Demo,
        }
    }

    fn festival_hit() -> RawHit {
        RawHit {
            title: "Tampa Food Festival".into(),
            url: "https://tampafoodfest.example/vendors".into(),
            snippet: "Vendor applications open, apply by 2026-09-01. Event 2026-09-05 in Tampa."
                .into(),
            date: NaiveDate::from_ymd_opt(2026, 9, 5),
            provider: Some("eventbrite".into()),
        }
    }

    fn ctx<'a>(scope: &'a Scope, rates: &'a ConversionRateTable) -> CardContext<'a> {
        CardContext {
            scope,
            rates,
            budget: Some(2_000.0),
            indoor_only: false,
            search_phrase: "Food Truck local event festival pop-up FL Tampa",
        }
    }

    #[tokio::test]
    async fn fully_matched_event_scores_100_with_good_badge() {
        let scope = tampa_scope();
        let rates = ConversionRateTable::standard();
        let weather = FixedForecast(Some(WeatherSample {
            precip_pct: 10.0,
            wind_mph: 8.0,
            temp_f: 72.0,
        }));

        let card = build(
            &festival_hit(),
            OpportunityType::LocalEvents,
            false,
            &ctx(&scope, rates),
            &weather,
        )
        .await
        .unwrap();

        assert_eq!(card.fit_score, 100);
        assert_eq!(card.weather_badge, Some(WeatherBadge::Good));
        assert_eq!(card.location.as_deref(), Some("Tampa, FL"));
        assert_eq!(card.deadline, NaiveDate::from_ymd_opt(2026, 9, 1));
        assert_eq!(card.provider, "eventbrite");
        assert!((card.roi_est.unwrap() - (card.est_revenue.unwrap() - card.cost.unwrap())).abs() < 1e-9);
        assert!(card.pros.contains(&"Within budget".to_string()));
        assert!(card.cons.contains(&"Weather dependent".to_string()));
    }

    #[tokio::test]
    async fn missing_forecast_means_no_badge() {
        let scope = tampa_scope();
        let rates = ConversionRateTable::standard();
        let card = build(
            &festival_hit(),
            OpportunityType::LocalEvents,
            false,
            &ctx(&scope, rates),
            &FixedForecast(None),
        )
        .await
        .unwrap();
        assert_eq!(card.weather_badge, None);
    }

    #[tokio::test]
    async fn no_coordinates_skips_weather_entirely() {
        let mut scope = tampa_scope();
        scope.location.lat = None;
        scope.location.lng = None;
        let rates = ConversionRateTable::standard();
        // A forecast IS obtainable, but without coordinates it is never asked.
        let weather = FixedForecast(Some(WeatherSample {
            precip_pct: 0.0,
            wind_mph: 0.0,
            temp_f: 70.0,
        }));

        let card = build(
            &festival_hit(),
            OpportunityType::LocalEvents,
            false,
            &ctx(&scope, rates),
            &weather,
        )
        .await
        .unwrap();
        assert_eq!(card.weather_badge, None);
    }

    #[tokio::test]
    async fn non_event_types_never_get_badges() {
        let scope = tampa_scope();
        let rates = ConversionRateTable::standard();
        let hit = RawHit {
            title: "Tampa small business grant".into(),
            url: "https://grants.example/tampa".into(),
            snippet: "Awards for Tampa businesses, 2026-09-05.".into(),
            date: NaiveDate::from_ymd_opt(2026, 9, 5),
            provider: None,
        };
        let weather = FixedForecast(Some(WeatherSample {
            precip_pct: 0.0,
            wind_mph: 0.0,
            temp_f: 70.0,
        }));

        let card = build(&hit, OpportunityType::Grants, false, &ctx(&scope, rates), &weather)
            .await
            .unwrap();
        assert_eq!(card.weather_badge, None);
        assert_eq!(card.provider, "grants_gov");
    }

    #[tokio::test]
    async fn malformed_hit_is_dropped() {
        let scope = tampa_scope();
        let rates = ConversionRateTable::standard();
        let hit = RawHit {
            title: "   ".into(),
            url: "https://x.example".into(),
            snippet: String::new(),
            date: None,
            provider: None,
        };
        let built = build(&hit, OpportunityType::Grants, false, &ctx(&scope, rates), &FixedForecast(None)).await;
        assert!(built.is_none());
    }

    #[tokio::test]
    async fn fallback_card_is_flagged_and_unpriced() {
        let scope = tampa_scope();
        let rates = ConversionRateTable::standard();
        let hit = RawHit {
            title: "Local Events search unavailable".into(),
            url: "https://scout.fallback.invalid/local_events".into(),
            snippet: String::new(),
            date: None,
            provider: None,
        };

        let card = build(&hit, OpportunityType::LocalEvents, true, &ctx(&scope, rates), &FixedForecast(None))
            .await
            .unwrap();
        assert!(card.confidence <= FALLBACK_CONFIDENCE);
        assert_eq!(card.notes, FALLBACK_NOTE);
        // Fallback financials are null together so KPIs stay honest.
        assert_eq!(card.est_revenue, None);
        assert_eq!(card.cost, None);
        assert_eq!(card.roi_est, None);
    }

    #[test]
    fn date_scan_finds_embedded_dates() {
        assert_eq!(
            find_date("opens 2026-09-05 downtown"),
            NaiveDate::from_ymd_opt(2026, 9, 5)
        );
        assert_eq!(find_date("no dates here"), None);
        assert_eq!(find_date(""), None);
    }

    #[test]
    fn deadline_needs_a_marker() {
        assert_eq!(
            find_deadline("apply by 2026-09-01 at noon"),
            NaiveDate::from_ymd_opt(2026, 9, 1)
        );
        assert_eq!(find_deadline("the event is on 2026-09-01"), None);
    }

    #[test]
    fn deadline_survives_length_changing_lowercase() {
        // 'ẞ' lowercases to 'ß' (3 bytes -> 2), shifting every offset
        // after it; the scan must not slice the original at a lowered
        // offset.
        assert_eq!(
            find_deadline("ẞẞ deadline 2026-09-01"),
            NaiveDate::from_ymd_opt(2026, 9, 1)
        );
        assert_eq!(find_deadline("ẞẞ deadline soon"), None);
    }

    #[test]
    fn deterministic_given_same_inputs() {
        let hit = festival_hit();
        assert!((confidence(&hit) - 0.9).abs() < 1e-12);
        assert!((confidence(&hit) - confidence(&hit)).abs() < f64::EPSILON);
    }
}
