//! Opportunity search orchestrator.
//!
//! Issues one search per requested type (concurrently — the per-type
//! futures are independent and merged only after all complete), caps
//! results per type, and delegates each hit to the card builder. A type
//! whose search capability fails entirely yields exactly one
//! fallback-marked synthetic card, never a request failure.

use scout_core::entities::{OpportunityCard, RawHit, Scope};
use scout_core::enums::OpportunityType;
use scout_providers::{ForecastCapability, SearchCapability, SearchOutcome};

use crate::card::{self, CardContext};
use crate::rates::ConversionRateTable;

/// Per-request inputs that are not part of the scope itself.
pub struct OrchestratorInputs<'a> {
    pub query: &'a str,
    pub budget: Option<f64>,
    pub indoor_only: bool,
    pub per_type_limit: usize,
}

/// Run every per-type search and collect the aggregated, fit-ranked card
/// list. Each type's slice is independently owned by its future; slices
/// are merged in type order after all complete, then sorted by fit score
/// (stable, so equal-fit cards keep type order).
pub async fn gather_cards<S: SearchCapability, F: ForecastCapability>(
    scope: &Scope,
    inputs: &OrchestratorInputs<'_>,
    rates: &ConversionRateTable,
    search: &S,
    weather: &F,
) -> Vec<OpportunityCard> {
    let per_type = scope
        .types
        .iter()
        .map(|&ty| fetch_type(scope, inputs, rates, ty, search, weather));

    let mut cards: Vec<OpportunityCard> = futures::future::join_all(per_type)
        .await
        .into_iter()
        .flatten()
        .collect();

    cards.sort_by(|a, b| b.fit_score.cmp(&a.fit_score));
    cards
}

/// One type's search → cards slice.
async fn fetch_type<S: SearchCapability, F: ForecastCapability>(
    scope: &Scope,
    inputs: &OrchestratorInputs<'_>,
    rates: &ConversionRateTable,
    ty: OpportunityType,
    search: &S,
    weather: &F,
) -> Vec<OpportunityCard> {
    let phrase = search_phrase(scope, inputs.query, ty);
    let ctx = CardContext {
        scope,
        rates,
        budget: inputs.budget,
        indoor_only: inputs.indoor_only,
        search_phrase: &phrase,
    };

    let outcome = search.search(&phrase, inputs.per_type_limit).await;
    match outcome {
        SearchOutcome::Hits(mut hits) => {
            hits.truncate(inputs.per_type_limit);
            let mut cards = Vec::with_capacity(hits.len());
            for hit in &hits {
                if let Some(built) = card::build(hit, ty, false, &ctx, weather).await {
                    cards.push(built);
                }
            }
            tracing::debug!(ty = %ty, hits = hits.len(), cards = cards.len(), "type searched");
            cards
        }
        SearchOutcome::Degraded(hit) => build_fallback(&hit, ty, &ctx, weather).await,
        SearchOutcome::Unavailable => {
            tracing::warn!(ty = %ty, "search unavailable; emitting fallback card");
            let hit = fallback_hit(ty);
            build_fallback(&hit, ty, &ctx, weather).await
        }
    }
}

async fn build_fallback<F: ForecastCapability>(
    hit: &RawHit,
    ty: OpportunityType,
    ctx: &CardContext<'_>,
    weather: &F,
) -> Vec<OpportunityCard> {
    card::build(hit, ty, true, ctx, weather)
        .await
        .into_iter()
        .collect()
}

/// The synthetic stand-in hit for an unavailable search.
fn fallback_hit(ty: OpportunityType) -> RawHit {
    RawHit {
        title: format!("{} search unavailable", ty.label()),
        url: format!("https://scout.fallback.invalid/{ty}"),
        snippet: String::new(),
        date: None,
        provider: None,
    }
}

/// Per-type search phrase: free-text query, industry (when known),
/// type-specific keywords, then city/state.
fn search_phrase(scope: &Scope, query: &str, ty: OpportunityType) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(5);
    let query = query.trim();
    if !query.is_empty() {
        parts.push(query);
    }
    if scope.industry_known() {
        parts.push(&scope.industry);
    }
    parts.push(ty.query_keywords());
    if !scope.location.state.is_empty() {
        parts.push(&scope.location.state);
    }
    if !scope.location.city.is_empty() {
        parts.push(&scope.location.city);
    }
    parts.join(" ")
}
