//! Report assembler: the top-level pipeline invocation.
//!
//! Resolves the scope, gathers and ranks cards, then synthesizes KPIs,
//! digest, benchmarks, advisor, ops plan, and sources into the final
//! artifact. Stateless per invocation; the only shared state is the
//! read-only conversion rate table.

use scout_config::GeneralConfig;
use scout_core::entities::{
    BusinessProfile, Kpis, OpportunitiesProfile, OpportunityCard, OpportunitySet, Report,
    ReportRequest,
};
use scout_providers::{ForecastCapability, SearchCapability};

use crate::fmt::{format_usd, round1};
use crate::orchestrate::{self, OrchestratorInputs};
use crate::rates::ConversionRateTable;
use crate::{advisor, digest, ops, scope, sources};

/// Run the whole pipeline for one request. Never fails: degraded inputs
/// produce a fully-populated artifact with empty cards and an explanatory
/// advisor summary, not an error.
pub async fn run_report<S: SearchCapability, F: ForecastCapability>(
    request: &ReportRequest,
    company_id: &str,
    business: Option<&BusinessProfile>,
    opportunities: Option<&OpportunitiesProfile>,
    config: &GeneralConfig,
    rates: &ConversionRateTable,
    search: &S,
    weather: &F,
) -> Report {
    let scope = scope::resolve(company_id, business, opportunities, request, config);
    tracing::info!(
        company_id,
        industry = %scope.industry,
        types = scope.types.len(),
        mode = %scope.mode,
        "report pipeline started"
    );

    let inputs = OrchestratorInputs {
        query: &request.query,
        budget: opportunities.and_then(|o| o.max_budget),
        indoor_only: opportunities.is_some_and(|o| o.indoor_only),
        per_type_limit: config.results_per_type,
    };
    let mut cards = orchestrate::gather_cards(&scope, &inputs, rates, search, weather).await;
    if let Some(limit) = request.limit {
        cards.truncate(limit);
    }

    let kpis = compute_kpis(&cards);
    let advisor = advisor::build_advisor(&scope, &cards);
    let ops_plan = ops::build_ops_plan(
        &scope,
        &cards,
        rates,
        opportunities.and_then(|o| o.staffing_capacity),
    );
    let digest = digest::build_digest(&scope, &cards);
    let benchmarks = digest::build_benchmarks(&scope);
    let sources = sources::aggregate(&cards);
    let so_what = so_what(&kpis);

    tracing::info!(
        cards = cards.len(),
        ops_plan = ops_plan.is_some(),
        sources = sources.len(),
        "report pipeline finished"
    );

    Report {
        query: request.query.clone(),
        scope,
        digest,
        opportunities: OpportunitySet {
            kpis,
            cards,
            advisor,
            ops_plan,
        },
        benchmarks,
        so_what,
        sources,
    }
}

fn compute_kpis(cards: &[OpportunityCard]) -> Kpis {
    if cards.is_empty() {
        return Kpis::default();
    }
    let potential_value: f64 = cards.iter().filter_map(|c| c.est_revenue).sum();
    let fit_sum: u32 = cards.iter().map(|c| u32::from(c.fit_score)).sum();
    #[allow(clippy::cast_precision_loss)]
    let avg_fit_score = round1(f64::from(fit_sum) / cards.len() as f64);
    Kpis {
        active_count: u32::try_from(cards.len()).unwrap_or(u32::MAX),
        potential_value,
        avg_fit_score,
        event_readiness: round1(avg_fit_score * 0.8),
    }
}

fn so_what(kpis: &Kpis) -> String {
    if kpis.active_count == 0 {
        "No opportunities found for the current filters. Broadening the radius, \
         window, or opportunity types should surface results."
            .to_string()
    } else {
        format!(
            "Found {} opportunities worth {} in potential revenue. Focus on \
             high-fit opportunities with upcoming deadlines to maximize ROI.",
            kpis.active_count,
            format_usd(kpis.potential_value)
        )
    }
}
