use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Headline metrics recomputed from the final card set on every request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Kpis {
    pub active_count: u32,
    /// Sum of `est_revenue` across cards that carry one.
    pub potential_value: f64,
    pub avg_fit_score: f64,
    /// `avg_fit_score × 0.8`, rounded to one decimal.
    pub event_readiness: f64,
}
