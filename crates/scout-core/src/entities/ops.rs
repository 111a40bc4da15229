use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Inputs every ops-plan number is derived from. Echoed in the artifact so
/// the `explain` template is reproducible string-for-string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OpsAssumptions {
    pub expected_attendance: u32,
    /// Low-end, ceiling-clamped rate from the conversion table.
    pub conversion_rate: f64,
    pub avg_order_value_or_ticket: f64,
    pub service_hours: u32,
    pub units_per_hour_capacity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UnitsToPrepare {
    pub item: String,
    pub qty: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Staffing {
    pub crew: u32,
    pub shifts: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OpsRecommendations {
    pub units_to_prepare: UnitsToPrepare,
    pub staffing: Staffing,
    pub prep_budget: f64,
    pub fee_or_booth_budget: f64,
    pub checklist: Vec<String>,
}

/// Staffing/prep/budget plan for the single highest-fit qualifying card.
/// Present in the artifact only when at least one card scores ≥ 70.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OpsPlan {
    /// Opportunity type the plan applies to, as its wire string.
    pub applicable_to: String,
    pub assumptions: OpsAssumptions,
    pub recommendations: OpsRecommendations,
    /// Generated justification referencing every number used.
    pub explain: String,
}
