use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::OpportunityType;

/// Stored business profile, resolved by a collaborator and consumed here
/// read-only. Every field is optional: a missing profile degrades to
/// `"Unknown"` industry rather than failing the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BusinessProfile {
    pub industry: Option<String>,
    /// Fallback industry source when `industry` is absent.
    pub business_type: Option<String>,
    pub naics: Option<String>,
    /// `"City, ST"` free-form region string.
    pub region: Option<String>,
    #[serde(default)]
    pub services: Vec<String>,
}

/// Stored opportunity preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OpportunitiesProfile {
    pub operating_region: Option<String>,
    #[serde(default)]
    pub preferred_opportunity_types: Vec<OpportunityType>,
    /// Search radius in miles.
    pub radius: Option<f64>,
    pub max_budget: Option<f64>,
    pub travel_range: Option<String>,
    pub staffing_capacity: Option<u32>,
    pub risk_appetite: Option<String>,
    #[serde(default = "default_true")]
    pub auto_sync: bool,
    #[serde(default)]
    pub indoor_only: bool,
}

const fn default_true() -> bool {
    true
}
