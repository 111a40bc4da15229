use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Mode, OpportunityType};

/// Resolved geographic anchor for a request. Coordinates are optional:
/// when geocoding is unavailable, downstream steps skip weather and
/// distance signals instead of erroring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl Location {
    /// Whether a usable coordinate pair is present.
    #[must_use]
    pub const fn has_coords(&self) -> bool {
        self.lat.is_some() && self.lng.is_some()
    }
}

/// Canonical request context, constructed once per request by the scope
/// resolver and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Scope {
    pub company_id: String,
    /// Resolved industry, `"Unknown"` when no source could determine one.
    pub industry: String,
    pub naics: Option<String>,
    pub location: Location,
    pub radius_miles: f64,
    pub window_days: u32,
    /// Non-empty, deduplicated subset of [`OpportunityType::ALL`].
    pub types: Vec<OpportunityType>,
    pub mode: Mode,
}

impl Scope {
    /// Whether the industry was resolved to something usable.
    #[must_use]
    pub fn industry_known(&self) -> bool {
        self.industry != "Unknown"
    }
}
