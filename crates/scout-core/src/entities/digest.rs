use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Labor-market slice of the digest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LaborDigest {
    /// `[low, high]` hourly wage band for the region.
    pub wage_range_hour: [f64; 2],
    pub availability_note: String,
    pub licensing: String,
}

/// Cost-structure slice of the digest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CostsDigest {
    pub rent_note: String,
    pub insurance_note: String,
    pub materials_or_inputs_note: String,
    pub tax_or_fee_note: String,
}

/// Qualitative market synthesis. Pure derived value: recomputed per
/// request from scope and aggregate card statistics, never persisted, and
/// never carrying a claim those inputs do not support.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Digest {
    pub demand: Vec<String>,
    pub competition: Vec<String>,
    pub labor: LaborDigest,
    pub costs: CostsDigest,
    pub seasonality: String,
    pub regulatory: Vec<String>,
    pub customer_profile: Vec<String>,
    pub risks: Vec<String>,
    pub opportunities: Vec<String>,
}
