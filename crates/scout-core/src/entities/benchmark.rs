use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One peer benchmark for the resolved industry/region. Static reference
/// data looked up by industry, not computed from cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Benchmark {
    pub metric: String,
    pub peer_median: f64,
    pub region: String,
    pub sample_note: String,
}
