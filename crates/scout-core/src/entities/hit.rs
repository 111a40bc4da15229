use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One raw, unvalidated search result. Transient: owned solely by the
/// orchestrator during a single pipeline pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RawHit {
    pub title: String,
    pub url: String,
    pub snippet: String,
    pub date: Option<NaiveDate>,
    /// Provider the hit came from; cards fall back to the per-type default
    /// when absent.
    pub provider: Option<String>,
}
