//! The final report artifact and the request that produces it.
//!
//! Field names and nesting are a compatibility contract with report
//! consumers. `ops_plan` is omitted (not null) when no card qualifies —
//! the two states are distinct on the wire.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{
    Advisor, Benchmark, Digest, Kpis, OpportunityCard, OpsPlan, Scope, SourceCitation,
};
use crate::enums::{Mode, OpportunityType};

/// Request surface consumed by the pipeline. Owned by the routing layer;
/// everything beyond `query` is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReportRequest {
    pub query: String,
    /// Explicit type override; wins over profile preferences.
    pub opportunity_types: Option<Vec<OpportunityType>>,
    pub limit: Option<usize>,
    pub mode: Option<Mode>,
}

/// The `opportunities` subtree of the artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OpportunitySet {
    pub kpis: Kpis,
    pub cards: Vec<OpportunityCard>,
    pub advisor: Advisor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ops_plan: Option<OpsPlan>,
}

/// The complete structured artifact produced by one pipeline invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Report {
    pub query: String,
    pub scope: Scope,
    pub digest: Digest,
    pub opportunities: OpportunitySet,
    pub benchmarks: Vec<Benchmark>,
    /// One-sentence executive summary of count and potential value.
    pub so_what: String,
    pub sources: Vec<SourceCitation>,
}
