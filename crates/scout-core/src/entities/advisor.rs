use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::RiskLevel;

/// One prioritized action over a selected card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AdvisorAction {
    pub title: String,
    /// Expected impact, derived from the card's revenue estimate.
    pub impact: String,
    pub deadline: Option<NaiveDate>,
    /// Why this action ranks where it does: cites fit score and ROI.
    pub reason: String,
}

/// One advisor risk entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Risk {
    pub level: RiskLevel,
    pub message: String,
}

/// The prioritized, explainable recommendation layer over the card set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Advisor {
    pub summary: String,
    pub actions: Vec<AdvisorAction>,
    pub risks: Vec<Risk>,
}
