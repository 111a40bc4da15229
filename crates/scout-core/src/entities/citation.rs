use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One deduplicated source citation, keyed by URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SourceCitation {
    pub title: String,
    pub url: String,
    pub date: Option<NaiveDate>,
    pub note: String,
}
