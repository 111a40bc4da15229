//! Entity structs for the report artifact and its inputs.
//!
//! Every entity here is a value object: no entity holds a reference back to
//! its producer, and nothing is mutated after construction. All structs
//! derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip
//! and schema generation.

mod advisor;
mod benchmark;
mod card;
mod citation;
mod digest;
mod hit;
mod kpis;
mod ops;
mod profile;
mod report;
mod scope;
mod weather;

pub use advisor::{Advisor, AdvisorAction, Risk};
pub use benchmark::Benchmark;
pub use card::OpportunityCard;
pub use citation::SourceCitation;
pub use digest::{CostsDigest, Digest, LaborDigest};
pub use hit::RawHit;
pub use kpis::Kpis;
pub use ops::{OpsAssumptions, OpsPlan, OpsRecommendations, Staffing, UnitsToPrepare};
pub use profile::{BusinessProfile, OpportunitiesProfile};
pub use report::{OpportunitySet, Report, ReportRequest};
pub use scope::{Location, Scope};
pub use weather::WeatherSample;
