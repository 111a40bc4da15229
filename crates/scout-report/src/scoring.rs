//! Fit scoring engine.
//!
//! A deterministic additive model: each criterion is evaluated
//! independently, awards a fixed number of points or zero, and the sum is
//! clamped to [0, 100]. The per-criterion booleans are kept on
//! [`FitSignals`] so pros/cons and advisor reasons can cite exactly the
//! criteria that awarded points — every point is traceable.
//!
//! | criterion          | points |
//! |--------------------|--------|
//! | industry_match     | +30    |
//! | region_match       | +20    |
//! | affordability      | +20    |
//! | seasonality_demand | +15    |
//! | peer_roi_context   | +15    |

use scout_core::entities::Scope;
use scout_core::enums::OpportunityType;

pub const INDUSTRY_POINTS: u32 = 30;
pub const REGION_POINTS: u32 = 20;
pub const AFFORDABILITY_POINTS: u32 = 20;
pub const SEASONALITY_POINTS: u32 = 15;
pub const ROI_CONTEXT_POINTS: u32 = 15;

/// Outcome of evaluating every scoring criterion for one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitSignals {
    /// Candidate text aligns with the resolved industry (partial token
    /// match; never awarded when industry is `"Unknown"`).
    pub industry_match: bool,
    /// Candidate is within the operating region, or the type needs no
    /// location at all.
    pub region_match: bool,
    /// Estimated cost fits the budget constraint; absence of a budget is
    /// not a penalty.
    pub affordable: bool,
    /// Coarse seasonality/demand signal — awarded whenever the industry is
    /// known.
    pub seasonality: bool,
    /// A financial estimate was computable for peer-ROI context.
    pub roi_context: bool,
}

impl FitSignals {
    /// Additive score, clamped to [0, 100].
    #[must_use]
    pub fn score(self) -> u8 {
        let mut total: u32 = 0;
        if self.industry_match {
            total += INDUSTRY_POINTS;
        }
        if self.region_match {
            total += REGION_POINTS;
        }
        if self.affordable {
            total += AFFORDABILITY_POINTS;
        }
        if self.seasonality {
            total += SEASONALITY_POINTS;
        }
        if self.roi_context {
            total += ROI_CONTEXT_POINTS;
        }
        u8::try_from(total.min(100)).unwrap_or(100)
    }
}

/// Evaluate every criterion for one candidate hit.
///
/// `text` is the candidate's searchable text (title + snippet);
/// `estimated_cost` and `budget` feed affordability; `estimate_available`
/// feeds the ROI-context criterion.
#[must_use]
pub fn evaluate(
    scope: &Scope,
    ty: OpportunityType,
    text: &str,
    estimated_cost: Option<f64>,
    budget: Option<f64>,
    estimate_available: bool,
) -> FitSignals {
    FitSignals {
        industry_match: industry_matches(scope, text),
        region_match: region_matches(scope, ty, text),
        affordable: affordability(estimated_cost, budget),
        seasonality: scope.industry_known(),
        roi_context: estimate_available,
    }
}

/// Partial text match: any industry token of 3+ chars appears in the
/// candidate text. Not fuzzy-scored — a token either appears or it doesn't.
fn industry_matches(scope: &Scope, text: &str) -> bool {
    if !scope.industry_known() {
        return false;
    }
    let haystack = text.to_lowercase();
    scope
        .industry
        .split_whitespace()
        .filter(|token| token.len() >= 3)
        .any(|token| haystack.contains(&token.to_lowercase()))
}

/// Region criterion. Types without a physical venue need no location data,
/// so they satisfy the criterion outright. Event-like types match when the
/// candidate text mentions the scope's city, or its state as a whole token
/// ("FL" must not match inside "reflections"); an unset scope location
/// means there is no constraint to violate.
fn region_matches(scope: &Scope, ty: OpportunityType, text: &str) -> bool {
    if !ty.weather_eligible() {
        return true;
    }
    let city = scope.location.city.trim();
    let state = scope.location.state.trim();
    if city.is_empty() && state.is_empty() {
        return true;
    }
    let haystack = text.to_lowercase();
    if !city.is_empty() && haystack.contains(&city.to_lowercase()) {
        return true;
    }
    !state.is_empty() && contains_token(&haystack, &state.to_lowercase())
}

/// Whole-token containment over alphanumeric runs.
fn contains_token(haystack: &str, needle: &str) -> bool {
    haystack
        .split(|c: char| !c.is_alphanumeric())
        .any(|token| token == needle)
}

/// Affordability criterion. No budget set, or no cost to compare, awards
/// the points — absence of a constraint is not a penalty.
fn affordability(estimated_cost: Option<f64>, budget: Option<f64>) -> bool {
    match (estimated_cost, budget) {
        (Some(cost), Some(budget)) => cost <= budget,
        _ => true,
    }
}
