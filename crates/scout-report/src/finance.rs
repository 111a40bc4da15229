//! Financial estimator.
//!
//! `est_revenue = expected_volume × conversion_rate × avg_order_value`,
//! with the conversion rate taken from the rate table (low end, ceiling
//! clamped), volume and AOV from type defaults, and cost from type-specific
//! fee heuristics. The three output fields are all-or-nothing: either a
//! complete estimate or none, never a partially populated one.

use scout_core::enums::OpportunityType;

use crate::rates::ConversionRateTable;

/// A complete financial estimate. `roi_est` is always
/// `est_revenue − cost`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinancialEstimate {
    pub est_revenue: f64,
    pub cost: f64,
    pub roi_est: f64,
}

/// Type-default expected volume (attendees, leads, or applications) and
/// average order value.
pub(crate) const fn volume_and_aov(ty: OpportunityType) -> (f64, f64) {
    match ty {
        OpportunityType::GovernmentContracts => (10.0, 25_000.0),
        OpportunityType::Grants => (5.0, 10_000.0),
        OpportunityType::TradeShows => (1_000.0, 40.0),
        OpportunityType::LocalEvents => (500.0, 25.0),
        OpportunityType::Partnerships => (20.0, 2_000.0),
        OpportunityType::VendorListings => (50.0, 500.0),
        OpportunityType::Certifications => (1.0, 5_000.0),
    }
}

/// Type-specific participation cost: booth fee, application fee, or zero
/// for free listings.
#[must_use]
pub const fn default_cost(ty: OpportunityType) -> f64 {
    match ty {
        OpportunityType::GovernmentContracts
        | OpportunityType::Grants
        | OpportunityType::Partnerships
        | OpportunityType::VendorListings => 0.0,
        OpportunityType::TradeShows => 800.0,
        OpportunityType::LocalEvents => 150.0,
        OpportunityType::Certifications => 300.0,
    }
}

/// Estimate revenue, cost, and ROI for a candidate of type `ty`.
///
/// Returns `None` when no volume/AOV assumption can be made at all —
/// notably for fallback candidates, whose numbers must never enter the
/// KPIs. The conversion rate is the table's low end; the ceiling clamp is
/// applied inside the table and re-applied here as a final guard.
#[must_use]
pub fn estimate(
    industry: &str,
    ty: OpportunityType,
    rates: &ConversionRateTable,
    fallback: bool,
) -> Option<FinancialEstimate> {
    if fallback {
        return None;
    }
    let (volume, aov) = volume_and_aov(ty);
    let rate = rates.rate(industry, ty).min(rates.ceiling(industry, ty));
    let est_revenue = volume * rate * aov;
    let cost = default_cost(ty);
    Some(FinancialEstimate {
        est_revenue,
        cost,
        roi_est: est_revenue - cost,
    })
}
