//! Scope resolver.
//!
//! Merges the business profile, opportunity preferences, and the free-text
//! query into one canonical [`Scope`]. Resolution never fails: a missing
//! industry becomes `"Unknown"`, a missing region leaves coordinates unset
//! (downstream steps skip weather and distance signals), and an empty type
//! set falls back to query inference and finally a minimal generic set.

use scout_config::GeneralConfig;
use scout_core::entities::{
    BusinessProfile, Location, OpportunitiesProfile, ReportRequest, Scope,
};
use scout_core::enums::OpportunityType;

/// Minimal generic type set used when neither the request, the profile,
/// nor the query determine one.
const DEFAULT_TYPES: &[OpportunityType] =
    &[OpportunityType::LocalEvents, OpportunityType::Grants];

/// Resolve the canonical scope for one request.
#[must_use]
pub fn resolve(
    company_id: &str,
    business: Option<&BusinessProfile>,
    opportunities: Option<&OpportunitiesProfile>,
    request: &ReportRequest,
    defaults: &GeneralConfig,
) -> Scope {
    let industry = business
        .and_then(|b| b.industry.clone().or_else(|| b.business_type.clone()))
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| "Unknown".to_string());

    if industry == "Unknown" {
        tracing::debug!(company_id, "no industry resolved; proceeding as Unknown");
    }

    let region = opportunities
        .and_then(|o| o.operating_region.clone())
        .or_else(|| business.and_then(|b| b.region.clone()));

    let mut location = region.as_deref().map(parse_region).unwrap_or_default();
    // Geocoding proper is a collaborator concern; operator-supplied
    // coordinates are the only source. Absent coordinates mean weather and
    // distance signals are skipped downstream.
    location.lat = defaults.lat;
    location.lng = defaults.lng;

    Scope {
        company_id: company_id.to_string(),
        industry,
        naics: business.and_then(|b| b.naics.clone()),
        location,
        radius_miles: opportunities
            .and_then(|o| o.radius)
            .filter(|r| *r > 0.0)
            .unwrap_or(defaults.radius_miles),
        window_days: defaults.window_days,
        types: resolve_types(request, opportunities),
        mode: request.mode.unwrap_or(defaults.default_mode),
    }
}

/// Parse a `"City, ST"` region string. A single segment is treated as a
/// state/region name. Geocoding is deferred: coordinates stay unset.
fn parse_region(region: &str) -> Location {
    let mut parts = region.splitn(2, ',');
    let first = parts.next().unwrap_or("").trim();
    match parts.next().map(str::trim) {
        Some(state) if !state.is_empty() => Location {
            city: first.to_string(),
            state: state.to_string(),
            lat: None,
            lng: None,
        },
        _ => Location {
            city: String::new(),
            state: first.to_string(),
            lat: None,
            lng: None,
        },
    }
}

/// Type resolution policy: explicit request override → profile preferences
/// → query keyword inference → minimal generic default. The result is
/// always non-empty and deduplicated in first-seen order.
fn resolve_types(
    request: &ReportRequest,
    opportunities: Option<&OpportunitiesProfile>,
) -> Vec<OpportunityType> {
    let requested = request
        .opportunity_types
        .as_deref()
        .filter(|t| !t.is_empty());
    let preferred = opportunities
        .map(|o| o.preferred_opportunity_types.as_slice())
        .filter(|t| !t.is_empty());

    let raw: Vec<OpportunityType> = match (requested, preferred) {
        (Some(types), _) => types.to_vec(),
        (None, Some(types)) => types.to_vec(),
        (None, None) => {
            let inferred = infer_from_query(&request.query);
            if inferred.is_empty() {
                DEFAULT_TYPES.to_vec()
            } else {
                inferred
            }
        }
    };

    let mut types = Vec::with_capacity(raw.len());
    for ty in raw {
        if !types.contains(&ty) {
            types.push(ty);
        }
    }
    types
}

/// Keyword inference over the free-text query.
fn infer_from_query(query: &str) -> Vec<OpportunityType> {
    const KEYWORDS: &[(&str, OpportunityType)] = &[
        ("rfp", OpportunityType::GovernmentContracts),
        ("procurement", OpportunityType::GovernmentContracts),
        ("government", OpportunityType::GovernmentContracts),
        ("contract", OpportunityType::GovernmentContracts),
        ("grant", OpportunityType::Grants),
        ("funding", OpportunityType::Grants),
        ("trade show", OpportunityType::TradeShows),
        ("expo", OpportunityType::TradeShows),
        ("convention", OpportunityType::TradeShows),
        ("festival", OpportunityType::LocalEvents),
        ("event", OpportunityType::LocalEvents),
        ("market", OpportunityType::LocalEvents),
        ("pop-up", OpportunityType::LocalEvents),
        ("partner", OpportunityType::Partnerships),
        ("vendor", OpportunityType::VendorListings),
        ("subcontract", OpportunityType::VendorListings),
        ("certification", OpportunityType::Certifications),
        ("training", OpportunityType::Certifications),
    ];

    let lower = query.to_lowercase();
    let mut types = Vec::new();
    for (keyword, ty) in KEYWORDS {
        if lower.contains(keyword) && !types.contains(ty) {
            types.push(*ty);
        }
    }
    types
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scout_core::enums::Mode;

    fn request(query: &str) -> ReportRequest {
        ReportRequest {
            query: query.into(),
            ..Default::default()
        }
    }

    #[test]
    fn full_profiles_resolve_completely() {
        let business = BusinessProfile {
            industry: Some("Food Truck".into()),
            naics: Some("722330".into()),
            region: Some("Austin, TX".into()),
            ..Default::default()
        };
        let opportunities = OpportunitiesProfile {
            operating_region: Some("Tampa, FL".into()),
            preferred_opportunity_types: vec![
                OpportunityType::LocalEvents,
                OpportunityType::Grants,
                OpportunityType::LocalEvents,
            ],
            radius: Some(25.0),
            ..Default::default()
        };

        let scope = resolve(
            "c1",
            Some(&business),
            Some(&opportunities),
            &request("events this month"),
            &GeneralConfig::default(),
        );

        assert_eq!(scope.industry, "Food Truck");
        assert_eq!(scope.naics.as_deref(), Some("722330"));
        // Opportunities profile region wins over the business region.
        assert_eq!(scope.location.city, "Tampa");
        assert_eq!(scope.location.state, "FL");
        assert_eq!(scope.location.lat, None);
        assert!((scope.radius_miles - 25.0).abs() < f64::EPSILON);
        // Duplicate preferred types are collapsed.
        assert_eq!(
            scope.types,
            vec![OpportunityType::LocalEvents, OpportunityType::Grants]
        );
        assert_eq!(scope.mode, Mode::Live);
    }

    #[test]
    fn request_types_override_profile_preferences() {
        let opportunities = OpportunitiesProfile {
            preferred_opportunity_types: vec![OpportunityType::Grants],
            ..Default::default()
        };
        let req = ReportRequest {
            query: "anything".into(),
            opportunity_types: Some(vec![OpportunityType::TradeShows]),
            ..Default::default()
        };

        let scope = resolve("c1", None, Some(&opportunities), &req, &GeneralConfig::default());
        assert_eq!(scope.types, vec![OpportunityType::TradeShows]);
    }

    #[test]
    fn missing_everything_never_fails() {
        let scope = resolve("c1", None, None, &request("help my business"), &GeneralConfig::default());
        assert_eq!(scope.industry, "Unknown");
        assert!(!scope.industry_known());
        assert_eq!(scope.location, Location::default());
        assert!((scope.radius_miles - 50.0).abs() < f64::EPSILON);
        assert_eq!(scope.window_days, 14);
        // Nothing to infer from the query: minimal generic set.
        assert_eq!(scope.types, DEFAULT_TYPES);
    }

    #[test]
    fn types_inferred_from_query_keywords() {
        let scope = resolve(
            "c1",
            None,
            None,
            &request("food truck festival and grant funding"),
            &GeneralConfig::default(),
        );
        assert_eq!(
            scope.types,
            vec![OpportunityType::Grants, OpportunityType::LocalEvents]
        );
    }

    #[test]
    fn single_segment_region_is_a_state() {
        assert_eq!(
            parse_region("Florida"),
            Location {
                city: String::new(),
                state: "Florida".into(),
                lat: None,
                lng: None,
            }
        );
        assert_eq!(parse_region("Tampa, FL").city, "Tampa");
    }

    #[test]
    fn business_type_backs_up_industry() {
        let business = BusinessProfile {
            business_type: Some("Bakery".into()),
            ..Default::default()
        };
        let scope = resolve("c1", Some(&business), None, &request("x"), &GeneralConfig::default());
        assert_eq!(scope.industry, "Bakery");
    }
}
