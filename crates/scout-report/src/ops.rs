//! Ops plan generator.
//!
//! Produces a staffing/prep/budget plan for the single highest-fit card
//! scoring at or above the qualification threshold. Every number in the
//! plan is derived from the echoed assumptions, and `explain` is a fixed
//! template over those numbers, reproducible string-for-string.

use scout_core::entities::{
    OpportunityCard, OpsAssumptions, OpsPlan, OpsRecommendations, Scope, Staffing, UnitsToPrepare,
};
use scout_core::enums::OpportunityType;

use crate::finance::{default_cost, volume_and_aov};
use crate::fmt::{format_usd, round1};
use crate::rates::ConversionRateTable;

const QUALIFYING_FIT: u8 = 70;
const SERVICE_HOURS: u32 = 8;
const UNITS_PER_HOUR: u32 = 10;

/// Build the plan, or `None` when no card qualifies. The caller omits the
/// field from the artifact in that case rather than serializing a null.
#[must_use]
pub fn build_ops_plan(
    scope: &Scope,
    cards: &[OpportunityCard],
    rates: &ConversionRateTable,
    staffing_capacity: Option<u32>,
) -> Option<OpsPlan> {
    // First card wins a fit tie, matching the ranked order upstream.
    let card = cards
        .iter()
        .filter(|c| c.fit_score >= QUALIFYING_FIT)
        .reduce(|best, c| if c.fit_score > best.fit_score { c } else { best })?;

    let attendance = expected_attendance(card.ty);
    let rate = rates.rate(&scope.industry, card.ty);
    let (_, aov) = volume_and_aov(card.ty);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let units = (f64::from(attendance) * rate).round() as u32;
    let staffing = staffing_for(units, SERVICE_HOURS, UNITS_PER_HOUR, staffing_capacity);
    let prep_budget = prep_budget_for(attendance);
    let fee_budget = card.cost.unwrap_or_else(|| default_cost(card.ty));

    let mut checklist = vec![
        "Obtain permits/insurance".to_string(),
        "Set up POS/payment system".to_string(),
    ];
    if card.ty.weather_eligible() {
        checklist.push("Prepare backup plan for weather".to_string());
    }
    checklist.push("Confirm staffing availability".to_string());

    let explain = format!(
        "For {title}, prepare {units} units based on {attendance} expected attendees \
         with {pct}% conversion. Budget {fee} for fees and {prep} for prep. \
         Staff with {crew} crew for {shifts} shift(s).",
        title = card.title,
        units = units,
        attendance = attendance,
        pct = round1(rate * 100.0),
        fee = format_usd(fee_budget),
        prep = format_usd(prep_budget),
        crew = staffing.crew,
        shifts = staffing.shifts,
    );

    Some(OpsPlan {
        applicable_to: card.ty.as_str().to_string(),
        assumptions: OpsAssumptions {
            expected_attendance: attendance,
            conversion_rate: rate,
            avg_order_value_or_ticket: aov,
            service_hours: SERVICE_HOURS,
            units_per_hour_capacity: UNITS_PER_HOUR,
        },
        recommendations: OpsRecommendations {
            units_to_prepare: UnitsToPrepare {
                item: "products".to_string(),
                qty: units,
            },
            staffing,
            prep_budget,
            fee_or_booth_budget: fee_budget,
            checklist,
        },
        explain,
    })
}

const fn expected_attendance(ty: OpportunityType) -> u32 {
    match ty {
        OpportunityType::LocalEvents => 500,
        OpportunityType::TradeShows => 1000,
        _ => 200,
    }
}

/// Crew sized so one shift covers the prep volume; when the profile caps
/// headcount below that, extra shifts absorb the remainder.
fn staffing_for(units: u32, hours: u32, per_hour: u32, capacity: Option<u32>) -> Staffing {
    let per_member = hours * per_hour;
    let needed = units.div_ceil(per_member).max(1);
    match capacity {
        Some(cap) if cap >= 1 && needed > cap => Staffing {
            crew: cap,
            shifts: needed.div_ceil(cap),
        },
        _ => Staffing {
            crew: needed,
            shifts: 1,
        },
    }
}

const fn prep_budget_for(attendance: u32) -> f64 {
    if attendance < 300 {
        250.0
    } else if attendance <= 800 {
        500.0
    } else {
        900.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scout_core::entities::Location;
    use scout_core::enums::Mode;

    fn scope() -> Scope {
        Scope {
            company_id: "c1".into(),
            industry: "Food Truck".into(),
            naics: None,
            location: Location {
                city: "Tampa".into(),
                state: "FL".into(),
                lat: None,
                lng: None,
            },
            radius_miles: 50.0,
            window_days: 14,
            types: vec![OpportunityType::LocalEvents],
            mode: Mode::Demo,
        }
    }

    fn card(fit: u8, ty: OpportunityType) -> OpportunityCard {
        OpportunityCard {
            title: "Tampa Food Festival".into(),
            ty,
            date: None,
            deadline: None,
            location: None,
            est_revenue: Some(1000.0),
            cost: Some(150.0),
            roi_est: Some(850.0),
            fit_score: fit,
            confidence: 0.8,
            weather_badge: None,
            link: "https://x.example".into(),
            provider: "eventbrite".into(),
            source_id: "local_events_00000000_0".into(),
            notes: String::new(),
            pros: vec![],
            cons: vec![],
        }
    }

    #[test]
    fn absent_below_qualifying_fit() {
        let rates = ConversionRateTable::standard();
        let cards = [card(69, OpportunityType::LocalEvents)];
        assert_eq!(build_ops_plan(&scope(), &cards, rates, None), None);
        assert!(build_ops_plan(&scope(), &[], rates, None).is_none());
    }

    #[test]
    fn highest_fit_card_drives_the_plan() {
        let rates = ConversionRateTable::standard();
        let mut grant = card(90, OpportunityType::Grants);
        grant.title = "State grant".into();
        let cards = [card(75, OpportunityType::LocalEvents), grant];

        let plan = build_ops_plan(&scope(), &cards, rates, None).unwrap();
        assert_eq!(plan.applicable_to, "grants");
        assert_eq!(plan.assumptions.expected_attendance, 200);
    }

    #[test]
    fn food_truck_local_event_plan_numbers() {
        let rates = ConversionRateTable::standard();
        let cards = [card(100, OpportunityType::LocalEvents)];
        let plan = build_ops_plan(&scope(), &cards, rates, Some(2)).unwrap();

        assert_eq!(plan.applicable_to, "local_events");
        assert_eq!(plan.assumptions.expected_attendance, 500);
        assert!((plan.assumptions.conversion_rate - 0.08).abs() < 1e-9);
        assert!((plan.assumptions.avg_order_value_or_ticket - 25.0).abs() < 1e-9);
        // 500 × 0.08 = 40 units; one 8h shift at 10/hour covers it.
        assert_eq!(plan.recommendations.units_to_prepare.qty, 40);
        assert_eq!(plan.recommendations.staffing, Staffing { crew: 1, shifts: 1 });
        assert!((plan.recommendations.prep_budget - 500.0).abs() < 1e-9);
        assert!((plan.recommendations.fee_or_booth_budget - 150.0).abs() < 1e-9);
        assert!(
            plan.recommendations
                .checklist
                .iter()
                .any(|c| c.contains("weather"))
        );
    }

    #[test]
    fn explain_is_reproducible_from_assumptions() {
        let rates = ConversionRateTable::standard();
        let cards = [card(100, OpportunityType::LocalEvents)];
        let a = build_ops_plan(&scope(), &cards, rates, None).unwrap();
        let b = build_ops_plan(&scope(), &cards, rates, None).unwrap();
        assert_eq!(a.explain, b.explain);
        for needle in ["40 units", "500 expected attendees", "8% conversion", "$150", "$500"] {
            assert!(a.explain.contains(needle), "missing {needle}: {}", a.explain);
        }
    }

    #[test]
    fn staffing_capacity_caps_crew_and_adds_shifts() {
        assert_eq!(
            staffing_for(200, 8, 10, None),
            Staffing { crew: 3, shifts: 1 }
        );
        assert_eq!(
            staffing_for(200, 8, 10, Some(2)),
            Staffing { crew: 2, shifts: 2 }
        );
        assert_eq!(staffing_for(0, 8, 10, None), Staffing { crew: 1, shifts: 1 });
    }

    #[test]
    fn weather_checklist_only_for_event_types() {
        let rates = ConversionRateTable::standard();
        let cards = [card(90, OpportunityType::Grants)];
        let plan = build_ops_plan(&scope(), &cards, rates, None).unwrap();
        assert!(
            plan.recommendations
                .checklist
                .iter()
                .all(|c| !c.contains("weather"))
        );
    }
}
