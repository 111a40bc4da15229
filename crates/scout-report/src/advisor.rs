//! Advisor engine: ranks the card set and emits prioritized actions,
//! risks, and a summary. Branches between the opportunities-found mode
//! and the empty-result mode, where actions become concrete filter
//! relaxations instead of opportunity actions.

use std::cmp::Ordering;

use scout_core::entities::{Advisor, AdvisorAction, OpportunityCard, Risk, Scope};
use scout_core::enums::{RiskLevel, WeatherBadge};

use crate::fmt::format_usd;

const TOP_ACTIONS: usize = 3;

#[must_use]
pub fn build_advisor(scope: &Scope, cards: &[OpportunityCard]) -> Advisor {
    if cards.is_empty() {
        return empty_case(scope);
    }

    let mut ranked: Vec<&OpportunityCard> = cards.iter().collect();
    ranked.sort_by(|a, b| rank(a, b));
    ranked.truncate(TOP_ACTIONS);

    let actions = ranked.iter().map(|card| action_for(card)).collect();

    let mut risks = vec![Risk {
        level: RiskLevel::Low,
        message: "Standard business risks apply".to_string(),
    }];
    if ranked
        .iter()
        .any(|c| matches!(c.weather_badge, Some(WeatherBadge::Mixed | WeatherBadge::Poor)))
    {
        risks.push(Risk {
            level: RiskLevel::Med,
            message: "Weather may impact outdoor events".to_string(),
        });
    }

    Advisor {
        summary: format!(
            "Found {} opportunities matching your profile. Focus on high-fit \
             opportunities with deadlines in the next 2 weeks.",
            cards.len()
        ),
        actions,
        risks,
    }
}

/// Ordering for action selection: fit desc, then earlier deadline
/// (`None` last), then higher roi_est.
fn rank(a: &OpportunityCard, b: &OpportunityCard) -> Ordering {
    b.fit_score
        .cmp(&a.fit_score)
        .then_with(|| match (a.deadline, b.deadline) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
        .then_with(|| {
            b.roi_est
                .unwrap_or(f64::MIN)
                .total_cmp(&a.roi_est.unwrap_or(f64::MIN))
        })
}

fn action_for(card: &OpportunityCard) -> AdvisorAction {
    let impact = match card.est_revenue {
        Some(revenue) => format!("{} potential revenue", format_usd(revenue)),
        None => "Revenue impact not estimated".to_string(),
    };
    let reason = match card.roi_est {
        Some(roi) => format!(
            "Fit score {} with estimated ROI of {}",
            card.fit_score,
            format_usd(roi)
        ),
        None => format!("Fit score {}; financials unavailable", card.fit_score),
    };
    AdvisorAction {
        title: format!("Apply to {}", card.title),
        impact,
        deadline: card.deadline.or(card.date),
        reason,
    }
}

/// Empty-result mode: explain the likely cause and suggest concrete
/// parameter relaxations against the current scope.
fn empty_case(scope: &Scope) -> Advisor {
    let types: Vec<&str> = scope.types.iter().map(|t| t.as_str()).collect();
    Advisor {
        summary: format!(
            "No opportunities found for the current filters \
             (types: {}, radius: {} miles, window: {} days). \
             Relaxing one or more filters should surface results.",
            types.join(", "),
            scope.radius_miles,
            scope.window_days
        ),
        actions: vec![
            AdvisorAction {
                title: "Broaden the search radius".to_string(),
                impact: "More nearby opportunities become eligible".to_string(),
                deadline: None,
                reason: format!("Current radius is {} miles", scope.radius_miles),
            },
            AdvisorAction {
                title: "Extend the time window".to_string(),
                impact: "Later-dated opportunities become eligible".to_string(),
                deadline: None,
                reason: format!("Current window is {} days", scope.window_days),
            },
            AdvisorAction {
                title: "Add more opportunity types".to_string(),
                impact: "Searches run across additional categories".to_string(),
                deadline: None,
                reason: format!("Currently searching: {}", types.join(", ")),
            },
        ],
        risks: vec![Risk {
            level: RiskLevel::Low,
            message: "Standard business risks apply".to_string(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use scout_core::entities::Location;
    use scout_core::enums::{Mode, OpportunityType};

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
            types: vec![OpportunityType::LocalEvents, OpportunityType::Grants],
            mode: Mode::Demo,
        }
    }

    fn card(title: &str, fit: u8) -> OpportunityCard {
        OpportunityCard {
            title: title.into(),
            ty: OpportunityType::LocalEvents,
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
    fn top_three_by_fit_with_deadline_and_roi_tiebreaks() {
        let mut early = card("early deadline", 80);
        early.deadline = NaiveDate::from_ymd_opt(2026, 9, 2);
        let mut late = card("late deadline", 80);
        late.deadline = NaiveDate::from_ymd_opt(2026, 9, 9);
        let mut rich = card("no deadline high roi", 80);
        rich.roi_est = Some(5000.0);
        let low = card("low fit", 40);

        let advisor = build_advisor(&scope(), &[low, rich.clone(), late, early]);
        assert_eq!(advisor.actions.len(), 3);
        assert_eq!(advisor.actions[0].title, "Apply to early deadline");
        assert_eq!(advisor.actions[1].title, "Apply to late deadline");
        assert_eq!(advisor.actions[2].title, "Apply to no deadline high roi");
    }

    #[test]
    fn action_cites_fit_and_roi() {
        let advisor = build_advisor(&scope(), &[card("Tampa Food Festival", 100)]);
        let action = &advisor.actions[0];
        assert_eq!(action.impact, "$1,000 potential revenue");
        assert_eq!(action.reason, "Fit score 100 with estimated ROI of $850");
    }

    #[test]
    fn baseline_risk_always_present() {
        let advisor = build_advisor(&scope(), &[card("a", 50)]);
        assert_eq!(advisor.risks[0].level, RiskLevel::Low);
        assert_eq!(advisor.risks[0].message, "Standard business risks apply");
        assert_eq!(advisor.risks.len(), 1);
    }

    #[test]
    fn weather_risk_added_for_selected_non_good_badge() {
        let mut mixed = card("rainy fair", 90);
        mixed.weather_badge = Some(WeatherBadge::Mixed);
        let advisor = build_advisor(&scope(), &[mixed]);
        assert_eq!(advisor.risks.len(), 2);
        assert_eq!(advisor.risks[1].level, RiskLevel::Med);

        let mut good = card("sunny fair", 90);
        good.weather_badge = Some(WeatherBadge::Good);
        let advisor = build_advisor(&scope(), &[good]);
        assert_eq!(advisor.risks.len(), 1);
    }

    #[test]
    fn empty_case_suggests_filter_relaxation() {
        let advisor = build_advisor(&scope(), &[]);
        assert!(advisor.summary.contains("No opportunities found"));
        assert!(advisor.summary.contains("50 miles"));
        assert!(advisor.summary.contains("14 days"));
        assert_eq!(advisor.actions.len(), 3);
        assert!(advisor.actions[0].title.contains("radius"));
        assert!(
            advisor.actions[2]
                .reason
                .contains("local_events, grants")
        );
    }

    #[test]
    fn unpriced_card_actions_avoid_fabricated_numbers() {
        let mut fallback = card("fallback", 30);
        fallback.est_revenue = None;
        fallback.cost = None;
        fallback.roi_est = None;
        let advisor = build_advisor(&scope(), &[fallback]);
        assert_eq!(advisor.actions[0].impact, "Revenue impact not estimated");
        assert_eq!(
            advisor.actions[0].reason,
            "Fit score 30; financials unavailable"
        );
    }
}
