//! Source aggregator: deduplicated citations drawn from the card set.

use std::collections::HashSet;

use scout_core::entities::{OpportunityCard, SourceCitation};

const MAX_SOURCES: usize = 8;

/// Collect citations, one per distinct URL, capped at eight. Candidates
/// are considered in earlier-date, higher-fit order so trimming drops the
/// least useful ones.
#[must_use]
pub fn aggregate(cards: &[OpportunityCard]) -> Vec<SourceCitation> {
    let mut ordered: Vec<&OpportunityCard> = cards.iter().collect();
    ordered.sort_by(|a, b| {
        match (a.date, b.date) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        }
        .then_with(|| b.fit_score.cmp(&a.fit_score))
    });

    let mut seen = HashSet::new();
    let mut sources = Vec::new();
    for card in ordered {
        if card.link.is_empty() || !seen.insert(card.link.as_str()) {
            continue;
        }
        sources.push(SourceCitation {
            title: citation_title(&card.provider),
            url: card.link.clone(),
            date: card.date,
            note: format!("Source for {} opportunities", card.ty),
        });
        if sources.len() == MAX_SOURCES {
            break;
        }
    }
    sources
}

/// "grants_gov" → "Grants Gov Listing".
fn citation_title(provider: &str) -> String {
    let mut title = String::with_capacity(provider.len() + 8);
    for word in provider.split('_') {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            if !title.is_empty() {
                title.push(' ');
            }
            title.extend(first.to_uppercase());
            title.push_str(chars.as_str());
        }
    }
    title.push_str(" Listing");
    title
}
