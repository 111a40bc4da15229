//! Conversion rate reference table.
//!
//! Static industry-category × opportunity-type mapping of visitor/lead →
//! paying-customer conversion ranges. The pipeline always uses the LOW end
//! of a range, and the documented ceiling is a hard clamp: no input can push
//! the selected rate above it. Initialized once at process start and
//! injected into the estimator and ops planner as a read-only dependency.

use std::sync::LazyLock;

use scout_core::enums::OpportunityType;

// ---------------------------------------------------------------------------
// IndustryCategory
// ---------------------------------------------------------------------------

/// Coarse industry bucket used to key the rate table. Free-form industry
/// strings collapse into one of these via keyword matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndustryCategory {
    Food,
    Retail,
    Services,
    Generic,
}

impl IndustryCategory {
    /// Categorize a free-form industry string. `"Unknown"` and anything
    /// unrecognized fall into `Generic`.
    #[must_use]
    pub fn categorize(industry: &str) -> Self {
        let lower = industry.to_lowercase();
        let matches_any = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

        if matches_any(&["food", "truck", "catering", "restaurant", "bakery", "cafe"]) {
            Self::Food
        } else if matches_any(&["retail", "shop", "store", "boutique"]) {
            Self::Retail
        } else if matches_any(&["service", "cleaning", "landscap", "repair", "salon", "plumb"]) {
            Self::Services
        } else {
            Self::Generic
        }
    }
}

// ---------------------------------------------------------------------------
// ConversionRateTable
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
struct RateEntry {
    category: IndustryCategory,
    ty: OpportunityType,
    low: f64,
    ceiling: f64,
}

/// Immutable lookup table of conversion ranges.
#[derive(Debug)]
pub struct ConversionRateTable {
    entries: Vec<RateEntry>,
}

/// Generic per-type ranges used when no industry-specific entry exists.
const GENERIC_RANGES: &[(OpportunityType, f64, f64)] = &[
    (OpportunityType::GovernmentContracts, 0.05, 0.10),
    (OpportunityType::Grants, 0.10, 0.20),
    (OpportunityType::TradeShows, 0.04, 0.08),
    (OpportunityType::LocalEvents, 0.05, 0.10),
    (OpportunityType::Partnerships, 0.10, 0.20),
    (OpportunityType::VendorListings, 0.05, 0.10),
    (OpportunityType::Certifications, 0.20, 0.30),
];

/// Industry-specific overrides. Low end first, documented ceiling second.
const INDUSTRY_RANGES: &[(IndustryCategory, OpportunityType, f64, f64)] = &[
    (IndustryCategory::Food, OpportunityType::LocalEvents, 0.08, 0.12),
    (IndustryCategory::Food, OpportunityType::TradeShows, 0.05, 0.10),
    (IndustryCategory::Retail, OpportunityType::LocalEvents, 0.06, 0.10),
    (IndustryCategory::Retail, OpportunityType::TradeShows, 0.04, 0.08),
    (IndustryCategory::Services, OpportunityType::Partnerships, 0.15, 0.25),
];

static STANDARD: LazyLock<ConversionRateTable> = LazyLock::new(ConversionRateTable::build);

impl ConversionRateTable {
    /// The process-wide standard table, built once.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    fn build() -> Self {
        let mut entries = Vec::new();
        for &(category, ty, low, ceiling) in INDUSTRY_RANGES {
            entries.push(RateEntry { category, ty, low, ceiling });
        }
        for &(ty, low, ceiling) in GENERIC_RANGES {
            entries.push(RateEntry {
                category: IndustryCategory::Generic,
                ty,
                low,
                ceiling,
            });
        }
        Self { entries }
    }

    fn entry(&self, category: IndustryCategory, ty: OpportunityType) -> RateEntry {
        self.entries
            .iter()
            .copied()
            .find(|e| e.category == category && e.ty == ty)
            .or_else(|| {
                self.entries
                    .iter()
                    .copied()
                    .find(|e| e.category == IndustryCategory::Generic && e.ty == ty)
            })
            .unwrap_or(RateEntry {
                category: IndustryCategory::Generic,
                ty,
                low: 0.05,
                ceiling: 0.10,
            })
    }

    /// Conservative conversion rate for the industry/type pair: the low end
    /// of the documented range, clamped to its ceiling.
    #[must_use]
    pub fn rate(&self, industry: &str, ty: OpportunityType) -> f64 {
        let entry = self.entry(IndustryCategory::categorize(industry), ty);
        entry.low.min(entry.ceiling)
    }

    /// The hard ceiling for the industry/type pair.
    #[must_use]
    pub fn ceiling(&self, industry: &str, ty: OpportunityType) -> f64 {
        self.entry(IndustryCategory::categorize(industry), ty).ceiling
    }
}
