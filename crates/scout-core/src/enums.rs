//! Closed enums for opportunity types, weather badges, run modes, and
//! risk levels.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Per-type constants (query keywords, default providers) live here so the
//! branch logic stays in one place instead of string comparisons scattered
//! across call sites.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// OpportunityType
// ---------------------------------------------------------------------------

/// The closed set of opportunity categories Scout searches for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityType {
    GovernmentContracts,
    Grants,
    TradeShows,
    LocalEvents,
    Partnerships,
    VendorListings,
    Certifications,
}

impl OpportunityType {
    /// Every variant, in canonical order.
    pub const ALL: &'static [Self] = &[
        Self::GovernmentContracts,
        Self::Grants,
        Self::TradeShows,
        Self::LocalEvents,
        Self::Partnerships,
        Self::VendorListings,
        Self::Certifications,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GovernmentContracts => "government_contracts",
            Self::Grants => "grants",
            Self::TradeShows => "trade_shows",
            Self::LocalEvents => "local_events",
            Self::Partnerships => "partnerships",
            Self::VendorListings => "vendor_listings",
            Self::Certifications => "certifications",
        }
    }

    /// Human-readable label for titles and fallback cards.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::GovernmentContracts => "Government Contracts",
            Self::Grants => "Grants",
            Self::TradeShows => "Trade Shows",
            Self::LocalEvents => "Local Events",
            Self::Partnerships => "Partnerships",
            Self::VendorListings => "Vendor Listings",
            Self::Certifications => "Certifications",
        }
    }

    /// Type-specific keyword suffix appended to the search phrase.
    #[must_use]
    pub const fn query_keywords(self) -> &'static str {
        match self {
            Self::GovernmentContracts => "RFP government contract procurement",
            Self::Grants => "grant funding program",
            Self::TradeShows => "trade show expo convention",
            Self::LocalEvents => "local event festival pop-up",
            Self::Partnerships => "partnership supplier program",
            Self::VendorListings => "vendor subcontractor listing",
            Self::Certifications => "certification training program",
        }
    }

    /// Provider name assigned to a card when the raw hit carries none.
    #[must_use]
    pub const fn default_provider(self) -> &'static str {
        match self {
            Self::GovernmentContracts => "sam_gov",
            Self::Grants => "grants_gov",
            Self::TradeShows => "trade_site",
            Self::LocalEvents => "eventbrite",
            Self::Partnerships | Self::VendorListings => "vendor_portal",
            Self::Certifications => "training_registry",
        }
    }

    /// Whether this type is an in-person event whose outcome depends on
    /// weather. Only these types ever carry a weather badge.
    #[must_use]
    pub const fn weather_eligible(self) -> bool {
        matches!(self, Self::LocalEvents | Self::TradeShows)
    }

    /// Parse the snake_case wire form. Returns `None` for anything outside
    /// the closed set.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == s)
    }
}

impl fmt::Display for OpportunityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// WeatherBadge
// ---------------------------------------------------------------------------

/// Coarse outdoor-suitability classification for an event-like opportunity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WeatherBadge {
    Good,
    Mixed,
    Poor,
}

impl WeatherBadge {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Mixed => "mixed",
            Self::Poor => "poor",
        }
    }
}

impl fmt::Display for WeatherBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// Run mode for a report request. `Demo` serves deterministic canned data
/// from the provider layer; `Live` issues real HTTP calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Demo,
    #[default]
    Live,
}

impl Mode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Demo => "demo",
            Self::Live => "live",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RiskLevel
// ---------------------------------------------------------------------------

/// Severity of an advisor risk entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Med,
    High,
}

impl RiskLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Med => "med",
            Self::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
