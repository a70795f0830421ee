use serde::{Deserialize, Serialize};

pub mod backend;
pub mod resolve;

// Re-export for convenience
pub use backend::{BackendError, PdfBackend};
pub use resolve::{ResolvedRate, resolve_rate};

/// A single jurisdiction entry from the Publication 718 rate table.
///
/// Records are built once by the parser and never mutated; the row order
/// of the source document is preserved by the containing `Vec`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JurisdictionRecord {
    /// Display name as printed, minus any leading footnote marker.
    pub locality: String,
    /// Name with any "– except" suffix removed; equals `locality` otherwise.
    pub base: String,
    pub kind: JurisdictionKind,
    /// Name of the county a city row was listed under. Weak reference:
    /// whichever county the parser saw last, no integrity beyond that.
    pub parent_county: Option<String>,
    /// Rate in percentage points. The fractional part is always a
    /// multiple of one eighth.
    pub tax_rate_percent: f64,
    /// Exactly four ASCII digits, kept as text so leading zeros survive.
    pub reporting_code: String,
}

impl JurisdictionRecord {
    /// The rate as a multiplier, always `tax_rate_percent / 100`.
    pub fn tax_rate_decimal(&self) -> f64 {
        self.tax_rate_percent / 100.0
    }
}

/// Classification of a rate-table row. Closed set, exactly one per record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JurisdictionKind {
    /// The statewide "New York State only" row.
    StateOnly,
    /// The combined New York City row covering the five boroughs.
    Nyc,
    /// A city listed under a county, marked with a "(city)" suffix.
    City,
    /// A county row carrying a "– except" marker: the rate applies to the
    /// county outside the cities listed beneath it.
    CountyOutside,
    /// A plain county row.
    County,
}

impl JurisdictionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StateOnly => "state_only",
            Self::Nyc => "nyc",
            Self::City => "city",
            Self::CountyOutside => "county_outside",
            Self::County => "county",
        }
    }
}
