//! Resolve which rate-table row applies to a county / city pair.

use crate::{JurisdictionKind, JurisdictionRecord};

/// The five boroughs, which report under the single New York City row
/// rather than their own county rows.
const NYC_COUNTIES: [&str; 5] = ["BRONX", "KINGS", "NEW YORK", "QUEENS", "RICHMOND"];

/// Normalize a jurisdiction name for matching: uppercase, drop "(CITY)"
/// tokens, collapse whitespace runs.
fn normalize_name(value: &str) -> String {
    value
        .to_uppercase()
        .replace("(CITY)", " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// The outcome of a rate lookup: the matched row's rate fields plus
/// which row supplied them.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRate {
    pub reporting_code: String,
    pub tax_rate_percent: f64,
    pub tax_rate_decimal: f64,
    pub source_kind: JurisdictionKind,
    pub source_locality: String,
}

impl ResolvedRate {
    fn from_record(record: &JurisdictionRecord) -> Self {
        Self {
            reporting_code: record.reporting_code.clone(),
            tax_rate_percent: record.tax_rate_percent,
            tax_rate_decimal: record.tax_rate_decimal(),
            source_kind: record.kind,
            source_locality: record.locality.clone(),
        }
    }
}

/// Pick the row that applies to `county` (and optionally `city`).
///
/// Precedence, first hit wins:
/// 1. a borough county resolves to the New York City row
/// 2. a city row whose parent county and base name both match
/// 3. the county's "– except" row
/// 4. the plain county row
/// 5. the statewide row
///
/// Returns `None` only when none of the above exist in `records`.
pub fn resolve_rate(
    records: &[JurisdictionRecord],
    county: &str,
    city: Option<&str>,
) -> Option<ResolvedRate> {
    let county_name = normalize_name(county);
    let city_name = city.map(normalize_name).filter(|c| !c.is_empty());

    if NYC_COUNTIES.contains(&county_name.as_str())
        && let Some(row) = records.iter().find(|r| r.kind == JurisdictionKind::Nyc)
    {
        return Some(ResolvedRate::from_record(row));
    }

    if let Some(city_name) = &city_name
        && let Some(row) = records.iter().find(|r| {
            r.kind == JurisdictionKind::City
                && r.parent_county
                    .as_deref()
                    .is_some_and(|p| normalize_name(p) == county_name)
                && normalize_name(&r.base) == *city_name
        })
    {
        return Some(ResolvedRate::from_record(row));
    }

    let county_row = |kind: JurisdictionKind| {
        records
            .iter()
            .find(|r| r.kind == kind && normalize_name(&r.base) == county_name)
    };

    if let Some(row) = county_row(JurisdictionKind::CountyOutside) {
        return Some(ResolvedRate::from_record(row));
    }
    if let Some(row) = county_row(JurisdictionKind::County) {
        return Some(ResolvedRate::from_record(row));
    }

    records
        .iter()
        .find(|r| r.kind == JurisdictionKind::StateOnly)
        .map(ResolvedRate::from_record)
}
