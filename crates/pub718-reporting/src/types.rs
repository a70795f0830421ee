//! Export-shaped types, distinct from the domain types in `pub718-core`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use pub718_core::{JurisdictionKind, JurisdictionRecord};

/// One exported row. Field order here is the CSV column order, and the
/// derived `tax_rate_decimal` is materialized so consumers never
/// recompute it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateRow {
    pub locality: String,
    pub base: String,
    pub kind: JurisdictionKind,
    pub parent_county: Option<String>,
    pub tax_rate_percent: f64,
    pub tax_rate_decimal: f64,
    pub reporting_code: String,
}

impl From<&JurisdictionRecord> for RateRow {
    fn from(record: &JurisdictionRecord) -> Self {
        Self {
            locality: record.locality.clone(),
            base: record.base.clone(),
            kind: record.kind,
            parent_county: record.parent_county.clone(),
            tax_rate_percent: record.tax_rate_percent,
            tax_rate_decimal: record.tax_rate_decimal(),
            reporting_code: record.reporting_code.clone(),
        }
    }
}

impl From<RateRow> for JurisdictionRecord {
    fn from(row: RateRow) -> Self {
        Self {
            locality: row.locality,
            base: row.base,
            kind: row.kind,
            parent_county: row.parent_county,
            tax_rate_percent: row.tax_rate_percent,
            reporting_code: row.reporting_code,
        }
    }
}

/// The JSON envelope written next to the CSV.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatesFile {
    /// Base name of the input file.
    pub source_pdf: String,
    /// ISO date, or null when the cover lines carried none.
    pub effective_date: Option<NaiveDate>,
    /// RFC 3339 UTC timestamp ("Z" suffix) of when the file was written.
    pub generated_utc: String,
    pub rows: Vec<RateRow>,
}

impl RatesFile {
    /// The rows as domain records, for running lookups against a
    /// previously generated file.
    pub fn into_records(self) -> Vec<JurisdictionRecord> {
        self.rows.into_iter().map(JurisdictionRecord::from).collect()
    }
}
