//! The rate-table walk: three-line windows, one-line resynchronization.

use tracing::debug;

use pub718_core::{JurisdictionKind, JurisdictionRecord};

use crate::ParsingError;
use crate::rate::{is_reporting_code, parse_rate_percent};
use crate::text::clean_name;

/// First data row of every edition; everything before it is cover matter.
pub const START_MARKER: &str = "New York State only";

/// Suffix on county rows whose rate excludes the cities listed beneath.
const EXCEPT_SUFFIX: &str = " – except";

/// Walk the data region and emit one record per valid three-line window
/// (name, rate, code).
///
/// A window whose rate or code cell fails validation is dropped and the
/// walk advances by a single line: misalignment is assumed, not missing
/// data, and the skip granularity is part of the contract. A successful
/// window advances by three. The walk stops when fewer than three lines
/// remain.
///
/// City rows inherit `parent_county` from whichever county row was seen
/// last; the statewide and New York City rows reset that tracker.
pub fn parse_records(lines: &[String]) -> Result<Vec<JurisdictionRecord>, ParsingError> {
    let start = lines
        .iter()
        .position(|line| line == START_MARKER)
        .ok_or(ParsingError::StartMarkerNotFound)?;

    let data = &lines[start..];
    let mut records = Vec::new();
    let mut current_county: Option<String> = None;
    let mut dropped_windows = 0usize;

    let mut i = 0;
    while i + 2 < data.len() {
        let name_raw = data[i].trim();

        // Cross-references like "*Bronx – see New York City" are
        // footnotes, not data rows.
        if name_raw.contains("see New York City") {
            i += 1;
            continue;
        }

        let name = clean_name(name_raw);
        let rate_line = data[i + 1].trim();
        let code_line = data[i + 2].trim();

        let rate_percent = match parse_rate_percent(rate_line) {
            Some(rate) if is_reporting_code(code_line) => rate,
            _ => {
                dropped_windows += 1;
                i += 1;
                continue;
            }
        };

        let mut kind = JurisdictionKind::County;
        let mut parent = None;
        let mut base = name.clone();

        if name == START_MARKER {
            kind = JurisdictionKind::StateOnly;
            current_county = None;
        } else if name == "New York City" {
            kind = JurisdictionKind::Nyc;
            current_county = None;
        } else if name.ends_with("(city)") {
            kind = JurisdictionKind::City;
            parent = current_county.clone();
        } else if name.contains(EXCEPT_SUFFIX) {
            kind = JurisdictionKind::CountyOutside;
            base = name.replace(EXCEPT_SUFFIX, "").trim().to_string();
            current_county = Some(base.clone());
        } else {
            // plain county row
            current_county = Some(name.clone());
        }

        records.push(JurisdictionRecord {
            locality: name,
            base,
            kind,
            parent_county: parent,
            tax_rate_percent: rate_percent,
            reporting_code: code_line.to_string(),
        });
        i += 3;
    }

    if dropped_windows > 0 {
        debug!(dropped_windows, "dropped misaligned windows during table walk");
    }

    Ok(records)
}
