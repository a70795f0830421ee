//! Effective-date inference from the publication's cover lines.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// How deep into the document to look. The effective date sits on the
/// cover, well before the data region starts.
const SCAN_WINDOW: usize = 40;

/// Example: "Effective March 1, 2025". Month names are matched exactly.
static EFFECTIVE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Effective\s+([A-Za-z]+)\s+([0-9]{1,2}),\s+([0-9]{4})").unwrap());

/// Find the publication's effective date.
///
/// Only the first 40 lines are examined; the first line matching the
/// "Effective <Month> <Day>, <Year>" pattern decides the outcome. Returns
/// `None` when no line matches, or when the matched text is not a real
/// calendar date (e.g. "February 30").
pub fn infer_effective_date(lines: &[String]) -> Option<NaiveDate> {
    for line in lines.iter().take(SCAN_WINDOW) {
        if let Some(caps) = EFFECTIVE_RE.captures(line) {
            let month = month_number(&caps[1])?;
            let day: u32 = caps[2].parse().ok()?;
            let year: i32 = caps[3].parse().ok()?;
            return NaiveDate::from_ymd_opt(year, month, day);
        }
    }
    None
}

fn month_number(name: &str) -> Option<u32> {
    let n = match name {
        "January" => 1,
        "February" => 2,
        "March" => 3,
        "April" => 4,
        "May" => 5,
        "June" => 6,
        "July" => 7,
        "August" => 8,
        "September" => 9,
        "October" => 10,
        "November" => 11,
        "December" => 12,
        _ => return None,
    };
    Some(n)
}
