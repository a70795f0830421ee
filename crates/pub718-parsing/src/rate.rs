//! Rate and reporting-code cell validation.

use once_cell::sync::Lazy;
use regex::Regex;

/// A rate cell is an integer optionally followed by one vulgar-fraction
/// glyph, e.g. "4", "7½", "10¼". Nothing else.
static RATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]+)([¼½¾⅛⅜⅝⅞])?$").unwrap());

/// Reporting codes are exactly four ASCII digits.
static CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4}$").unwrap());

/// Percentage-point value of one vulgar-fraction glyph.
fn fraction_value(glyph: char) -> Option<f64> {
    match glyph {
        '¼' => Some(0.25),
        '½' => Some(0.5),
        '¾' => Some(0.75),
        '⅛' => Some(0.125),
        '⅜' => Some(0.375),
        '⅝' => Some(0.625),
        '⅞' => Some(0.875),
        _ => None,
    }
}

/// Parse a printed rate cell into percentage points.
///
/// Returns `None` for anything that is not `<integer>[<fraction glyph>]`.
pub fn parse_rate_percent(s: &str) -> Option<f64> {
    let caps = RATE_RE.captures(s.trim())?;
    let mut value: f64 = caps[1].parse().ok()?;
    if let Some(glyph) = caps.get(2) {
        value += fraction_value(glyph.as_str().chars().next()?)?;
    }
    Some(value)
}

/// Whether `s` is a valid reporting code. Codes are opaque text, never
/// numbers: "0007" stays "0007".
pub fn is_reporting_code(s: &str) -> bool {
    CODE_RE.is_match(s)
}
