use std::io::Write;

use owo_colors::OwoColorize;

use pub718_core::ResolvedRate;
use pub718_reporting::ExportPaths;

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Print the conversion result: both output paths and the row count.
pub fn print_conversion_summary(
    w: &mut dyn Write,
    paths: &ExportPaths,
    row_count: usize,
    effective_date: Option<&str>,
    color: ColorMode,
) -> std::io::Result<()> {
    match effective_date {
        Some(date) => writeln!(w, "Effective date: {}", date)?,
        None => {
            let msg = "No effective date found on the cover; output keyed as \"unknown-date\"";
            if color.enabled() {
                writeln!(w, "{}", msg.yellow())?;
            } else {
                writeln!(w, "{}", msg)?;
            }
        }
    }

    writeln!(w, "Wrote {}", paths.csv.display())?;
    writeln!(w, "Wrote {}", paths.json.display())?;

    if color.enabled() {
        writeln!(w, "{} jurisdictions extracted", row_count.green())?;
    } else {
        writeln!(w, "{} jurisdictions extracted", row_count)?;
    }
    Ok(())
}

/// Print one resolved rate lookup.
pub fn print_resolved_rate(
    w: &mut dyn Write,
    resolved: &ResolvedRate,
    color: ColorMode,
) -> std::io::Result<()> {
    let rate = format!(
        "{}% ({})",
        resolved.tax_rate_percent, resolved.tax_rate_decimal
    );
    if color.enabled() {
        writeln!(w, "Rate:   {}", rate.green())?;
        writeln!(w, "Code:   {}", resolved.reporting_code.bold())?;
    } else {
        writeln!(w, "Rate:   {}", rate)?;
        writeln!(w, "Code:   {}", resolved.reporting_code)?;
    }
    writeln!(
        w,
        "Source: {} ({})",
        resolved.source_locality,
        resolved.source_kind.as_str()
    )?;
    Ok(())
}
