//! Writing (and re-reading) the per-conversion output files.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, SecondsFormat, Utc};
use thiserror::Error;

use pub718_core::JurisdictionRecord;

use crate::types::{RateRow, RatesFile};

/// File-name key used when no effective date could be inferred.
const UNKNOWN_DATE: &str = "unknown-date";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Paths of the two files written for one conversion.
#[derive(Debug, Clone)]
pub struct ExportPaths {
    pub csv: PathBuf,
    pub json: PathBuf,
}

/// Write `pub718_rates_<date>.csv` and `pub718_rates_<date>.json` under
/// `outdir`, creating the directory if absent.
///
/// Both files are pure serializations of `records`: the CSV carries one
/// row per record in parse order, the JSON wraps the same rows in an
/// envelope with the source file name, the effective date (null when
/// unknown) and a UTC generation timestamp.
pub fn export_rates(
    records: &[JurisdictionRecord],
    effective_date: Option<NaiveDate>,
    source_pdf: &Path,
    outdir: &Path,
) -> Result<ExportPaths, ExportError> {
    fs::create_dir_all(outdir)?;

    let date_key = effective_date
        .map(|d| d.to_string())
        .unwrap_or_else(|| UNKNOWN_DATE.to_string());

    let csv_path = outdir.join(format!("pub718_rates_{date_key}.csv"));
    let json_path = outdir.join(format!("pub718_rates_{date_key}.json"));

    let rows: Vec<RateRow> = records.iter().map(RateRow::from).collect();

    let mut writer = csv::Writer::from_path(&csv_path)?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    let source_name = source_pdf
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| source_pdf.display().to_string());

    let envelope = RatesFile {
        source_pdf: source_name,
        effective_date,
        generated_utc: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        rows,
    };
    fs::write(&json_path, serde_json::to_string_pretty(&envelope)?)?;

    Ok(ExportPaths {
        csv: csv_path,
        json: json_path,
    })
}

/// Re-read a previously written JSON envelope.
pub fn load_rates_file(path: &Path) -> Result<RatesFile, ExportError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pub718_core::JurisdictionKind;

    fn sample_records() -> Vec<JurisdictionRecord> {
        vec![
            JurisdictionRecord {
                locality: "New York State only".to_string(),
                base: "New York State only".to_string(),
                kind: JurisdictionKind::StateOnly,
                parent_county: None,
                tax_rate_percent: 4.0,
                reporting_code: "0021".to_string(),
            },
            JurisdictionRecord {
                locality: "Auburn (city)".to_string(),
                base: "Auburn (city)".to_string(),
                kind: JurisdictionKind::City,
                parent_county: Some("Cayuga".to_string()),
                tax_rate_percent: 8.0,
                reporting_code: "0561".to_string(),
            },
        ]
    }

    #[test]
    fn test_filenames_keyed_by_effective_date() {
        let dir = tempfile::tempdir().unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 3, 1);
        let paths =
            export_rates(&sample_records(), date, Path::new("pub718.pdf"), dir.path()).unwrap();
        assert!(paths.csv.ends_with("pub718_rates_2025-03-01.csv"));
        assert!(paths.json.ends_with("pub718_rates_2025-03-01.json"));
        assert!(paths.csv.exists());
        assert!(paths.json.exists());
    }

    #[test]
    fn test_unknown_date_fallback_in_filenames() {
        let dir = tempfile::tempdir().unwrap();
        let paths =
            export_rates(&sample_records(), None, Path::new("pub718.pdf"), dir.path()).unwrap();
        assert!(paths.csv.ends_with("pub718_rates_unknown-date.csv"));
        assert!(paths.json.ends_with("pub718_rates_unknown-date.json"));
    }

    #[test]
    fn test_outdir_created_if_absent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("rates");
        let paths =
            export_rates(&sample_records(), None, Path::new("pub718.pdf"), &nested).unwrap();
        assert!(paths.csv.exists());
    }

    #[test]
    fn test_csv_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 3, 1);
        let paths =
            export_rates(&sample_records(), date, Path::new("pub718.pdf"), dir.path()).unwrap();

        let content = fs::read_to_string(&paths.csv).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "locality,base,kind,parent_county,tax_rate_percent,tax_rate_decimal,reporting_code"
        );
        let first = lines.next().unwrap();
        assert!(first.starts_with("New York State only,New York State only,state_only,,"));
        assert!(first.ends_with(",0021"));
        let second = lines.next().unwrap();
        assert!(second.contains(",city,Cayuga,"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_json_envelope_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 3, 1);
        let records = sample_records();
        let paths = export_rates(&records, date, Path::new("pub718.pdf"), dir.path()).unwrap();

        let envelope = load_rates_file(&paths.json).unwrap();
        assert_eq!(envelope.source_pdf, "pub718.pdf");
        assert_eq!(envelope.effective_date, date);
        assert!(envelope.generated_utc.ends_with('Z'));
        assert_eq!(envelope.rows.len(), 2);
        assert_eq!(envelope.rows[1].tax_rate_decimal, 0.08);
        assert_eq!(envelope.into_records(), records);
    }

    #[test]
    fn test_json_effective_date_null_when_unknown() {
        let dir = tempfile::tempdir().unwrap();
        let paths =
            export_rates(&sample_records(), None, Path::new("pub718.pdf"), dir.path()).unwrap();

        let raw = fs::read_to_string(&paths.json).unwrap();
        assert!(raw.contains("\"effective_date\": null"));
        let envelope = load_rates_file(&paths.json).unwrap();
        assert_eq!(envelope.effective_date, None);
    }
}
