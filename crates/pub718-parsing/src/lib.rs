use std::path::Path;

use chrono::NaiveDate;
use thiserror::Error;

pub mod date;
pub mod rate;
pub mod records;
pub mod text;

pub use date::infer_effective_date;
pub use rate::{is_reporting_code, parse_rate_percent};
pub use records::{START_MARKER, parse_records};
pub use text::{clean_name, normalize_lines};
// Re-export domain types from core (canonical definitions live there)
pub use pub718_core::{BackendError, JurisdictionKind, JurisdictionRecord, PdfBackend};

#[derive(Error, Debug)]
pub enum ParsingError {
    #[error("start marker \"New York State only\" not found in document text")]
    StartMarkerNotFound,
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),
}

/// Everything extracted from one Publication 718 document.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Effective date from the cover lines, when one was found.
    pub effective_date: Option<NaiveDate>,
    /// Jurisdiction records in source-document order.
    pub records: Vec<JurisdictionRecord>,
}

/// Extract the jurisdiction rate table from a PDF, using `backend` for
/// text extraction.
///
/// Pipeline:
/// 1. Extract text from the PDF via `backend`
/// 2. Normalize into trimmed, non-empty lines
/// 3. Infer the effective date from the cover lines
/// 4. Walk the data region in three-line windows and emit records
pub fn extract_rates(
    pdf_path: &Path,
    backend: &dyn PdfBackend,
) -> Result<ExtractionResult, ParsingError> {
    let raw_text = backend.extract_text(pdf_path)?;
    let lines = text::normalize_lines(&raw_text);
    let effective_date = date::infer_effective_date(&lines);
    let records = records::parse_records(&lines)?;
    Ok(ExtractionResult {
        effective_date,
        records,
    })
}
