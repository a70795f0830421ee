//! End-to-end pipeline tests over canned document text.

use std::path::Path;

use pub718_core::{BackendError, JurisdictionKind, PdfBackend};
use pub718_parsing::{ParsingError, extract_rates};

/// Backend that returns canned text instead of reading a PDF.
struct FixedTextBackend(&'static str);

impl PdfBackend for FixedTextBackend {
    fn extract_text(&self, _path: &Path) -> Result<String, BackendError> {
        Ok(self.0.to_string())
    }
}

struct FailingBackend;

impl PdfBackend for FailingBackend {
    fn extract_text(&self, _path: &Path) -> Result<String, BackendError> {
        Err(BackendError::Open("no such file".into()))
    }
}

const SAMPLE_DOC: &str = "\
Publication 718\n\
New York State Sales and Use Tax Rates by Jurisdiction\n\
Effective March 1, 2025\n\
\n\
Taxing jurisdiction\tRate\n\
New York State only\n\
4\n\
0021\n\
Albany\u{2002}\n\
8\n\
0181\n\
Cayuga – except\n\
8\n\
0502\n\
Auburn (city)\n\
8\n\
0561\n\
*Bronx – see New York City\n\
New York City\n\
8⅞\n\
8081\n\
Page 2 of 2\n";

#[test]
fn test_full_document_extraction() {
    let backend = FixedTextBackend(SAMPLE_DOC);
    let result = extract_rates(Path::new("pub718.pdf"), &backend).unwrap();

    assert_eq!(result.effective_date.unwrap().to_string(), "2025-03-01");

    let records = &result.records;
    assert_eq!(records.len(), 5);

    assert_eq!(records[0].kind, JurisdictionKind::StateOnly);
    assert_eq!(records[0].tax_rate_percent, 4.0);

    assert_eq!(records[1].locality, "Albany");
    assert_eq!(records[1].kind, JurisdictionKind::County);

    assert_eq!(records[2].kind, JurisdictionKind::CountyOutside);
    assert_eq!(records[2].base, "Cayuga");

    assert_eq!(records[3].kind, JurisdictionKind::City);
    assert_eq!(records[3].parent_county.as_deref(), Some("Cayuga"));

    assert_eq!(records[4].kind, JurisdictionKind::Nyc);
    assert_eq!(records[4].tax_rate_percent, 8.875);
    assert_eq!(records[4].reporting_code, "8081");
}

#[test]
fn test_trailing_furniture_does_not_produce_records() {
    let backend = FixedTextBackend(SAMPLE_DOC);
    let result = extract_rates(Path::new("pub718.pdf"), &backend).unwrap();
    assert!(result.records.iter().all(|r| !r.locality.contains("Page")));
}

#[test]
fn test_document_without_marker_fails() {
    let backend = FixedTextBackend("Publication 718\nEffective March 1, 2025\nnothing else\n");
    let err = extract_rates(Path::new("pub718.pdf"), &backend).unwrap_err();
    assert!(matches!(err, ParsingError::StartMarkerNotFound));
}

#[test]
fn test_backend_failure_propagates() {
    let err = extract_rates(Path::new("missing.pdf"), &FailingBackend).unwrap_err();
    assert!(matches!(err, ParsingError::Backend(BackendError::Open(_))));
}
