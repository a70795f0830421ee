use std::path::Path;

use thiserror::Error;

/// Failure to read the source document. Both PDF variants are fatal:
/// no partial text is ever produced.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    Open(String),
    #[error("failed to extract text: {0}")]
    Extraction(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for PDF text extraction backends.
///
/// Implementors provide the low-level text extraction step only; line
/// normalization and the rate-table walk live in `pub718-parsing`.
pub trait PdfBackend: Send + Sync {
    /// Extract the full text content of a PDF file, pages in order,
    /// one extracted line per `\n`-terminated line.
    fn extract_text(&self, path: &Path) -> Result<String, BackendError>;
}
