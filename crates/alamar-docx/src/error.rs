//! DOCX error types

use thiserror::Error;

/// Result type for DOCX operations
pub type DocxResult<T> = std::result::Result<T, DocxError>;

/// Errors that can occur while writing a DOCX file
#[derive(Debug, Error)]
pub enum DocxError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Table rows with inconsistent column counts
    #[error("Row {row} has {got} cells, expected {expected}")]
    RaggedTable {
        row: usize,
        got: usize,
        expected: usize,
    },
}
