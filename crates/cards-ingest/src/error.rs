//! Error types for resource sheet ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the input table.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file does not exist. Raised before any parsing.
    #[error("missing input file: {path}")]
    MissingInput { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Extension is neither a workbook nor CSV.
    #[error("unsupported input format '{extension}' for {path}")]
    UnsupportedFormat { path: PathBuf, extension: String },

    // === Parsing Errors ===
    /// Workbook could not be opened or a sheet could not be read.
    #[error("failed to read workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    /// Requested worksheet is absent, or the workbook has none.
    #[error("worksheet {sheet} not found in {path}")]
    NoSheet { path: PathBuf, sheet: String },

    /// Failed to parse CSV.
    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },
}

impl IngestError {
    /// True for the parse failures of a present but unreadable sheet.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::Workbook { .. } | Self::NoSheet { .. } | Self::Csv { .. }
        )
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
