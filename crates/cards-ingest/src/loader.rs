//! Input format dispatch.

use std::path::Path;

use tracing::info;

use cards_model::InputTable;

use crate::csv_table::read_csv_table;
use crate::error::{IngestError, Result};
use crate::options::LoadOptions;
use crate::workbook::read_workbook_table;

/// Supported input file kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Workbook,
    Csv,
}

impl InputFormat {
    /// Detect the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match extension.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(Self::Workbook),
            "csv" => Ok(Self::Csv),
            _ => Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}

/// Load the whole input sheet into memory.
///
/// # Errors
///
/// Returns [`IngestError::MissingInput`] when the file does not exist, before
/// any parsing happens. Parse failures surface as workbook or CSV errors.
pub fn load_table(path: &Path, options: &LoadOptions) -> Result<InputTable> {
    let exists = path.try_exists().map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    if !exists {
        return Err(IngestError::MissingInput {
            path: path.to_path_buf(),
        });
    }
    let format = InputFormat::from_path(path)?;
    let table = match format {
        InputFormat::Workbook => read_workbook_table(path, options)?,
        InputFormat::Csv => read_csv_table(path, options)?,
    };
    info!(
        path = %path.display(),
        format = ?format,
        rows = table.len(),
        columns = table.columns.len(),
        "loaded input table"
    );
    Ok(table)
}
