//! Resource sheet ingestion.
//!
//! This crate loads the resource master list into an in-memory
//! [`InputTable`](cards_model::InputTable).
//!
//! # Features
//!
//! - **Workbooks**: xlsx, xlsm, xlsb, xls and ods through `calamine`
//! - **CSV**: plain CSV with per-column number inference
//! - **Headers**: blank and repeated header cells get stable unique names
//! - **Missing values**: empty cells and NA sentinel text become `Missing`
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use cards_ingest::{LoadOptions, load_table};
//!
//! let table = load_table(Path::new("resources.xlsx"), &LoadOptions::default())?;
//! ```

mod cells;
mod csv_table;
mod error;
mod header;
mod loader;
mod options;
mod workbook;

// === Error Types ===
pub use error::{IngestError, Result};

// === Loading ===
pub use loader::{InputFormat, load_table};
pub use options::LoadOptions;

// === Readers ===
pub use csv_table::{ColumnKind, infer_column_kind, read_csv_table};
pub use workbook::{format_datetime, range_to_table, read_workbook_table, workbook_cell};

// === Cell and Header Helpers ===
pub use cells::{NA_SENTINELS, is_na_sentinel, number_cell, text_cell};
pub use header::build_headers;
