use std::fs;
use std::path::Path;

use cards_ingest::{IngestError, InputFormat, LoadOptions, load_table};
use cards_model::CellValue;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn missing_input_is_reported_before_parsing() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("absent.xlsx");
    let err = load_table(&path, &LoadOptions::default()).expect_err("missing file");
    match err {
        IngestError::MissingInput { path: reported } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_input_wins_over_unknown_extension() {
    let err = load_table(Path::new("/nonexistent/listing.txt"), &LoadOptions::default())
        .expect_err("missing file");
    assert!(matches!(err, IngestError::MissingInput { .. }));
}

#[test]
fn detects_formats_by_extension() {
    assert_eq!(
        InputFormat::from_path(Path::new("a.XLSX")).expect("xlsx"),
        InputFormat::Workbook
    );
    assert_eq!(
        InputFormat::from_path(Path::new("a.ods")).expect("ods"),
        InputFormat::Workbook
    );
    assert_eq!(
        InputFormat::from_path(Path::new("a.csv")).expect("csv"),
        InputFormat::Csv
    );
    assert!(matches!(
        InputFormat::from_path(Path::new("a.json")),
        Err(IngestError::UnsupportedFormat { .. })
    ));
}

#[test]
fn corrupt_workbook_is_malformed() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(&dir, "broken.xlsx", b"this is not a zip archive");
    let err = load_table(&path, &LoadOptions::default()).expect_err("corrupt workbook");
    assert!(err.is_malformed(), "unexpected error: {err}");
}

#[test]
fn loads_csv_through_dispatch() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(
        &dir,
        "resources.csv",
        "title,users,topics\nGuide,\"pts, cps\",feeding\n".as_bytes(),
    );
    let table = load_table(&path, &LoadOptions::default()).expect("load csv");
    assert_eq!(table.columns, vec!["title", "users", "topics"]);
    assert_eq!(table.cell(0, "users"), Some(&CellValue::from("pts, cps")));
}
