//! Integration tests for the conversion pipeline.

use std::fs;
use std::path::PathBuf;

use cards_cli::pipeline::{PipelineConfig, run_convert};
use cards_cli::summary::success_message;
use cards_ingest::IngestError;
use tempfile::TempDir;

const MASTER_LIST: &str = "\
title,category,topics,users,language,year,link
Planning Ahead,\"Guides, Worksheets\",\"definitions, Definitions, legacy work\",\"PTS, hcps, Families\",\"English, Español\",2024,
Breathing Support,,Feeding,cps,,2023,https://example.org/breathing
";

fn config(dir: &TempDir, input: &str) -> PipelineConfig {
    let input_path = dir.path().join("master.csv");
    fs::write(&input_path, input).expect("write input");
    PipelineConfig {
        input: input_path,
        output: dir.path().join("resources.json"),
        ..PipelineConfig::default()
    }
}

#[test]
fn converts_master_list() {
    let dir = TempDir::new().expect("temp dir");
    let config = config(&dir, MASTER_LIST);
    let result = run_convert(&config).expect("convert");
    assert_eq!(result.rows, 2);
    assert_eq!(result.cards, 2);
    assert!(result.written);

    let written = fs::read_to_string(&config.output).expect("read output");
    insta::assert_snapshot!(written, @r#"
    [
      {
        "title": "Planning Ahead",
        "category": [
          "Guides",
          "Worksheets"
        ],
        "topics": [
          "Definitions",
          "Legacy Work"
        ],
        "users": [
          "patients",
          "clinicians",
          "Families"
        ],
        "language": [
          "English",
          "Español"
        ],
        "year": 2024,
        "link": ""
      },
      {
        "title": "Breathing Support",
        "category": [],
        "topics": [
          "Feeding Assistance Decisions"
        ],
        "users": [
          "carepartners"
        ],
        "language": [],
        "year": 2023,
        "link": "https://example.org/breathing"
      }
    ]
    "#);
}

#[test]
fn reported_count_matches_document_length() {
    let dir = TempDir::new().expect("temp dir");
    let config = config(&dir, MASTER_LIST);
    let result = run_convert(&config).expect("convert");
    let written = fs::read_to_string(&config.output).expect("read output");
    let document: serde_json::Value = serde_json::from_str(&written).expect("valid json");
    let length = document.as_array().map(Vec::len).expect("top-level array");
    assert_eq!(result.cards, length);
    assert_eq!(
        success_message(&result),
        format!("Successfully updated resources.json. Wrote {length} cards to resources.json")
    );
}

#[test]
fn missing_input_fails_without_output() {
    let dir = TempDir::new().expect("temp dir");
    let config = PipelineConfig {
        input: dir.path().join("absent.xlsx"),
        output: dir.path().join("resources.json"),
        ..PipelineConfig::default()
    };
    let error = run_convert(&config).expect_err("missing input");
    let ingest = error
        .downcast_ref::<IngestError>()
        .expect("ingest error in chain");
    assert!(matches!(ingest, IngestError::MissingInput { .. }));
    assert!(format!("{error:#}").contains("absent.xlsx"));
    assert!(!config.output.exists());
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().expect("temp dir");
    let config = PipelineConfig {
        dry_run: true,
        ..config(&dir, MASTER_LIST)
    };
    let result = run_convert(&config).expect("dry run");
    assert_eq!(result.cards, 2);
    assert!(!result.written);
    assert!(!config.output.exists());
    assert!(success_message(&result).starts_with("Dry run: 2 cards"));
}

#[test]
fn header_only_sheet_writes_empty_array() {
    let dir = TempDir::new().expect("temp dir");
    let config = config(&dir, "title,topics\n");
    let result = run_convert(&config).expect("convert");
    assert_eq!(result.cards, 0);
    assert_eq!(
        fs::read_to_string(&config.output).expect("read output"),
        "[]"
    );
}

#[test]
fn default_config_uses_fixed_paths() {
    let config = PipelineConfig::default();
    assert_eq!(
        config.input,
        PathBuf::from("Cleaned_ALS_Website_Resource_MasterList_0409_2025.xlsx")
    );
    assert_eq!(config.output, PathBuf::from("resources.json"));
    assert!(!config.dry_run);
}

#[test]
fn blank_row_becomes_empty_card() {
    let dir = TempDir::new().expect("temp dir");
    let config = config(&dir, "title,topics,year\nFirst,feeding,2024\n,,\nLast,,2025\n");
    let result = run_convert(&config).expect("convert");
    assert_eq!(result.rows, 3);
    assert_eq!(result.cards, 3);

    let written = fs::read_to_string(&config.output).expect("read output");
    let document: serde_json::Value = serde_json::from_str(&written).expect("valid json");
    assert_eq!(
        document[1],
        serde_json::json!({"title": "", "topics": [], "year": ""})
    );
    assert_eq!(document[2]["title"], "Last");
}
