//! Card conversion pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: Load the whole input sheet into memory
//! 2. **Transform**: Split array columns, normalize vocabularies, build cards
//! 3. **Output**: Write the JSON document (or render only, on a dry run)
//!
//! Each stage takes the output of the previous stage. Any failure aborts the
//! run; nothing is written unless every earlier stage succeeded.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use cards_ingest::{LoadOptions, load_table};
use cards_model::{Card, InputTable};
use cards_output::{WriteSummary, render_cards, write_cards};
use cards_transform::build_cards;

/// Fixed input file name of the resource master list.
pub const DEFAULT_INPUT: &str = "Cleaned_ALS_Website_Resource_MasterList_0409_2025.xlsx";

/// Fixed output document name read by the catalog front end.
pub const DEFAULT_OUTPUT: &str = "resources.json";

/// Everything a single conversion run needs.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub load: LoadOptions,
    /// Render and check the document without writing it.
    pub dry_run: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            load: LoadOptions::default(),
            dry_run: false,
        }
    }
}

/// Result of a conversion run.
#[derive(Debug)]
pub struct ConvertResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rows: usize,
    pub cards: usize,
    /// Size of the rendered document in bytes.
    pub bytes: usize,
    /// True when the document was written to `output`.
    pub written: bool,
}

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Load the input sheet.
pub fn ingest(input: &Path, options: &LoadOptions) -> Result<InputTable> {
    let span = info_span!("ingest", input = %input.display());
    let _guard = span.enter();
    let table = load_table(input, options)?;
    info!(rows = table.len(), columns = table.columns.len(), "ingest complete");
    Ok(table)
}

// ============================================================================
// Stage 2: Transform
// ============================================================================

/// Build one card per input row.
pub fn transform(table: &InputTable) -> Vec<Card> {
    let span = info_span!("transform", rows = table.len());
    let _guard = span.enter();
    let cards = build_cards(table);
    info!(cards = cards.len(), "transform complete");
    cards
}

// ============================================================================
// Stage 3: Output
// ============================================================================

/// Write the cards, or only render them when `dry_run` is set.
pub fn output(path: &Path, cards: &[Card], dry_run: bool) -> Result<WriteSummary> {
    let span = info_span!("output", output = %path.display(), dry_run);
    let _guard = span.enter();
    if dry_run {
        let rendered = render_cards(cards).context("render cards")?;
        info!(cards = cards.len(), bytes = rendered.len(), "dry run: document not written");
        return Ok(WriteSummary {
            path: path.to_path_buf(),
            cards: cards.len(),
            bytes: rendered.len(),
        });
    }
    let summary = write_cards(path, cards).context("write cards")?;
    Ok(summary)
}

/// Run every stage once: load, transform, write.
pub fn run_convert(config: &PipelineConfig) -> Result<ConvertResult> {
    let start = Instant::now();
    let table = ingest(&config.input, &config.load)?;
    let cards = transform(&table);
    let summary = output(&config.output, &cards, config.dry_run)?;
    info!(
        cards = summary.cards,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "conversion finished"
    );
    Ok(ConvertResult {
        input: config.input.clone(),
        output: summary.path,
        rows: table.len(),
        cards: summary.cards,
        bytes: summary.bytes,
        written: !config.dry_run,
    })
}
