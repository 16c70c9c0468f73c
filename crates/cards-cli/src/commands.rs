use anyhow::Result;
use tracing::info_span;

use cards_cli::pipeline::{ConvertResult, PipelineConfig, run_convert};
use cards_cli::summary::vocab_table;
use cards_ingest::LoadOptions;

use crate::cli::ConvertArgs;

pub fn run_vocab() -> Result<()> {
    println!("{}", vocab_table());
    Ok(())
}

pub fn run_convert_command(args: &ConvertArgs) -> Result<ConvertResult> {
    let span = info_span!("convert", input = %args.input.display());
    let _guard = span.enter();
    let config = PipelineConfig {
        input: args.input.clone(),
        output: args.output.clone(),
        load: LoadOptions::default()
            .with_sheet(args.sheet.clone())
            .with_na_sentinels(!args.keep_na_text),
        dry_run: args.dry_run,
    };
    run_convert(&config)
}
