//! CLI argument definitions for the resource card converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use cards_cli::pipeline::{DEFAULT_INPUT, DEFAULT_OUTPUT};

#[derive(Parser)]
#[command(
    name = "resource-cards",
    version,
    about = "Convert the resource master list into catalog card JSON",
    long_about = "Convert the resource master list spreadsheet into the JSON card \
                  document used by the resource catalog.\n\n\
                  Run without arguments to convert the default master list in the \
                  current directory to resources.json."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a spreadsheet into the card JSON document (the default).
    Convert(ConvertArgs),

    /// List the user and topic shorthand expansions.
    Vocab,
}

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct ConvertArgs {
    /// Spreadsheet to read (xlsx, xlsm, xlsb, xls, ods or csv).
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// JSON document to write; an existing file is replaced.
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Worksheet name (default: the first sheet).
    #[arg(long, value_name = "NAME")]
    pub sheet: Option<String>,

    /// Keep NA-like text such as "N/A" or "NULL" instead of treating it as empty.
    #[arg(long = "keep-na-text")]
    pub keep_na_text: bool,

    /// Build and check the document without writing it.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

impl Default for ConvertArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            sheet: None,
            keep_na_text: false,
            dry_run: false,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_means_default_conversion() {
        let cli = Cli::try_parse_from(["resource-cards"]).expect("parse");
        assert!(cli.command.is_none());
    }

    #[test]
    fn convert_defaults_match_fixed_paths() {
        let cli = Cli::try_parse_from(["resource-cards", "convert"]).expect("parse");
        match cli.command {
            Some(Command::Convert(args)) => assert_eq!(args, ConvertArgs::default()),
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn global_flags_before_subcommand() {
        let cli = Cli::try_parse_from([
            "resource-cards",
            "-v",
            "--log-format",
            "json",
            "--color",
            "never",
            "convert",
            "in.csv",
            "--dry-run",
        ])
        .expect("parse");
        assert!(cli.verbosity.is_present());
        assert!(matches!(cli.log_format, LogFormatArg::Json));
        let Some(Command::Convert(args)) = cli.command else {
            panic!("expected convert");
        };
        assert_eq!(args.input, PathBuf::from("in.csv"));
        assert!(args.dry_run);
    }

    #[test]
    fn global_flags_without_subcommand() {
        let cli = Cli::try_parse_from(["resource-cards", "-q", "--log-level", "debug"])
            .expect("parse");
        assert!(cli.command.is_none());
        assert!(matches!(cli.log_level, Some(LogLevelArg::Debug)));
    }

    #[test]
    fn convert_overrides() {
        let cli = Cli::try_parse_from([
            "resource-cards",
            "convert",
            "list.csv",
            "--output",
            "out/cards.json",
            "--sheet",
            "Master",
            "--dry-run",
        ])
        .expect("parse");
        let Some(Command::Convert(args)) = cli.command else {
            panic!("expected convert");
        };
        assert_eq!(args.input, PathBuf::from("list.csv"));
        assert_eq!(args.output, PathBuf::from("out/cards.json"));
        assert_eq!(args.sheet.as_deref(), Some("Master"));
        assert!(args.dry_run);
        assert!(!args.keep_na_text);
    }
}
