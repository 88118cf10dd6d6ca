//! CLI argument definitions for the roster cleaner.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Client roster cleaner - validate, partition, and analyze client records",
    long_about = "Validate client roster exports (name, birth day/month/year), partition\n\
                  rows into included and excluded sets with per-row exclusion reasons,\n\
                  and compute duplicate and distribution analytics over the result."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Clean a roster CSV: partition, persist, and write reports.
    Clean(CleanArgs),

    /// Validate and summarize a roster CSV without writing anything.
    Check(CheckArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the roster CSV export (header row required).
    #[arg(value_name = "ROSTER_CSV")]
    pub input: PathBuf,

    /// Dataset identifier scoping stored partitions and report names
    /// (default: derived from the file name).
    #[arg(long = "dataset-id", value_name = "ID")]
    pub dataset_id: Option<String>,

    /// Output directory for generated reports (default: <ROSTER_CSV dir>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Skip the record-store write; reports are still generated.
    #[arg(long = "no-store")]
    pub no_store: bool,

    /// Rows per store write batch.
    #[arg(long = "batch-size", value_name = "ROWS", default_value_t = 10_000)]
    pub batch_size: usize,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the roster CSV export (header row required).
    #[arg(value_name = "ROSTER_CSV")]
    pub input: PathBuf,

    /// Dataset identifier (default: derived from the file name).
    #[arg(long = "dataset-id", value_name = "ID")]
    pub dataset_id: Option<String>,
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
