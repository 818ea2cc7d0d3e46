//! CLI argument definitions for the reference database validator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "refdb",
    version,
    about = "Validate the reference database CSV files",
    long_about = "Validate the reference database CSV files.\n\n\
                  Checks every row of categories, channels, countries, languages,\n\
                  regions, and subdivisions against its schema and reports\n\
                  duplicate channel identifiers."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

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
    /// Validate dataset files (all default datasets when none are given).
    Check(CheckArgs),

    /// List registered datasets and their fields.
    Schemas,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// CSV files to validate. Files without a .csv suffix are skipped.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Directory holding the default datasets.
    #[arg(long = "database-dir", value_name = "DIR", default_value = "database")]
    pub database_dir: PathBuf,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: ReportFormatArg,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormatArg {
    /// One line per error, grouped by file.
    Text,
    /// Summary and error tables.
    Table,
    /// Machine-readable report.
    Json,
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
