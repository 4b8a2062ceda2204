//! CLI argument definitions for the sqltutor comparison harness.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "sqltutor",
    version,
    about = "Compare SQL query results and explain the first difference",
    long_about = "Compare a learner-submitted query result against the expected one.\n\n\
                  Results are loaded from CSV or JSON files; the verdict explains the\n\
                  first and most fundamental difference in learner-facing terms."
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
    /// Compare an actual result against the expected one.
    Compare(CompareArgs),

    /// Render a single result file as a table.
    Show(ShowArgs),
}

#[derive(Parser)]
pub struct CompareArgs {
    /// Path to the expected (reference) result, CSV or JSON.
    #[arg(value_name = "EXPECTED")]
    pub expected: PathBuf,

    /// Path to the actual (submitted) result, CSV or JSON.
    #[arg(value_name = "ACTUAL")]
    pub actual: PathBuf,

    /// Require rows in the exact expected order.
    #[arg(long = "ordered-rows")]
    pub ordered_rows: bool,

    /// Require columns in the exact expected order.
    #[arg(long = "ordered-columns")]
    pub ordered_columns: bool,

    /// Match columns by declared name instead of by content.
    #[arg(long = "match-names")]
    pub match_names: bool,

    /// Compare text values and column names case sensitively.
    #[arg(long = "case-sensitive")]
    pub case_sensitive: bool,

    /// Print the verdict as JSON instead of human-readable output.
    #[arg(long = "json")]
    pub json: bool,

    /// Also write a versioned verdict report into this directory.
    #[arg(long = "report-dir", value_name = "DIR")]
    pub report_dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Path to the result file, CSV or JSON.
    #[arg(value_name = "RESULT")]
    pub result: PathBuf,
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
