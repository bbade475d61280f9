//! CLI argument definitions for the sentiment analyzer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use senti_model::ThresholdPolicy;

#[derive(Parser)]
#[command(
    name = "senti",
    version,
    about = "Lexicon-based sentiment analysis over CSV datasets",
    long_about = "Score a text column of one or more CSV files with a lexicon\n\
                  sentiment model, classify the scores into categories and star\n\
                  ratings, and summarize the results for charting."
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
    /// Score a column of one or more CSV files and summarize the results.
    Analyze(AnalyzeArgs),

    /// List the columns of a CSV file with analysis-candidate hints.
    Columns(ColumnsArgs),

    /// Show the value distribution of a column without scoring it.
    Distribution(DistributionArgs),

    /// Print the first rows of a CSV file.
    Preview(PreviewArgs),

    /// Score one or more text snippets directly.
    Score(ScoreArgs),
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// CSV files (or directories of CSV files) to analyze, processed
    /// sequentially in the given order.
    #[arg(value_name = "PATH", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Column containing the text to score.
    #[arg(long = "column", short = 'c', value_name = "NAME")]
    pub column: String,

    /// Threshold policy for the three-way classification.
    #[arg(long = "policy", value_enum, default_value = "wide")]
    pub policy: PolicyArg,

    /// Write a JSON analysis report per input file into this directory.
    #[arg(long = "report", value_name = "DIR")]
    pub report_dir: Option<PathBuf>,

    /// Skip and report malformed CSV records instead of failing the file.
    ///
    /// This is the default when several input files are given.
    #[arg(long = "lenient", conflicts_with = "strict")]
    pub lenient: bool,

    /// Fail a file on its first malformed CSV record.
    ///
    /// This is the default when a single input file is given.
    #[arg(long = "strict", conflicts_with = "lenient")]
    pub strict: bool,
}

#[derive(Parser)]
pub struct ColumnsArgs {
    /// CSV file to inspect.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,
}

#[derive(Parser)]
pub struct DistributionArgs {
    /// CSV file to inspect.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Column to count values of.
    #[arg(long = "column", short = 'c', value_name = "NAME")]
    pub column: String,
}

#[derive(Parser)]
pub struct PreviewArgs {
    /// CSV file to preview.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Number of rows to show.
    #[arg(long = "rows", short = 'n', default_value_t = 10)]
    pub rows: usize,
}

#[derive(Parser)]
pub struct ScoreArgs {
    /// Text snippets to score.
    #[arg(value_name = "TEXT", required = true)]
    pub texts: Vec<String>,

    /// Threshold policy for the three-way classification.
    #[arg(long = "policy", value_enum, default_value = "wide")]
    pub policy: PolicyArg,
}

/// CLI threshold policy choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum PolicyArg {
    Wide,
    Narrow,
}

impl PolicyArg {
    pub fn into_policy(self) -> ThresholdPolicy {
        match self {
            PolicyArg::Wide => ThresholdPolicy::Wide,
            PolicyArg::Narrow => ThresholdPolicy::Narrow,
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
