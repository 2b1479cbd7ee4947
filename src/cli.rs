use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "metric-delta")]
#[command(
    author,
    version,
    about = "Compare code metrics of the working copy against the last recorded revision"
)]
#[command(long_about = "Records code metrics (line counts, cyclomatic complexity) as \
    revisions and reports how the working copy differs from the latest one.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output and logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show how metrics changed since the last snapshot
    Diff(DiffArgs),

    /// Record the current metrics as a new revision
    Snapshot(SnapshotArgs),

    /// List available operators and their metrics
    ListMetrics,
}

#[derive(Parser, Debug)]
pub struct DiffArgs {
    /// Files or directories to compare
    #[arg(default_value = ".")]
    pub files: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Metrics to compare (comma-separated `operator.metric`, overrides config)
    #[arg(short, long, value_delimiter = ',')]
    pub metrics: Option<Vec<String>>,

    /// Show unchanged targets too
    #[arg(short, long)]
    pub all: bool,

    /// Do not break object-level metrics down per function/class
    #[arg(long)]
    pub no_detail: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct SnapshotArgs {
    /// Directories or files to record (default: the project root)
    pub paths: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Show what would be recorded without saving
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
