//! Command-line parsing for `index-walk`.
//!
//! Parsing stays here; the analysis itself never sees clap types.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::{DEFAULT_WALK_SEED, OutputFormat};

/// Top-level CLI.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "index-walk",
    version,
    about = "Random-walk, AR(1), trend and beta checks on a daily index price file"
)]
pub struct Cli {
    /// CSV file with `Date` and `Close` columns (NSE historical export works as-is).
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Second price file used as the market proxy for beta.
    ///
    /// Without it, beta compares the series with itself.
    #[arg(long, value_name = "CSV")]
    pub benchmark: Option<PathBuf>,

    /// Seed for the illustrative random walk.
    #[arg(long, default_value_t = DEFAULT_WALK_SEED)]
    pub seed: u64,

    /// Output format for the summary.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Disable the terminal plots.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,

    /// Write `random_walk.svg` and `price_trend.svg` into this directory.
    #[arg(long, value_name = "DIR")]
    pub chart_dir: Option<PathBuf>,
}
