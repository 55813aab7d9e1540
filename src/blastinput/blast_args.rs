//! Command-line arguments for `rbh`

use clap::Args;
use std::path::PathBuf;

use crate::config::{Thresholds, PERC_COVERAGE_CUTOFF, PERC_IDENTITY_CUTOFF, SCORE_FLOOR};

#[derive(Args, Debug)]
pub struct RbhArgs {
    /// Tabular alignment report (-outfmt "6 std qlen slen" or "7 std qlen slen")
    #[arg(short, long)]
    pub input: PathBuf,
    /// Output file for reciprocal best hits (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Minimum percent identity of a reported pair
    #[arg(long, default_value_t = PERC_IDENTITY_CUTOFF)]
    pub min_identity: f64,
    /// Minimum of query and subject coverage (percent) of a reported pair
    #[arg(long, default_value_t = PERC_COVERAGE_CUTOFF)]
    pub min_coverage: f64,
    /// Lowest min_coverage + identity score a hit needs to become a best hit
    #[arg(long, default_value_t = SCORE_FLOOR)]
    pub score_floor: f64,
    /// Show a spinner with the number of rows processed
    #[arg(long, default_value_t = false)]
    pub progress: bool,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl RbhArgs {
    pub fn thresholds(&self) -> Thresholds {
        Thresholds::new(self.min_identity, self.min_coverage, self.score_floor)
    }
}
