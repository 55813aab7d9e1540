//! Diagnostic counters for the reciprocal best hit reduction
//!
//! Tracks where rows are dropped on the way from the report to the output.
//! Printed when the RBH_DIAGNOSTICS environment variable is set or the run is
//! at debug verbosity.

/// Check if diagnostics are enabled via environment variable
pub fn diagnostics_enabled() -> bool {
    std::env::var("RBH_DIAGNOSTICS")
        .map(|v| v == "1" || v.to_lowercase() == "true")
        .unwrap_or(false)
}

/// Counters updated by `ReciprocalBestHits::update`.
///
/// Single pass, single thread: plain integers are enough.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReductionDiagnostics {
    /// Rows offered to the reducer
    pub records_seen: usize,
    /// Rows that became the current best hit of their query and subject
    pub accepted: usize,
    /// Rows whose score is under the score floor
    pub rejected_below_floor: usize,
    /// Rows that did not beat the best score of their query or subject
    pub rejected_not_best: usize,
    /// Subject-side entries removed because their query found a better pair
    pub displaced_subject_entries: usize,
    /// Query-side entries removed because their subject found a better pair
    pub displaced_query_entries: usize,
}

impl ReductionDiagnostics {
    /// Print a summary of the reduction counters
    pub fn print_summary(&self, retained: usize, reported: usize) {
        eprintln!("\n=== Reciprocal Best Hit Diagnostics ===");
        eprintln!("Update Stage:");
        eprintln!("  Rows processed:             {}", self.records_seen);
        eprintln!("  Accepted as best hit:       {}", self.accepted);
        eprintln!("  Rejected (below floor):     {}", self.rejected_below_floor);
        eprintln!("  Rejected (not best):        {}", self.rejected_not_best);
        eprintln!("Displacement:");
        eprintln!("  Subject entries displaced:  {}", self.displaced_subject_entries);
        eprintln!("  Query entries displaced:    {}", self.displaced_query_entries);
        eprintln!("Output Stage:");
        eprintln!("  Retained pairs:             {}", retained);
        eprintln!(
            "  Filtered (identity/cov):    {}",
            retained.saturating_sub(reported)
        );
        eprintln!("  Reported pairs:             {}", reported);
    }
}
