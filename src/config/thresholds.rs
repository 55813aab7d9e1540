/// Minimum percent identity a retained reciprocal pair needs to be reported
pub const PERC_IDENTITY_CUTOFF: f64 = 35.0;

/// Minimum of query and subject coverage (percent) a retained pair needs to
/// be reported
pub const PERC_COVERAGE_CUTOFF: f64 = 50.0;

/// Lowest `min_coverage + identity` score that can become a best hit at all.
/// With both terms capped at 100 this only admits near-complete, high
/// identity alignments.
pub const SCORE_FLOOR: f64 = 110.0;

/// Cutoffs applied by the reciprocal best hit reducer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Identity cutoff applied when reporting (inclusive)
    pub min_identity: f64,
    /// Minimum-coverage cutoff applied when reporting (inclusive)
    pub min_coverage: f64,
    /// Score floor applied on every update (inclusive)
    pub score_floor: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_identity: PERC_IDENTITY_CUTOFF,
            min_coverage: PERC_COVERAGE_CUTOFF,
            score_floor: SCORE_FLOOR,
        }
    }
}

impl Thresholds {
    pub fn new(min_identity: f64, min_coverage: f64, score_floor: f64) -> Self {
        Self {
            min_identity,
            min_coverage,
            score_floor,
        }
    }

    /// Reject cutoffs that cannot be compared (NaN) so a typo on the command
    /// line does not silently drop every hit.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("min-identity", self.min_identity),
            ("min-coverage", self.min_coverage),
            ("score-floor", self.score_floor),
        ] {
            if value.is_nan() {
                return Err(format!("--{} must be a number, got NaN", name));
            }
        }
        Ok(())
    }
}
