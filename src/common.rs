/// One row of a BLAST tabular report run with `-outfmt "6 std qlen slen"`
/// (or 7, which adds `#` comment lines around the same rows).
///
/// The two coverage columns are not part of the report; they are derived from
/// the alignment bounds and the sequence lengths when the row is parsed and
/// are never recomputed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct TabularHit {
    pub query_id: String,
    pub subject_id: String,
    /// Percent identity as reported (0-100)
    pub identity: f64,
    pub length: u64,
    pub mismatch: u64,
    pub gapopen: u64,
    // 1-based inclusive bounds. Signed: blastn reports minus-strand subjects
    // with s_start > s_end.
    pub q_start: i64,
    pub q_end: i64,
    pub s_start: i64,
    pub s_end: i64,
    pub e_value: f64,
    pub bit_score: f64,
    pub q_len: u64,
    pub s_len: u64,
    /// Aligned share of the query in percent, rounded to 2 decimals
    pub q_coverage: f64,
    /// Aligned share of the subject in percent, rounded to 2 decimals
    pub s_coverage: f64,
}

impl TabularHit {
    /// Smaller of the two coverages; an alignment is only as broad as its
    /// narrower side.
    #[inline]
    pub fn min_coverage(&self) -> f64 {
        self.q_coverage.min(self.s_coverage)
    }

    /// Ranking value used by the reciprocal best hit reducer:
    /// `min_coverage + identity`. Maximum is 200.
    #[inline]
    pub fn score(&self) -> f64 {
        self.min_coverage() + self.identity
    }
}

/// Percentage of `seq_len` spanned by the inclusive range `start..=end`,
/// rounded to 2 decimals.
///
/// The quotient is taken before scaling by 100 so results agree bit-for-bit
/// with reports produced by other tools that compute coverage the same way.
/// `seq_len` must be non-zero; the parser rejects zero lengths.
pub fn coverage_percent(start: i64, end: i64, seq_len: u64) -> f64 {
    let span = (end + 1 - start) as f64;
    round_decimals(span / seq_len as f64 * 100.0, 2)
}

/// Round to `decimals` places from the exact binary value (so 2.675 gives
/// 2.67), not `(x * 10^d).round() / 10^d`, which double-rounds.
pub fn round_decimals(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}
