use crate::common::TabularHit;
use crate::config::Thresholds;

/// Identity at or above `min_identity` (inclusive)
#[inline]
pub fn passes_identity(hit: &TabularHit, min_identity: f64) -> bool {
    hit.identity >= min_identity
}

/// Both query and subject coverage at or above `min_coverage` (inclusive)
#[inline]
pub fn passes_coverage(hit: &TabularHit, min_coverage: f64) -> bool {
    hit.min_coverage() >= min_coverage
}

/// Whether a retained reciprocal pair is good enough to report.
///
/// Identity and coverage are independent cutoffs: a pair with 100% identity
/// over a short stretch is dropped just like a full-length pair at 20%.
#[inline]
pub fn passes_quality(hit: &TabularHit, thresholds: &Thresholds) -> bool {
    passes_identity(hit, thresholds.min_identity) && passes_coverage(hit, thresholds.min_coverage)
}

/// Lazily keep only hits passing both cutoffs, preserving order
pub fn filter_reportable<I>(hits: I, thresholds: Thresholds) -> impl Iterator<Item = TabularHit>
where
    I: IntoIterator<Item = TabularHit>,
{
    hits.into_iter()
        .filter(move |h| passes_quality(h, &thresholds))
}
