//! Reciprocal best hit reduction
//!
//! Streams tabular hits once, in report order, and keeps for every query and
//! every subject the single highest-scoring pair it takes part in. A pair is
//! retained only while it is the best for BOTH of its ids; when a better pair
//! claims one of the ids, the old pair is dropped from both sides.
//!
//! Score = min(query coverage, subject coverage) + percent identity.
//!
//! Update rule for a hit (q, s) with score x:
//! 1. accept only if x > best score seen for q, x > best score seen for s and
//!    x >= the score floor (strict `>`: on ties the earlier row wins);
//! 2. record x as the best score of q and of s (best scores never go down,
//!    even when the pair is displaced later);
//! 3. if q already had a retained pair (q, s'), drop the subject-side entry
//!    of s'; then if s already had a retained pair (q', s), drop the
//!    query-side entry of q'. One keyed removal each, no cascading;
//! 4. retain (q, s) on both sides.
//!
//! Finalize reports retained pairs in the order their query was first
//! retained (a query that lost its pair and later regained one moves to the
//! end), filtered by identity and minimum coverage.

use std::rc::Rc;

use rustc_hash::FxHashMap;

use super::filter::filter_reportable;
use crate::algorithm::common::diagnostics::ReductionDiagnostics;
use crate::common::TabularHit;
use crate::config::Thresholds;

/// What `update` did with a hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Became the retained pair for its query and subject
    Accepted,
    /// Score under the score floor
    BelowFloor,
    /// Did not beat the best score of its query or of its subject
    NotBest,
}

/// Id-keyed hits kept in first-insertion order.
///
/// Overwriting a key keeps its position. Removing a key frees its slot, so a
/// later insert of the same key goes to the end.
#[derive(Debug, Default)]
struct InsertionOrderedHits {
    slots: Vec<Option<Rc<TabularHit>>>,
    index: FxHashMap<String, usize>,
}

impl InsertionOrderedHits {
    fn get(&self, key: &str) -> Option<&Rc<TabularHit>> {
        self.index
            .get(key)
            .and_then(|&slot| self.slots[slot].as_ref())
    }

    fn insert(&mut self, key: &str, hit: Rc<TabularHit>) {
        match self.index.get(key) {
            Some(&slot) => self.slots[slot] = Some(hit),
            None => {
                self.index.insert(key.to_string(), self.slots.len());
                self.slots.push(Some(hit));
            }
        }
    }

    fn remove(&mut self, key: &str) -> Option<Rc<TabularHit>> {
        let slot = self.index.remove(key)?;
        self.slots[slot].take()
    }

    fn len(&self) -> usize {
        self.index.len()
    }

    fn values(&self) -> impl Iterator<Item = &Rc<TabularHit>> {
        self.slots.iter().flatten()
    }

    fn into_values(self) -> impl Iterator<Item = Rc<TabularHit>> {
        self.slots.into_iter().flatten()
    }
}

/// Reducer state for one pass over a report.
///
/// A retained hit is shared between the query side and the subject side
/// through `Rc`, so the reducer is `!Send`. Updates come from one thread, in
/// report order.
#[derive(Debug, Default)]
pub struct ReciprocalBestHits {
    best_hit_by_query: InsertionOrderedHits,
    best_hit_by_subject: FxHashMap<String, Rc<TabularHit>>,
    best_score_by_query: FxHashMap<String, f64>,
    best_score_by_subject: FxHashMap<String, f64>,
    thresholds: Thresholds,
    diagnostics: ReductionDiagnostics,
}

impl ReciprocalBestHits {
    /// Reducer with the default cutoffs (35% identity, 50% coverage, floor 110)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thresholds(thresholds: Thresholds) -> Self {
        Self {
            thresholds,
            ..Self::default()
        }
    }

    /// Offer the next hit of the report. Must be called in report order.
    pub fn update(&mut self, hit: TabularHit) -> UpdateOutcome {
        self.diagnostics.records_seen += 1;
        let score = hit.score();

        // Written so that a NaN score also lands here
        if !(score >= self.thresholds.score_floor) {
            self.diagnostics.rejected_below_floor += 1;
            log::trace!(
                "rejected {} -> {}: score {} below floor",
                hit.query_id,
                hit.subject_id,
                score
            );
            return UpdateOutcome::BelowFloor;
        }

        let best_for_query = self
            .best_score_by_query
            .get(&hit.query_id)
            .copied()
            .unwrap_or(0.0);
        let best_for_subject = self
            .best_score_by_subject
            .get(&hit.subject_id)
            .copied()
            .unwrap_or(0.0);
        if !(score > best_for_query && score > best_for_subject) {
            self.diagnostics.rejected_not_best += 1;
            log::trace!(
                "rejected {} -> {}: score {} vs best {} / {}",
                hit.query_id,
                hit.subject_id,
                score,
                best_for_query,
                best_for_subject
            );
            return UpdateOutcome::NotBest;
        }

        self.best_score_by_query.insert(hit.query_id.clone(), score);
        self.best_score_by_subject.insert(hit.subject_id.clone(), score);

        if let Some(prev) = self.best_hit_by_query.get(&hit.query_id) {
            if self.best_hit_by_subject.remove(&prev.subject_id).is_some() {
                self.diagnostics.displaced_subject_entries += 1;
                log::debug!(
                    "{} -> {} displaces {} -> {} (subject side)",
                    hit.query_id,
                    hit.subject_id,
                    prev.query_id,
                    prev.subject_id
                );
            }
        }
        if let Some(prev) = self.best_hit_by_subject.get(&hit.subject_id) {
            if self.best_hit_by_query.remove(&prev.query_id).is_some() {
                self.diagnostics.displaced_query_entries += 1;
                log::debug!(
                    "{} -> {} displaces {} -> {} (query side)",
                    hit.query_id,
                    hit.subject_id,
                    prev.query_id,
                    prev.subject_id
                );
            }
        }

        log::debug!(
            "accepted {} -> {} (score {})",
            hit.query_id,
            hit.subject_id,
            score
        );
        self.diagnostics.accepted += 1;
        let hit = Rc::new(hit);
        self.best_hit_by_query.insert(&hit.query_id, Rc::clone(&hit));
        self.best_hit_by_subject.insert(hit.subject_id.clone(), hit);
        UpdateOutcome::Accepted
    }

    /// End the pass: retained pairs in query insertion order that pass the
    /// identity and coverage cutoffs.
    ///
    /// Consumes the reducer, so no update can follow. The iterator is lazy and
    /// can be walked once.
    pub fn finalize(self) -> impl Iterator<Item = TabularHit> {
        let ReciprocalBestHits {
            best_hit_by_query,
            best_hit_by_subject,
            thresholds,
            ..
        } = self;
        // Leaves the query side as sole owner of every retained hit
        drop(best_hit_by_subject);
        filter_reportable(
            best_hit_by_query.into_values().map(Rc::unwrap_or_clone),
            thresholds,
        )
    }

    pub fn best_hit_for_query(&self, query_id: &str) -> Option<&TabularHit> {
        self.best_hit_by_query.get(query_id).map(|h| h.as_ref())
    }

    pub fn best_hit_for_subject(&self, subject_id: &str) -> Option<&TabularHit> {
        self.best_hit_by_subject.get(subject_id).map(|h| h.as_ref())
    }

    pub fn best_score_for_query(&self, query_id: &str) -> Option<f64> {
        self.best_score_by_query.get(query_id).copied()
    }

    pub fn best_score_for_subject(&self, subject_id: &str) -> Option<f64> {
        self.best_score_by_subject.get(subject_id).copied()
    }

    /// Retained pairs before the reporting cutoffs, in query insertion order
    pub fn retained(&self) -> impl Iterator<Item = &TabularHit> {
        self.best_hit_by_query.values().map(|h| h.as_ref())
    }

    /// Number of retained pairs before the reporting cutoffs
    pub fn retained_len(&self) -> usize {
        self.best_hit_by_query.len()
    }

    /// Both sides hold exactly the same retained pairs
    pub fn is_consistent(&self) -> bool {
        self.best_hit_by_query.len() == self.best_hit_by_subject.len()
            && self.best_hit_by_query.values().all(|hit| {
                self.best_hit_by_subject
                    .get(&hit.subject_id)
                    .is_some_and(|other| Rc::ptr_eq(hit, other))
            })
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn diagnostics(&self) -> &ReductionDiagnostics {
        &self.diagnostics
    }
}
