//! `Ranker` implementation over any [`Scorer`].

use std::cmp::Ordering;

use shiftmatch_core::{AvailabilityIndex, MatchResult, Scorer, ShiftPattern};

/// Configuration for [`Ranker`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankerConfig {
    /// Maximum number of entries to return after sorting. `None` keeps all.
    pub limit: Option<usize>,
}

impl RankerConfig {
    /// Configuration that keeps at most `limit` entries.
    #[must_use]
    pub const fn with_limit(limit: usize) -> Self {
        Self { limit: Some(limit) }
    }
}

/// One scored candidate in a ranked list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Ranked<Id> {
    /// Caller-supplied identifier of the worker or pattern.
    pub id: Id,
    /// Score and slot counts for the pair.
    pub result: MatchResult,
}

/// Scores batches of pairs and orders them deterministically.
///
/// Results are sorted by score descending, then `matched_slots`
/// descending, then `id` ascending. Candidates with no declared availability
/// stay in the list with a score of `0.0`.
///
/// # Examples
/// ```
/// use shiftmatch_core::{AvailabilityIndex, Priority, ShiftPattern};
/// use shiftmatch_ranker::Ranker;
/// use shiftmatch_scorer::PriorityScorer;
///
/// # fn main() -> Result<(), shiftmatch_core::ValidationError> {
/// let pattern = ShiftPattern::try_from_raw([(0, 9)])?;
/// let workers = vec![
///     ("bo", AvailabilityIndex::try_from_raw([(0, 9, Priority::Normal)])?),
///     ("al", AvailabilityIndex::try_from_raw([(0, 9, Priority::High)])?),
/// ];
///
/// let ranked = Ranker::new(PriorityScorer::default()).rank_workers_for_pattern(&workers, &pattern);
/// let ids: Vec<_> = ranked.iter().map(|entry| entry.id).collect();
/// assert_eq!(ids, ["al", "bo"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Ranker<C>
where
    C: Scorer,
{
    scorer: C,
    config: RankerConfig,
}

impl<C> Ranker<C>
where
    C: Scorer,
{
    /// Construct a ranker using default configuration.
    #[must_use]
    pub fn new(scorer: C) -> Self {
        Self::with_config(scorer, RankerConfig::default())
    }

    /// Construct a ranker with explicit configuration.
    #[must_use]
    pub const fn with_config(scorer: C, config: RankerConfig) -> Self {
        Self { scorer, config }
    }

    /// The scorer used for every pair.
    #[must_use]
    pub const fn scorer(&self) -> &C {
        &self.scorer
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> RankerConfig {
        self.config
    }

    /// Score every worker against `pattern` and return them best first.
    #[must_use]
    pub fn rank_workers_for_pattern<Id>(
        &self,
        workers: &[(Id, AvailabilityIndex)],
        pattern: &ShiftPattern,
    ) -> Vec<Ranked<Id>>
    where
        Id: Ord + Clone,
    {
        let scored = workers.iter().map(|(id, availability)| Ranked {
            id: id.clone(),
            result: self.scorer.score(availability, pattern),
        });
        let ranked = self.order(scored);
        log::debug!(
            "ranked {} worker(s) against a {}-slot pattern, returning {}",
            workers.len(),
            pattern.required_slots(),
            ranked.len()
        );
        ranked
    }

    /// Score `worker` against every pattern and return the patterns best
    /// first.
    #[must_use]
    pub fn rank_patterns_for_worker<Id>(
        &self,
        worker: &AvailabilityIndex,
        patterns: &[(Id, ShiftPattern)],
    ) -> Vec<Ranked<Id>>
    where
        Id: Ord + Clone,
    {
        let scored = patterns.iter().map(|(id, pattern)| Ranked {
            id: id.clone(),
            result: self.scorer.score(worker, pattern),
        });
        let ranked = self.order(scored);
        log::debug!(
            "ranked {} pattern(s) for a worker with {} declared slot(s), returning {}",
            patterns.len(),
            worker.len(),
            ranked.len()
        );
        ranked
    }

    fn order<Id, I>(&self, scored: I) -> Vec<Ranked<Id>>
    where
        Id: Ord,
        I: Iterator<Item = Ranked<Id>>,
    {
        let mut ranked: Vec<Ranked<Id>> = scored.collect();
        ranked.sort_by(compare_ranked);
        if let Some(limit) = self.config.limit {
            ranked.truncate(limit);
        }
        ranked
    }
}

fn compare_ranked<Id: Ord>(lhs: &Ranked<Id>, rhs: &Ranked<Id>) -> Ordering {
    rhs.result
        .score
        .total_cmp(&lhs.result.score)
        .then_with(|| rhs.result.matched_slots.cmp(&lhs.result.matched_slots))
        .then_with(|| lhs.id.cmp(&rhs.id))
}

#[cfg(test)]
mod tests;
