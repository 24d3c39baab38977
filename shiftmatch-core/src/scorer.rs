//! Score a worker's availability against an employer's shift pattern.
//!
//! The `Scorer` trait turns an [`AvailabilityIndex`](crate::AvailabilityIndex)
//! and a [`ShiftPattern`](crate::ShiftPattern) into a
//! [`MatchResult`](crate::MatchResult).

use crate::{AvailabilityIndex, MatchResult, ShiftPattern, result::clamp_unit};

/// Calculate how well a worker's availability covers a shift pattern.
///
/// Higher scores indicate better coverage. Implementations must be
/// thread-safe (`Send` + `Sync`) so batches can be scored across threads.
/// The method is infallible: inputs are validated when they are built, so
/// a worker with no availability simply scores `0.0`.
///
/// Implementations must:
/// - Produce finite (`f32::is_finite`) scores in `0.0..=1.0`.
/// - Report `required_slots` equal to the pattern's distinct slot count.
/// - Never mutate or retain their inputs.
///
/// Use [`Scorer::sanitise`] to apply the range guards to raw values.
///
/// # Examples
///
/// ```rust
/// use shiftmatch_core::{AvailabilityIndex, MatchResult, Scorer, ShiftPattern};
///
/// struct CoverageScorer;
///
/// impl Scorer for CoverageScorer {
///     fn score(&self, availability: &AvailabilityIndex, pattern: &ShiftPattern) -> MatchResult {
///         let matched = pattern.iter().filter(|slot| availability.contains(*slot)).count();
///         let weighted = pattern
///             .iter()
///             .filter(|slot| availability.contains(*slot))
///             .map(|_| 1.0_f32)
///             .sum();
///         MatchResult::from_weighted(weighted, matched, pattern.required_slots())
///     }
/// }
///
/// # fn main() -> Result<(), shiftmatch_core::ValidationError> {
/// let pattern = ShiftPattern::try_from_raw([(0, 9)])?;
/// let result = CoverageScorer.score(&AvailabilityIndex::new(), &pattern);
/// assert_eq!(result.score, 0.0);
/// # Ok(())
/// # }
/// ```
pub trait Scorer: Send + Sync {
    /// Score `availability` against `pattern`.
    fn score(&self, availability: &AvailabilityIndex, pattern: &ShiftPattern) -> MatchResult;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=1.0`.
    fn sanitise(score: f32) -> f32
    where
        Self: Sized,
    {
        clamp_unit(score)
    }
}

impl<S: Scorer + ?Sized> Scorer for &S {
    fn score(&self, availability: &AvailabilityIndex, pattern: &ShiftPattern) -> MatchResult {
        (**self).score(availability, pattern)
    }
}
