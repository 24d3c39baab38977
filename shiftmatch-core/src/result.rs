//! Outcome of scoring one availability set against one shift pattern.

/// Score and slot counts for a single availability/pattern pair.
///
/// `score` always lies in `0.0..=1.0`. A result with no required slots has
/// a score of `0.0`: nothing required is treated as trivially unmatched.
///
/// # Examples
/// ```
/// use shiftmatch_core::MatchResult;
///
/// let result = MatchResult::from_weighted(1.7, 2, 2);
/// assert!((result.score - 0.85).abs() < 1e-6);
/// assert_eq!(MatchResult::from_weighted(3.0, 0, 0), MatchResult::empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MatchResult {
    /// Weighted compatibility in `0.0..=1.0`.
    pub score: f32,
    /// Required slots the worker declared, regardless of priority.
    pub matched_slots: usize,
    /// Distinct slots the pattern requires.
    pub required_slots: usize,
}

impl MatchResult {
    /// Result for a pattern with nothing required.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            score: 0.0,
            matched_slots: 0,
            required_slots: 0,
        }
    }

    /// Normalise an accumulated weight by the number of required slots.
    ///
    /// Returns [`MatchResult::empty`] when `required_slots` is zero instead
    /// of dividing by zero. Non-finite weights score `0.0`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "scores are a weighted sum divided by the slot count"
    )]
    pub fn from_weighted(weighted: f32, matched_slots: usize, required_slots: usize) -> Self {
        if required_slots == 0 {
            return Self::empty();
        }
        Self {
            score: clamp_unit(weighted / required_slots as f32),
            matched_slots: matched_slots.min(required_slots),
            required_slots,
        }
    }

    /// Fraction of required slots matched, ignoring priority weights.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "coverage divides slot counts"
    )]
    pub fn coverage(&self) -> f32 {
        if self.required_slots == 0 {
            return 0.0;
        }
        clamp_unit(self.matched_slots as f32 / self.required_slots as f32)
    }
}

/// Return `0.0` for non-finite values and clamp everything else into
/// `0.0..=1.0`.
pub(crate) fn clamp_unit(score: f32) -> f32 {
    if !score.is_finite() {
        return 0.0;
    }
    score.clamp(0.0, 1.0)
}
