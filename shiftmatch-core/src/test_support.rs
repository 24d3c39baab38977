//! Fixture builders shared by unit, behaviour and property tests.

use crate::{
    AvailabilityEntry, AvailabilityIndex, MatchResult, Priority, Scorer, ShiftPattern, TimeSlot,
    ValidationError, Weekday,
};

/// Fluent builder for availability sets keyed by [`Weekday`].
///
/// # Examples
/// ```
/// use shiftmatch_core::Weekday;
/// use shiftmatch_core::test_support::AvailabilityBuilder;
///
/// let index = AvailabilityBuilder::new()
///     .high(Weekday::Monday, 9)
///     .normal(Weekday::Tuesday, 10)
///     .build()
///     .expect("valid availability");
/// assert_eq!(index.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AvailabilityBuilder {
    raw: Vec<(Weekday, u8, Priority)>,
}

impl AvailabilityBuilder {
    /// Start an empty availability set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a high-priority slot.
    #[must_use]
    pub fn high(self, day: Weekday, hour: u8) -> Self {
        self.with(day, hour, Priority::High)
    }

    /// Declare a normal-priority slot.
    #[must_use]
    pub fn normal(self, day: Weekday, hour: u8) -> Self {
        self.with(day, hour, Priority::Normal)
    }

    /// Declare a slot with an explicit priority.
    #[must_use]
    pub fn with(mut self, day: Weekday, hour: u8, priority: Priority) -> Self {
        self.raw.push((day, hour, priority));
        self
    }

    /// Validate the declared slots and build the index.
    ///
    /// # Errors
    /// Returns [`ValidationError::HourOutOfRange`] for hours above 23.
    pub fn build(self) -> Result<AvailabilityIndex, ValidationError> {
        let entries = self
            .raw
            .into_iter()
            .map(|(day, hour, priority)| {
                TimeSlot::on(day, hour).map(|slot| AvailabilityEntry { slot, priority })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(AvailabilityIndex::build(entries))
    }
}

/// Build a pattern from `(weekday, hour)` pairs.
///
/// # Errors
/// Returns [`ValidationError`] for empty input or hours above 23.
pub fn pattern_of(slots: &[(Weekday, u8)]) -> Result<ShiftPattern, ValidationError> {
    let typed = slots
        .iter()
        .map(|&(day, hour)| TimeSlot::on(day, hour))
        .collect::<Result<Vec<_>, _>>()?;
    ShiftPattern::new(typed)
}

/// Test `Scorer` that weighs every matched slot equally, ignoring priority.
#[derive(Debug, Copy, Clone, Default)]
pub struct UniformScorer;

impl Scorer for UniformScorer {
    #[expect(
        clippy::cast_precision_loss,
        reason = "uniform weighting converts the match count into a float"
    )]
    fn score(&self, availability: &AvailabilityIndex, pattern: &ShiftPattern) -> MatchResult {
        let matched = pattern
            .iter()
            .filter(|slot| availability.contains(*slot))
            .count();
        MatchResult::from_weighted(matched as f32, matched, pattern.required_slots())
    }
}
