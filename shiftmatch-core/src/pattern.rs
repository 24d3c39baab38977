//! Employer demand expressed as a set of required weekly slots.

use crate::{TimeSlot, ValidationError};

/// A non-empty set of slots an employer needs covered every week.
///
/// Input order is irrelevant and repeated slots collapse into one, so two
/// patterns naming the same slots compare equal.
///
/// # Examples
/// ```
/// use shiftmatch_core::{ShiftPattern, ValidationError};
///
/// # fn main() -> Result<(), ValidationError> {
/// let pattern = ShiftPattern::try_from_raw([(1, 10), (0, 9), (1, 10)])?;
/// assert_eq!(pattern.required_slots(), 2);
/// assert_eq!(ShiftPattern::try_from_raw([]), Err(ValidationError::EmptyPattern));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<TimeSlot>", into = "Vec<TimeSlot>")
)]
pub struct ShiftPattern {
    slots: Vec<TimeSlot>,
}

impl ShiftPattern {
    /// Validate and construct a pattern from typed slots.
    ///
    /// # Errors
    /// Returns [`ValidationError::EmptyPattern`] when `slots` is empty.
    pub fn new<I>(slots: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = TimeSlot>,
    {
        let mut collected: Vec<TimeSlot> = slots.into_iter().collect();
        let supplied = collected.len();
        collected.sort_unstable();
        collected.dedup();
        if collected.is_empty() {
            return Err(ValidationError::EmptyPattern);
        }
        if collected.len() < supplied {
            log::debug!(
                "shift pattern collapsed {} repeated slot(s)",
                supplied.saturating_sub(collected.len())
            );
        }
        Ok(Self { slots: collected })
    }

    /// Validate raw `(day, hour)` pairs and construct a pattern.
    ///
    /// # Errors
    /// Returns the first out-of-range [`ValidationError`], or
    /// [`ValidationError::EmptyPattern`] when no pairs were supplied.
    pub fn try_from_raw<I>(raw: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (u8, u8)>,
    {
        let slots = raw
            .into_iter()
            .map(TimeSlot::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(slots)
    }

    /// Required slots in ascending order.
    #[must_use]
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Number of distinct required slots; always at least one.
    #[must_use]
    pub fn required_slots(&self) -> usize {
        self.slots.len()
    }

    /// Report whether the pattern requires `slot`.
    #[must_use]
    pub fn contains(&self, slot: TimeSlot) -> bool {
        self.slots.binary_search(&slot).is_ok()
    }

    /// Iterate over required slots in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = TimeSlot> + '_ {
        self.slots.iter().copied()
    }
}

impl TryFrom<Vec<TimeSlot>> for ShiftPattern {
    type Error = ValidationError;

    fn try_from(slots: Vec<TimeSlot>) -> Result<Self, Self::Error> {
        Self::new(slots)
    }
}

impl From<ShiftPattern> for Vec<TimeSlot> {
    fn from(pattern: ShiftPattern) -> Self {
        pattern.slots
    }
}

/// Validate raw `(day, hour)` pairs and build a [`ShiftPattern`].
///
/// # Errors
/// Returns [`ValidationError`] when the pattern is empty or any slot is out
/// of range.
pub fn validate_shift_pattern<I>(raw: I) -> Result<ShiftPattern, ValidationError>
where
    I: IntoIterator<Item = (u8, u8)>,
{
    ShiftPattern::try_from_raw(raw)
}
