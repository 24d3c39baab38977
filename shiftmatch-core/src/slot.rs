//! Discrete hourly slots within a repeating week.
//!
//! A [`TimeSlot`] is the atomic unit of both availability and demand. There
//! is no sub-hour granularity; two slots match only when day and hour are
//! identical.

use crate::{ValidationError, Weekday};

/// Number of days in the weekly grid.
pub const DAYS_PER_WEEK: u8 = 7;
/// Number of hourly slots per day.
pub const HOURS_PER_DAY: u8 = 24;
/// Number of distinct slots in the weekly grid.
pub const SLOTS_PER_WEEK: usize = (DAYS_PER_WEEK as usize) * (HOURS_PER_DAY as usize);

/// One `(day, hour)` cell of the weekly grid.
///
/// Slots order by day first, then hour.
///
/// # Examples
/// ```
/// use shiftmatch_core::{TimeSlot, Weekday};
///
/// # fn main() -> Result<(), shiftmatch_core::ValidationError> {
/// let slot = TimeSlot::new(0, 9)?;
/// assert_eq!(slot.weekday(), Weekday::Monday);
/// assert_eq!(slot.hour(), 9);
/// assert!(TimeSlot::new(7, 9).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawTimeSlot")
)]
pub struct TimeSlot {
    day: u8,
    hour: u8,
}

impl TimeSlot {
    /// Validate and construct a slot from a day index and hour.
    ///
    /// # Errors
    /// Returns [`ValidationError::DayOutOfRange`] when `day > 6` and
    /// [`ValidationError::HourOutOfRange`] when `hour > 23`.
    pub const fn new(day: u8, hour: u8) -> Result<Self, ValidationError> {
        if day >= DAYS_PER_WEEK {
            return Err(ValidationError::DayOutOfRange { day });
        }
        if hour >= HOURS_PER_DAY {
            return Err(ValidationError::HourOutOfRange { hour });
        }
        Ok(Self { day, hour })
    }

    /// Construct a slot from a [`Weekday`] and hour.
    ///
    /// # Errors
    /// Returns [`ValidationError::HourOutOfRange`] when `hour > 23`.
    pub const fn on(weekday: Weekday, hour: u8) -> Result<Self, ValidationError> {
        Self::new(weekday.index(), hour)
    }

    /// Day index in `0..=6`, Monday first.
    #[must_use]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Hour of the day in `0..=23`.
    #[must_use]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    /// Day of the week for this slot.
    #[must_use]
    pub const fn weekday(self) -> Weekday {
        match self.day {
            0 => Weekday::Monday,
            1 => Weekday::Tuesday,
            2 => Weekday::Wednesday,
            3 => Weekday::Thursday,
            4 => Weekday::Friday,
            5 => Weekday::Saturday,
            // Construction guarantees `day < 7`.
            _ => Weekday::Sunday,
        }
    }

    /// Dense position of the slot in `0..SLOTS_PER_WEEK`.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.day as usize) * (HOURS_PER_DAY as usize) + (self.hour as usize)
    }

    /// Iterate over every slot of the week in index order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..DAYS_PER_WEEK).flat_map(|day| (0..HOURS_PER_DAY).map(move |hour| Self { day, hour }))
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:02}:00", self.weekday(), self.hour)
    }
}

impl TryFrom<(u8, u8)> for TimeSlot {
    type Error = ValidationError;

    fn try_from((day, hour): (u8, u8)) -> Result<Self, Self::Error> {
        Self::new(day, hour)
    }
}

/// Unvalidated wire shape of a [`TimeSlot`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTimeSlot {
    day: u8,
    hour: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTimeSlot> for TimeSlot {
    type Error = ValidationError;

    fn try_from(raw: RawTimeSlot) -> Result<Self, Self::Error> {
        Self::new(raw.day, raw.hour)
    }
}
