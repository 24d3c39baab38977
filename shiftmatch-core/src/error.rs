//! Validation failures raised while building the weekly time grid.

use thiserror::Error;

/// Errors returned when slots, availability sets or shift patterns are
/// constructed from caller-supplied data.
///
/// Scoring never produces this error; validation happens once per input,
/// before any pair is scored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The day-of-week index was not in `0..=6`.
    #[error("day {day} is outside the range 0..=6")]
    DayOutOfRange {
        /// Rejected day index.
        day: u8,
    },
    /// The hour was not in `0..=23`.
    #[error("hour {hour} is outside the range 0..=23")]
    HourOutOfRange {
        /// Rejected hour.
        hour: u8,
    },
    /// A shift pattern contained no required slots.
    #[error("shift pattern must contain at least one required slot")]
    EmptyPattern,
    /// A weekday name could not be parsed.
    #[error("unknown weekday '{0}'")]
    UnknownWeekday(String),
    /// A priority label could not be parsed.
    #[error("unknown priority '{0}'")]
    UnknownPriority(String),
}
