//! Days of the week used to address slots in the weekly grid.
//!
//! Day indices start at Monday (`0`) and end at Sunday (`6`).
//!
//! # Examples
//! ```
//! use shiftmatch_core::Weekday;
//!
//! assert_eq!(Weekday::Monday.as_str(), "monday");
//! assert_eq!(Weekday::Sunday.index(), 6);
//! assert_eq!("tue".parse::<Weekday>(), Ok(Weekday::Tuesday));
//! ```

use crate::ValidationError;

/// A day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    /// Day index `0`.
    Monday,
    /// Day index `1`.
    Tuesday,
    /// Day index `2`.
    Wednesday,
    /// Day index `3`.
    Thursday,
    /// Day index `4`.
    Friday,
    /// Day index `5`.
    Saturday,
    /// Day index `6`.
    Sunday,
}

impl Weekday {
    /// Every weekday in index order.
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Return the numeric day index in `0..=6`.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Monday => 0,
            Self::Tuesday => 1,
            Self::Wednesday => 2,
            Self::Thursday => 3,
            Self::Friday => 4,
            Self::Saturday => 5,
            Self::Sunday => 6,
        }
    }

    /// Resolve a numeric day index.
    ///
    /// # Errors
    /// Returns [`ValidationError::DayOutOfRange`] when `day > 6`.
    pub const fn from_index(day: u8) -> Result<Self, ValidationError> {
        match day {
            0 => Ok(Self::Monday),
            1 => Ok(Self::Tuesday),
            2 => Ok(Self::Wednesday),
            3 => Ok(Self::Thursday),
            4 => Ok(Self::Friday),
            5 => Ok(Self::Saturday),
            6 => Ok(Self::Sunday),
            _ => Err(ValidationError::DayOutOfRange { day }),
        }
    }

    /// Return the weekday as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Weekday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monday" | "mon" => Ok(Self::Monday),
            "tuesday" | "tue" => Ok(Self::Tuesday),
            "wednesday" | "wed" => Ok(Self::Wednesday),
            "thursday" | "thu" => Ok(Self::Thursday),
            "friday" | "fri" => Ok(Self::Friday),
            "saturday" | "sat" => Ok(Self::Saturday),
            "sunday" | "sun" => Ok(Self::Sunday),
            _ => Err(ValidationError::UnknownWeekday(s.to_owned())),
        }
    }
}

impl TryFrom<u8> for Weekday {
    type Error = ValidationError;

    fn try_from(day: u8) -> Result<Self, Self::Error> {
        Self::from_index(day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[test]
    fn display_matches_as_str() {
        assert_eq!(Weekday::Friday.to_string(), Weekday::Friday.as_str());
    }

    #[test]
    fn index_round_trips_for_every_day() {
        for day in Weekday::ALL {
            assert_eq!(Weekday::from_index(day.index()), Ok(day));
        }
    }

    #[rstest]
    #[case("Monday", Weekday::Monday)]
    #[case("SAT", Weekday::Saturday)]
    #[case(" sun ", Weekday::Sunday)]
    fn parsing_accepts_names_and_abbreviations(#[case] input: &str, #[case] expected: Weekday) {
        assert_eq!(Weekday::from_str(input), Ok(expected));
    }

    #[test]
    fn parsing_rejects_unknown() {
        let err = Weekday::from_str("someday").unwrap_err();
        assert_eq!(err, ValidationError::UnknownWeekday("someday".into()));
    }

    #[test]
    fn index_seven_is_rejected() {
        assert_eq!(
            Weekday::try_from(7),
            Err(ValidationError::DayOutOfRange { day: 7 })
        );
    }
}
