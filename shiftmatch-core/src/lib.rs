//! Core domain types for the shift matching engine.
//!
//! The week is modelled as a discrete grid of 7 × 24 hourly
//! [`TimeSlot`]s. Workers declare an availability set over the grid
//! ([`AvailabilityIndex`]), employers declare the slots they need covered
//! ([`ShiftPattern`]), and a [`Scorer`] turns one of each into a
//! [`MatchResult`].
//!
//! These models validate on construction to keep downstream components
//! honest: constructors return `Result` so an out-of-range slot or an empty
//! pattern is rejected before any scoring happens. Every type is an
//! immutable value and safe to share across threads.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod availability;
mod error;
mod pattern;
mod result;
pub mod scorer;
mod slot;
mod weekday;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use availability::{AvailabilityEntry, AvailabilityIndex, Priority, build_availability_index};
pub use error::ValidationError;
pub use pattern::{ShiftPattern, validate_shift_pattern};
pub use result::MatchResult;
pub use scorer::Scorer;
pub use slot::{DAYS_PER_WEEK, HOURS_PER_DAY, SLOTS_PER_WEEK, TimeSlot};
pub use weekday::Weekday;
