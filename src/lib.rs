//! Facade crate for the shift matching engine.
//!
//! This crate re-exports the time-grid model, the priority-weighted scorer
//! and, behind the `ranker` feature, the batch ranking service.
//!
//! # Examples
//!
//! ```
//! use shiftmatch::{AvailabilityIndex, Priority, PriorityScorer, Scorer, ShiftPattern};
//!
//! # fn main() -> Result<(), shiftmatch::ValidationError> {
//! let availability = AvailabilityIndex::try_from_raw([(0, 9, Priority::High)])?;
//! let pattern = ShiftPattern::try_from_raw([(0, 9), (1, 10)])?;
//! let result = PriorityScorer::default().score(&availability, &pattern);
//! assert_eq!(result.matched_slots, 1);
//! assert_eq!(result.required_slots, 2);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub use shiftmatch_core::{
    AvailabilityEntry, AvailabilityIndex, HOURS_PER_DAY, MatchResult, Priority, SLOTS_PER_WEEK,
    Scorer, ShiftPattern, TimeSlot, ValidationError, Weekday, build_availability_index,
    validate_shift_pattern,
};
pub use shiftmatch_scorer::{PriorityScorer, PriorityWeights, WeightsError};

#[cfg(feature = "ranker")]
pub use shiftmatch_ranker::{Ranked, Ranker, RankerConfig};
