//! Priority-weighted scoring of worker availability against shift patterns.
//!
//! [`PriorityScorer`] implements the [`Scorer`](shiftmatch_core::Scorer)
//! trait. For every slot a [`ShiftPattern`](shiftmatch_core::ShiftPattern)
//! requires it looks the slot up in the worker's
//! [`AvailabilityIndex`](shiftmatch_core::AvailabilityIndex):
//!
//! - a high-priority match earns [`PriorityWeights::high_weight`]
//!   (default `1.0`);
//! - a normal-priority match earns [`PriorityWeights::normal_weight`]
//!   (default `0.7`);
//! - an unmatched slot earns nothing.
//!
//! The total is divided by the number of required slots, the score a worker
//! would reach by matching everything at high priority. Matching is exact:
//! availability at 09:00 earns no credit towards a 10:00 requirement.
//!
//! # Examples
//!
//! ```
//! use shiftmatch_core::{AvailabilityIndex, Priority, Scorer, ShiftPattern};
//! use shiftmatch_scorer::{PriorityScorer, PriorityWeights};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let scorer = PriorityScorer::new(PriorityWeights::new(1.0, 0.5))?;
//! let availability = AvailabilityIndex::try_from_raw([(0, 9, Priority::Normal)])?;
//! let pattern = ShiftPattern::try_from_raw([(0, 9)])?;
//! assert_eq!(scorer.score(&availability, &pattern).score, 0.5);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

use shiftmatch_core::{AvailabilityIndex, MatchResult, Priority, Scorer, ShiftPattern};

mod error;
mod weights;

pub use error::WeightsError;
pub use weights::PriorityWeights;

/// Scorer that credits matched slots according to the worker's priority.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PriorityScorer {
    weights: PriorityWeights,
}

impl PriorityScorer {
    /// Construct a scorer from validated weights.
    ///
    /// # Errors
    /// Returns [`WeightsError`] when the weights fail
    /// [`PriorityWeights::validate`].
    pub fn new(weights: PriorityWeights) -> Result<Self, WeightsError> {
        let validated = weights.validate()?;
        log::debug!(
            "priority scorer configured with high={} normal={}",
            validated.high_weight,
            validated.normal_weight
        );
        Ok(Self { weights: validated })
    }

    /// Weights applied by this scorer.
    #[must_use]
    pub const fn weights(&self) -> PriorityWeights {
        self.weights
    }
}

impl Scorer for PriorityScorer {
    /// Scores depend only on how many required slots matched at each
    /// priority, so equal mixes produce bit-identical results.
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "scoring weighs per-priority match counts"
    )]
    fn score(&self, availability: &AvailabilityIndex, pattern: &ShiftPattern) -> MatchResult {
        let required_slots = pattern.required_slots();
        if required_slots == 0 {
            return MatchResult::empty();
        }
        let mut high = 0_usize;
        let mut normal = 0_usize;
        for slot in pattern.iter() {
            match availability.priority(slot) {
                Some(Priority::High) => high += 1,
                Some(Priority::Normal) => normal += 1,
                None => {}
            }
        }
        let weighted = high as f32 * self.weights.high_weight
            + normal as f32 * self.weights.normal_weight;
        MatchResult {
            score: Self::sanitise(weighted / required_slots as f32),
            matched_slots: high + normal,
            required_slots,
        }
    }
}
