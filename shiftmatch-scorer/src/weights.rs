//! Tunable weights applied to matched slots by priority.
#![forbid(unsafe_code)]

use shiftmatch_core::Priority;

use crate::WeightsError;

/// Credit awarded for a matched slot, by the worker's declared priority.
///
/// Both weights live in `0.0..=1.0` and a normal-priority match never earns
/// more than a high-priority one, which keeps every score in `0.0..=1.0`
/// and rewards workers who commit to a slot.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PriorityWeights {
    /// Credit for a slot the worker marked as high priority.
    pub high_weight: f32,
    /// Credit for a slot the worker merely listed as available.
    pub normal_weight: f32,
}

impl PriorityWeights {
    /// Construct weights without validating them.
    #[must_use]
    pub const fn new(high_weight: f32, normal_weight: f32) -> Self {
        Self {
            high_weight,
            normal_weight,
        }
    }

    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`WeightsError::NonFinite`] or [`WeightsError::OutOfRange`]
    /// for unusable values, and [`WeightsError::Inverted`] when the normal
    /// weight exceeds the high weight.
    pub fn validate(self) -> Result<Self, WeightsError> {
        check_unit("high_weight", self.high_weight)?;
        check_unit("normal_weight", self.normal_weight)?;
        if self.normal_weight > self.high_weight {
            return Err(WeightsError::Inverted {
                high_weight: self.high_weight,
                normal_weight: self.normal_weight,
            });
        }
        Ok(self)
    }

    /// Credit for a matched slot declared with `priority`.
    #[must_use]
    pub const fn weight_for(self, priority: Priority) -> f32 {
        match priority {
            Priority::High => self.high_weight,
            Priority::Normal => self.normal_weight,
        }
    }
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            high_weight: 1.0_f32,
            normal_weight: 0.7_f32,
        }
    }
}

fn check_unit(field: &'static str, value: f32) -> Result<(), WeightsError> {
    if !value.is_finite() {
        return Err(WeightsError::NonFinite { field });
    }
    if !(0.0_f32..=1.0_f32).contains(&value) {
        return Err(WeightsError::OutOfRange { field, value });
    }
    Ok(())
}
