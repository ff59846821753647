//! Machine limits
//!
//! Capacity and dirt threshold used by the controller. The defaults are
//! the factory values; a calibrated set can be persisted as postcard
//! binary data.

use crate::laundry::{LaundryBatch, Percentage, Program};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Drum capacity in kilograms of dry laundry
pub const MAX_WEIGHT_KG: f64 = 8.0;

/// Dirt degree above which autodetection picks the long program
pub const AVERAGE_DIRT_DEGREE: Percentage = Percentage::AVERAGE;

/// Maximum serialized limits size (binary)
pub const MAX_LIMITS_SIZE: usize = 32;

/// Limits errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LimitsError {
    /// Capacity is zero, negative, NaN or infinite
    InvalidMaxWeight,
    /// Serialization failed (buffer too small)
    Serialize,
    /// Deserialization failed
    Deserialize,
}

/// Capacity and classification thresholds
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MachineLimits {
    /// Full drum capacity (kg)
    pub max_weight_kg: f64,
    /// Dirt degree separating the medium and long programs
    pub average_dirt: Percentage,
}

impl Default for MachineLimits {
    fn default() -> Self {
        Self {
            max_weight_kg: MAX_WEIGHT_KG,
            average_dirt: AVERAGE_DIRT_DEGREE,
        }
    }
}

impl MachineLimits {
    /// Check the limits are usable
    pub fn validate(&self) -> Result<(), LimitsError> {
        if !self.max_weight_kg.is_finite() || self.max_weight_kg <= 0.0 {
            return Err(LimitsError::InvalidMaxWeight);
        }
        Ok(())
    }

    /// Capacity for half-load materials (kg)
    pub fn half_weight_kg(&self) -> f64 {
        self.max_weight_kg / 2.0
    }

    /// Check whether a batch exceeds the capacity for its material
    ///
    /// Half-load materials are refused already at half capacity; everything
    /// else is refused only above full capacity.
    pub fn is_overweight(&self, batch: &LaundryBatch) -> bool {
        if batch.material().is_half_load() {
            return batch.weight_kg() >= self.half_weight_kg();
        }
        batch.weight_kg() > self.max_weight_kg
    }

    /// Pick a program from a dirt reading
    pub fn program_for_dirt(&self, degree: Percentage) -> Program {
        if degree.is_greater_than(self.average_dirt) {
            Program::Long
        } else {
            Program::Medium
        }
    }

    /// Serialize into `buf`, returning the used part
    #[cfg(feature = "serde")]
    pub fn encode<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], LimitsError> {
        postcard::to_slice(self, buf).map_err(|_| LimitsError::Serialize)
    }

    /// Deserialize and validate stored limits
    #[cfg(feature = "serde")]
    pub fn decode(bytes: &[u8]) -> Result<Self, LimitsError> {
        let limits: Self = postcard::from_bytes(bytes).map_err(|_| LimitsError::Deserialize)?;
        limits.validate()?;
        Ok(limits)
    }
}
