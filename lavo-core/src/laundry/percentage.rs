//! Bounded percentage value

use core::cmp::Ordering;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors constructing a percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PercentageError {
    /// Value outside 0-100 or NaN
    OutOfRange,
}

impl fmt::Display for PercentageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PercentageError::OutOfRange => write!(f, "percentage must be between 0 and 100"),
        }
    }
}

/// A percentage in the closed range [0, 100]
///
/// NaN can never be stored, so the ordering is total.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct Percentage(f64);

impl Percentage {
    /// 0%
    pub const ZERO: Self = Self(0.0);

    /// 50%, the dividing line between lightly and heavily soiled
    pub const AVERAGE: Self = Self(50.0);

    /// 100%
    pub const FULL: Self = Self(100.0);

    /// Create a percentage, rejecting values outside 0-100
    pub fn new(value: f64) -> Result<Self, PercentageError> {
        if (0.0..=100.0).contains(&value) {
            // fold -0.0 into 0.0 so equality agrees with total_cmp
            Ok(Self(value + 0.0))
        } else {
            Err(PercentageError::OutOfRange)
        }
    }

    /// Create a percentage, clamping into 0-100
    ///
    /// NaN clamps to 0.
    pub fn saturating(value: f64) -> Self {
        if value.is_nan() {
            Self::ZERO
        } else {
            Self(value.clamp(0.0, 100.0) + 0.0)
        }
    }

    /// Raw value in percent
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Strictly greater than `other`
    pub fn is_greater_than(&self, other: Percentage) -> bool {
        *self > other
    }
}

impl PartialEq for Percentage {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Percentage {}

impl PartialOrd for Percentage {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Percentage {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl TryFrom<f64> for Percentage {
    type Error = PercentageError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Percentage> for f64 {
    fn from(value: Percentage) -> Self {
        value.0
    }
}
