//! Laundry batch description

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fabric category of a load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Material {
    Cotton,
    Wool,
    Jeans,
    Synthetic,
    Delicate,
}

impl Material {
    /// Materials limited to half of the drum capacity
    ///
    /// Wool felts and jeans soak up enough water that a full drum would
    /// overload the motor.
    pub fn is_half_load(&self) -> bool {
        matches!(self, Material::Wool | Material::Jeans)
    }
}

/// Errors constructing a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BatchError {
    /// Weight is zero, negative, NaN or infinite
    InvalidWeight,
}

/// A load of laundry handed to the machine
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LaundryBatch {
    weight_kg: f64,
    material: Material,
}

impl LaundryBatch {
    /// Create a new batch
    ///
    /// # Arguments
    /// - `weight_kg`: Dry weight of the load, must be positive and finite
    /// - `material`: Fabric category
    pub fn new(weight_kg: f64, material: Material) -> Result<Self, BatchError> {
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(BatchError::InvalidWeight);
        }

        Ok(Self {
            weight_kg,
            material,
        })
    }

    /// Dry weight in kilograms
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Fabric category
    pub fn material(&self) -> Material {
        self.material
    }
}
