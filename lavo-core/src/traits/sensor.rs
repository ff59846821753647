//! Dirt sensor trait

use crate::laundry::{LaundryBatch, Percentage};

/// Errors that can occur with dirt sensing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Sensor has not settled yet
    NotReady,
    /// Reading outside the calibrated range
    OutOfRange,
    /// ADC conversion error
    ConversionError,
}

/// Trait for dirt sensors
///
/// Implementations should handle the specific measuring principle
/// (turbidity, conductivity, camera, ...). Readings must be repeatable
/// for the same batch.
pub trait DirtDetector {
    /// Measure how soiled `batch` is
    ///
    /// Takes `&mut self` because ADC reads typically require mutable access.
    fn detect_dirt_degree(&mut self, batch: &LaundryBatch) -> Result<Percentage, SensorError>;
}

impl<T: DirtDetector + ?Sized> DirtDetector for &mut T {
    fn detect_dirt_degree(&mut self, batch: &LaundryBatch) -> Result<Percentage, SensorError> {
        (**self).detect_dirt_degree(batch)
    }
}
