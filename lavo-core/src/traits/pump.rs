//! Water pump trait

/// Errors that can occur with pump operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PumpError {
    /// Valve output could not be switched
    Valve,
    /// Requested amount of water is not pourable
    InvalidVolume,
}

/// Water inlet and drain
pub trait WaterPump {
    /// Fill the drum with water for a load of `weight_kg`
    fn pour(&mut self, weight_kg: f64) -> Result<(), PumpError>;

    /// Drain all water from the drum
    fn release(&mut self) -> Result<(), PumpError>;
}

impl<T: WaterPump + ?Sized> WaterPump for &mut T {
    fn pour(&mut self, weight_kg: f64) -> Result<(), PumpError> {
        (**self).pour(weight_kg)
    }

    fn release(&mut self) -> Result<(), PumpError> {
        (**self).release()
    }
}
