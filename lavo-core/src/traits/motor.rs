//! Drum motor trait

/// Errors that can occur with motor operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorError {
    /// Relay output could not be switched
    Relay,
    /// Requested wash duration is not runnable
    InvalidDuration,
    /// Safety interlock prevented operation
    Interlock,
}

/// Drum motor
///
/// Both operations return only once the drum has stopped again.
pub trait Engine {
    /// Tumble the drum for a wash cycle
    fn run_washing(&mut self, duration_minutes: u16) -> Result<(), MotorError>;

    /// Spin the drum to extract water
    fn spin(&mut self) -> Result<(), MotorError>;
}

impl<T: Engine + ?Sized> Engine for &mut T {
    fn run_washing(&mut self, duration_minutes: u16) -> Result<(), MotorError> {
        (**self).run_washing(duration_minutes)
    }

    fn spin(&mut self) -> Result<(), MotorError> {
        (**self).spin()
    }
}
