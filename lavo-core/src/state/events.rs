//! Events that advance a wash run

use crate::laundry::ErrorCode;

/// Events that can trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Admission
    /// Load refused by the capacity check
    Rejected(ErrorCode),

    // Program selection
    /// Concrete program chosen (fixed or autodetected)
    ProgramResolved,

    // Actuator sequence
    /// Water poured, drum about to tumble
    WashStarted,
    /// Water released after the wash
    WashFinished,
    /// Spin requested after the wash
    SpinStarted,
    /// Spin completed
    SpinFinished,
}
