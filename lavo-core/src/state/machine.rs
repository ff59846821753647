//! Phase definition
//!
//! Every actuator call the controller makes is bracketed by a phase
//! transition.

use super::events::Event;
use crate::laundry::ErrorCode;

/// Phases of a single wash run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Load received, capacity not yet decided
    Admitted,
    /// Load accepted and a concrete program chosen
    ProgramResolved,
    /// Water in, drum tumbling, water out
    Washing,
    /// Drum spinning after the wash
    Spinning,
    /// Run completed successfully
    Done,
    /// Load refused
    Failed(ErrorCode),
}

impl Phase {
    /// Check if this phase may drive the pump and motor
    pub fn actuators_allowed(&self) -> bool {
        matches!(self, Phase::Washing | Phase::Spinning)
    }

    /// Check if this is a failure phase
    pub fn is_failed(&self) -> bool {
        matches!(self, Phase::Failed(_))
    }

    /// Process an event and return the next phase
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use Phase::*;

        match (self, event) {
            // Admission
            (Admitted, Rejected(code)) => Failed(code),
            (Admitted, Event::ProgramResolved) => Phase::ProgramResolved,

            // Wash
            (Phase::ProgramResolved, WashStarted) => Washing,
            (Washing, WashFinished) => Done,
            (Washing, SpinStarted) => Spinning,

            // Spin
            (Spinning, SpinFinished) => Done,

            // Default: stay in current phase
            _ => self,
        }
    }
}
