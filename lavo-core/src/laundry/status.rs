//! Result of a wash run

use super::program::Program;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reasons a load is refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorCode {
    /// Load exceeds the capacity for its material
    TooHeavy,
}

/// Overall outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WashResult {
    Success,
    Failure,
}

/// Final status of a call to [`WashingMachine::start`]
///
/// A success always names the program that actually ran and a failure
/// always names its error code; neither carries the other's field.
///
/// [`WashingMachine::start`]: crate::WashingMachine::start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LaundryStatus {
    /// The wash completed
    Success {
        /// Program that ran
        program: Program,
    },
    /// The load was refused
    Failure {
        /// Why it was refused
        error: ErrorCode,
    },
}

impl LaundryStatus {
    /// Outcome without its payload
    pub fn result(&self) -> WashResult {
        match self {
            LaundryStatus::Success { .. } => WashResult::Success,
            LaundryStatus::Failure { .. } => WashResult::Failure,
        }
    }

    /// Program that ran, on success
    pub fn program(&self) -> Option<Program> {
        match self {
            LaundryStatus::Success { program } => Some(*program),
            LaundryStatus::Failure { .. } => None,
        }
    }

    /// Refusal reason, on failure
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            LaundryStatus::Success { .. } => None,
            LaundryStatus::Failure { error } => Some(*error),
        }
    }

    /// Check if the load was washed
    pub fn is_success(&self) -> bool {
        matches!(self, LaundryStatus::Success { .. })
    }
}
