//! Laundry value types
//!
//! Immutable values exchanged between the caller and the controller.
//! All of them are created by the caller (or by the controller, for the
//! status) and never mutated afterwards.

pub mod batch;
pub mod percentage;
pub mod program;
pub mod status;

pub use batch::{BatchError, LaundryBatch, Material};
pub use percentage::{Percentage, PercentageError};
pub use program::{Program, ProgramConfiguration, ProgramSelection};
pub use status::{ErrorCode, LaundryStatus, WashResult};
