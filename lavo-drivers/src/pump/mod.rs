//! Water pump implementations

pub mod valve;

pub use valve::{ValvePump, ValvePumpConfig};
