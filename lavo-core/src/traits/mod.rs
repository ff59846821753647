//! Hardware abstraction traits
//!
//! These traits define the interface between the wash-cycle logic
//! and hardware-specific implementations. Every call blocks until the
//! device has finished.

pub mod motor;
pub mod pump;
pub mod sensor;

pub use motor::{Engine, MotorError};
pub use pump::{PumpError, WaterPump};
pub use sensor::{DirtDetector, SensorError};
