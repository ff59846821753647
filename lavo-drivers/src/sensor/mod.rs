//! Dirt sensor implementations

pub mod turbidity;

pub use turbidity::{AdcReader, TurbidityConfig, TurbiditySensor};
