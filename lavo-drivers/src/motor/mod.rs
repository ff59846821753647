//! Motor driver implementations
//!
//! This module provides a relay-switched drum motor with separate wash
//! and spin windings.

pub mod relay;

pub use relay::{RelayEngine, RelayEngineConfig};
