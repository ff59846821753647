//! Wash-cycle phase machine
//!
//! Tracks where a single run of the controller is. The machine is
//! explicit, finite, and deterministic, and it has no loops: every run
//! either fails at admission or walks straight through to `Done`.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::Phase;
