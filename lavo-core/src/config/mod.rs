//! Configuration types
//!
//! Board-agnostic machine limits, optionally stored as postcard binary data.

pub mod limits;

pub use limits::*;
