//! Board-agnostic core logic for the washing appliance
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Laundry value types (batch, program, percentage, status)
//! - Hardware abstraction traits (dirt detector, engine, water pump)
//! - Wash-cycle phase machine
//! - Machine limits (capacity and dirt threshold)
//! - The appliance controller that sequences a wash

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod laundry;
pub mod state;
pub mod traits;

pub use controller::{WashError, WashingMachine};
