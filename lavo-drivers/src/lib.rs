//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in lavo-core for common washing machine hardware:
//!
//! - Water pump (solenoid inlet and drain valves)
//! - Drum motor (wash and spin relays)
//! - Dirt sensor (optical turbidity sensor on an ADC channel)
//!
//! All drivers block on an `embedded_hal::delay::DelayNs` for the
//! duration of each operation.

#![no_std]
#![deny(unsafe_code)]

pub mod motor;
pub mod pump;
pub mod sensor;
