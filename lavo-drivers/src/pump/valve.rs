//! Solenoid valve water pump
//!
//! Mains water enters through an inlet valve and leaves through a drain
//! valve (gravity or a drain pump wired to the same output). The amount
//! of water is controlled by how long the inlet stays open.
//!
//! # Usage
//!
//! ```ignore
//! let mut pump = ValvePump::new(inlet_pin, drain_pin, delay, ValvePumpConfig::default())?;
//!
//! pump.pour(6.0)?; // blocks while filling
//! pump.release()?; // blocks while draining
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use lavo_core::traits::{PumpError, WaterPump};

/// Valve pump configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ValvePumpConfig {
    /// Inlet open time per kilogram of laundry (ms)
    pub fill_ms_per_kg: u32,
    /// Drain open time (ms)
    pub drain_ms: u32,
    /// Valves open when the pin is high (true) or low (false)
    pub active_high: bool,
}

impl Default for ValvePumpConfig {
    fn default() -> Self {
        Self {
            fill_ms_per_kg: 12_000,
            drain_ms: 90_000,
            active_high: true,
        }
    }
}

/// Water pump driven by an inlet and a drain valve
pub struct ValvePump<I, O, D> {
    inlet: I,
    drain: O,
    delay: D,
    config: ValvePumpConfig,
}

impl<I, O, D> ValvePump<I, O, D>
where
    I: OutputPin,
    O: OutputPin,
    D: DelayNs,
{
    /// Create a new valve pump
    ///
    /// Both valves are closed before returning.
    pub fn new(inlet: I, drain: O, delay: D, config: ValvePumpConfig) -> Result<Self, PumpError> {
        let mut pump = Self {
            inlet,
            drain,
            delay,
            config,
        };
        set_valve(&mut pump.inlet, false, pump.config.active_high)?;
        set_valve(&mut pump.drain, false, pump.config.active_high)?;
        Ok(pump)
    }

    /// Get the configuration
    pub fn config(&self) -> &ValvePumpConfig {
        &self.config
    }

    /// Inlet open time for a load (ms)
    ///
    /// Returns `None` for weights that cannot be poured.
    pub fn fill_time_ms(&self, weight_kg: f64) -> Option<u32> {
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return None;
        }
        let ms = weight_kg * self.config.fill_ms_per_kg as f64;
        if ms > u32::MAX as f64 {
            return None;
        }
        Some(ms as u32)
    }

    /// Release the pins and delay
    pub fn release_parts(self) -> (I, O, D) {
        (self.inlet, self.drain, self.delay)
    }

    /// Hold a valve open for `ms`, then close it
    fn cycle<P: OutputPin>(
        pin: &mut P,
        delay: &mut D,
        active_high: bool,
        ms: u32,
    ) -> Result<(), PumpError> {
        set_valve(pin, true, active_high)?;
        delay.delay_ms(ms);
        set_valve(pin, false, active_high)
    }
}

impl<I, O, D> WaterPump for ValvePump<I, O, D>
where
    I: OutputPin,
    O: OutputPin,
    D: DelayNs,
{
    fn pour(&mut self, weight_kg: f64) -> Result<(), PumpError> {
        let ms = self.fill_time_ms(weight_kg).ok_or(PumpError::InvalidVolume)?;
        Self::cycle(&mut self.inlet, &mut self.delay, self.config.active_high, ms)
    }

    fn release(&mut self) -> Result<(), PumpError> {
        Self::cycle(
            &mut self.drain,
            &mut self.delay,
            self.config.active_high,
            self.config.drain_ms,
        )
    }
}

/// Drive a valve pin, honouring its polarity
fn set_valve<P: OutputPin>(pin: &mut P, open: bool, active_high: bool) -> Result<(), PumpError> {
    let result = if open == active_high {
        // Normal: open=true, active_high=true → high
        // Inverted: open=false, active_high=false → high
        pin.set_high()
    } else {
        pin.set_low()
    };
    result.map_err(|_| PumpError::Valve)
}
