//! Relay-switched drum motor
//!
//! Universal washing machine motors are commonly switched by two relays:
//! one selects the low-speed wash winding, the other the high-speed spin
//! winding. This driver provides:
//! - Blocking wash and spin cycles timed by a delay provider
//! - An interlock so both windings are never energised together
//! - Active-high or active-low relay outputs
//!
//! # Safety
//!
//! If a relay fails to release, its winding is treated as still energised
//! and every later request for the other winding is refused with
//! [`MotorError::Interlock`] until the stuck relay is switched off.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use lavo_core::traits::{Engine, MotorError};

const MS_PER_MINUTE: u32 = 60_000;

/// Relay engine configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RelayEngineConfig {
    /// Spin duration (ms)
    pub spin_ms: u32,
    /// Relay is active-high (true) or active-low (false)
    pub active_high: bool,
}

impl Default for RelayEngineConfig {
    fn default() -> Self {
        Self {
            spin_ms: 8 * MS_PER_MINUTE,
            active_high: true,
        }
    }
}

/// Which winding a relay drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Winding {
    Wash,
    Spin,
}

/// Drum motor driven by a wash relay and a spin relay
pub struct RelayEngine<W, S, D> {
    wash_relay: W,
    spin_relay: S,
    delay: D,
    config: RelayEngineConfig,
    /// Wash winding believed energised
    wash_on: bool,
    /// Spin winding believed energised
    spin_on: bool,
}

impl<W, S, D> RelayEngine<W, S, D>
where
    W: OutputPin,
    S: OutputPin,
    D: DelayNs,
{
    /// Create a new relay engine
    ///
    /// Both relays are released before returning.
    pub fn new(
        wash_relay: W,
        spin_relay: S,
        delay: D,
        config: RelayEngineConfig,
    ) -> Result<Self, MotorError> {
        let mut engine = Self {
            wash_relay,
            spin_relay,
            delay,
            config,
            wash_on: true,
            spin_on: true,
        };
        engine.switch(Winding::Wash, false)?;
        engine.switch(Winding::Spin, false)?;
        Ok(engine)
    }

    /// Get the configuration
    pub fn config(&self) -> &RelayEngineConfig {
        &self.config
    }

    /// Check if any winding is energised
    pub fn is_running(&self) -> bool {
        self.wash_on || self.spin_on
    }

    /// Release the pins and delay
    pub fn release_parts(self) -> (W, S, D) {
        (self.wash_relay, self.spin_relay, self.delay)
    }

    /// Energise or release one winding
    fn switch(&mut self, winding: Winding, on: bool) -> Result<(), MotorError> {
        if on {
            let other_on = match winding {
                Winding::Wash => self.spin_on,
                Winding::Spin => self.wash_on,
            };
            if other_on {
                return Err(MotorError::Interlock);
            }
        }

        let high = on == self.config.active_high;
        let (result, state) = match winding {
            Winding::Wash => (drive(&mut self.wash_relay, high), &mut self.wash_on),
            Winding::Spin => (drive(&mut self.spin_relay, high), &mut self.spin_on),
        };
        result?;
        *state = on;
        Ok(())
    }

    /// Run one winding for `ms`, then release it
    fn run_for(&mut self, winding: Winding, ms: u32) -> Result<(), MotorError> {
        self.switch(winding, true)?;
        self.delay.delay_ms(ms);
        self.switch(winding, false)
    }
}

impl<W, S, D> Engine for RelayEngine<W, S, D>
where
    W: OutputPin,
    S: OutputPin,
    D: DelayNs,
{
    fn run_washing(&mut self, duration_minutes: u16) -> Result<(), MotorError> {
        if duration_minutes == 0 {
            return Err(MotorError::InvalidDuration);
        }
        // u16::MAX minutes still fits in u32 milliseconds
        self.run_for(Winding::Wash, u32::from(duration_minutes) * MS_PER_MINUTE)
    }

    fn spin(&mut self) -> Result<(), MotorError> {
        self.run_for(Winding::Spin, self.config.spin_ms)
    }
}

fn drive<P: OutputPin>(pin: &mut P, high: bool) -> Result<(), MotorError> {
    let result = if high { pin.set_high() } else { pin.set_low() };
    result.map_err(|_| MotorError::Relay)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use embedded_hal::digital::{ErrorKind, ErrorType};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::vec::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Trace {
        Relay(&'static str, bool),
        Delay(u32),
    }

    type Log = Rc<RefCell<Vec<Trace>>>;

    /// Mock relay output; refuses to go low while `stuck` is set
    struct MockRelay {
        name: &'static str,
        log: Log,
        stuck: Rc<Cell<bool>>,
    }

    impl ErrorType for MockRelay {
        type Error = ErrorKind;
    }

    impl OutputPin for MockRelay {
        fn set_high(&mut self) -> Result<(), ErrorKind> {
            self.log.borrow_mut().push(Trace::Relay(self.name, true));
            Ok(())
        }

        fn set_low(&mut self) -> Result<(), ErrorKind> {
            if self.stuck.get() {
                return Err(ErrorKind::Other);
            }
            self.log.borrow_mut().push(Trace::Relay(self.name, false));
            Ok(())
        }
    }

    struct MockDelay {
        log: Log,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.log.borrow_mut().push(Trace::Delay(ns / 1_000_000));
        }

        fn delay_ms(&mut self, ms: u32) {
            self.log.borrow_mut().push(Trace::Delay(ms));
        }
    }

    struct Bench {
        engine: RelayEngine<MockRelay, MockRelay, MockDelay>,
        log: Log,
        wash_stuck: Rc<Cell<bool>>,
    }

    fn bench(config: RelayEngineConfig) -> Bench {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let wash_stuck = Rc::new(Cell::new(false));
        let wash = MockRelay {
            name: "wash",
            log: log.clone(),
            stuck: wash_stuck.clone(),
        };
        let spin = MockRelay {
            name: "spin",
            log: log.clone(),
            stuck: Rc::new(Cell::new(false)),
        };
        let delay = MockDelay { log: log.clone() };
        let engine = RelayEngine::new(wash, spin, delay, config).unwrap();
        log.borrow_mut().clear();
        Bench {
            engine,
            log,
            wash_stuck,
        }
    }

    #[test]
    fn test_initial_state() {
        let bench = bench(RelayEngineConfig::default());
        assert!(!bench.engine.is_running());
    }

    #[test]
    fn test_run_washing_holds_wash_relay() {
        let mut bench = bench(RelayEngineConfig::default());

        bench.engine.run_washing(90).unwrap();

        assert_eq!(
            *bench.log.borrow(),
            [
                Trace::Relay("wash", true),
                Trace::Delay(90 * 60_000),
                Trace::Relay("wash", false),
            ]
        );
        assert!(!bench.engine.is_running());
    }

    #[test]
    fn test_spin_uses_configured_time() {
        let mut bench = bench(RelayEngineConfig {
            spin_ms: 1_500,
            ..Default::default()
        });

        bench.engine.spin().unwrap();

        assert_eq!(
            *bench.log.borrow(),
            [
                Trace::Relay("spin", true),
                Trace::Delay(1_500),
                Trace::Relay("spin", false),
            ]
        );
    }

    #[test]
    fn test_zero_duration_rejected() {
        let mut bench = bench(RelayEngineConfig::default());
        assert_eq!(bench.engine.run_washing(0), Err(MotorError::InvalidDuration));
        assert!(bench.log.borrow().is_empty());
    }

    #[test]
    fn test_longest_duration_fits() {
        let mut bench = bench(RelayEngineConfig::default());
        bench.engine.run_washing(u16::MAX).unwrap();
        assert_eq!(bench.log.borrow()[1], Trace::Delay(u16::MAX as u32 * 60_000));
    }

    #[test]
    fn test_active_low_relays() {
        let mut bench = bench(RelayEngineConfig {
            spin_ms: 10,
            active_high: false,
        });

        bench.engine.spin().unwrap();

        assert_eq!(bench.log.borrow()[0], Trace::Relay("spin", false));
        assert_eq!(bench.log.borrow()[2], Trace::Relay("spin", true));
    }

    #[test]
    fn test_stuck_relay_trips_interlock() {
        let mut bench = bench(RelayEngineConfig::default());
        bench.wash_stuck.set(true);

        // Wash relay energises but cannot be released
        assert_eq!(bench.engine.run_washing(45), Err(MotorError::Relay));
        assert!(bench.engine.is_running());

        // Spin refused while the wash winding may still be live
        assert_eq!(bench.engine.spin(), Err(MotorError::Interlock));

        // Once the relay releases, spin works again
        bench.wash_stuck.set(false);
        bench.engine.run_washing(1).unwrap();
        bench.engine.spin().unwrap();
        assert!(!bench.engine.is_running());
    }
}
