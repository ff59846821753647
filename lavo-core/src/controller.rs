//! Appliance controller
//!
//! Decides whether a load can be washed, resolves the program, and drives
//! the pump and motor in order:
//!
//! 1. capacity check (refusal ends the run without touching any device)
//! 2. program resolution (autodetect queries the dirt detector once)
//! 3. pour, wash, release
//! 4. spin, only when requested
//!
//! Refusals are reported in the returned [`LaundryStatus`]. Device faults
//! are not handled here; they abort the run and reach the caller as
//! [`WashError`].

#[cfg(feature = "defmt")]
use defmt::{debug, info, warn};

use crate::config::MachineLimits;
use crate::laundry::{
    ErrorCode, LaundryBatch, LaundryStatus, Program, ProgramConfiguration, ProgramSelection,
};
use crate::state::{Event, Phase};
use crate::traits::{DirtDetector, Engine, MotorError, PumpError, SensorError, WaterPump};

/// Device faults that abort a wash run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WashError {
    /// Dirt detector failed
    Sensor(SensorError),
    /// Drum motor failed
    Motor(MotorError),
    /// Water pump failed
    Pump(PumpError),
}

impl From<SensorError> for WashError {
    fn from(e: SensorError) -> Self {
        WashError::Sensor(e)
    }
}

impl From<MotorError> for WashError {
    fn from(e: MotorError) -> Self {
        WashError::Motor(e)
    }
}

impl From<PumpError> for WashError {
    fn from(e: PumpError) -> Self {
        WashError::Pump(e)
    }
}

/// Washing machine controller
///
/// Owns its three devices and the machine limits. Nothing else survives
/// between runs.
pub struct WashingMachine<D, E, P> {
    detector: D,
    engine: E,
    pump: P,
    limits: MachineLimits,
}

impl<D, E, P> WashingMachine<D, E, P>
where
    D: DirtDetector,
    E: Engine,
    P: WaterPump,
{
    /// Create a controller with factory limits
    pub fn new(detector: D, engine: E, pump: P) -> Self {
        Self::with_limits(detector, engine, pump, MachineLimits::default())
    }

    /// Create a controller with custom limits
    pub fn with_limits(detector: D, engine: E, pump: P, limits: MachineLimits) -> Self {
        Self {
            detector,
            engine,
            pump,
            limits,
        }
    }

    /// Limits in use
    pub fn limits(&self) -> &MachineLimits {
        &self.limits
    }

    /// Consume the controller and hand back its devices
    pub fn into_parts(self) -> (D, E, P) {
        (self.detector, self.engine, self.pump)
    }

    /// Wash a batch
    ///
    /// Returns `Ok` with a failure status if the load is refused, `Ok` with
    /// a success status naming the program that ran otherwise. `Err` means
    /// a device faulted part-way; no cleanup is attempted.
    pub fn start(
        &mut self,
        batch: &LaundryBatch,
        configuration: &ProgramConfiguration,
    ) -> Result<LaundryStatus, WashError> {
        let mut phase = Phase::Admitted;

        if self.limits.is_overweight(batch) {
            phase = self.advance(phase, Event::Rejected(ErrorCode::TooHeavy));
            #[cfg(feature = "defmt")]
            info!(
                "Refused {} kg of {}: too heavy",
                batch.weight_kg(),
                batch.material()
            );
            debug_assert!(phase.is_failed());
            return Ok(LaundryStatus::Failure {
                error: ErrorCode::TooHeavy,
            });
        }

        let program = self.resolve_program(batch, configuration)?;
        phase = self.advance(phase, Event::ProgramResolved);

        phase = self.advance(phase, Event::WashStarted);
        self.wash(phase, batch, program)?;

        if configuration.spin {
            phase = self.advance(phase, Event::SpinStarted);
            debug_assert!(phase.actuators_allowed());
            self.engine.spin().map_err(|e| self.fault(e.into()))?;
            phase = self.advance(phase, Event::SpinFinished);
        } else {
            phase = self.advance(phase, Event::WashFinished);
        }

        debug_assert_eq!(phase, Phase::Done);
        #[cfg(feature = "defmt")]
        info!("Finished program {}", program);

        Ok(LaundryStatus::Success { program })
    }

    /// Turn the configured selection into a runnable program
    fn resolve_program(
        &mut self,
        batch: &LaundryBatch,
        configuration: &ProgramConfiguration,
    ) -> Result<Program, WashError> {
        match configuration.selection {
            ProgramSelection::Fixed(program) => Ok(program),
            ProgramSelection::Autodetect => {
                let degree = self
                    .detector
                    .detect_dirt_degree(batch)
                    .map_err(|e| self.fault(e.into()))?;
                let program = self.limits.program_for_dirt(degree);
                #[cfg(feature = "defmt")]
                info!("Dirt degree {}% selects {}", degree.value(), program);
                Ok(program)
            }
        }
    }

    /// Pour, tumble, release
    fn wash(
        &mut self,
        phase: Phase,
        batch: &LaundryBatch,
        program: Program,
    ) -> Result<(), WashError> {
        debug_assert!(phase.actuators_allowed());
        self.pump
            .pour(batch.weight_kg())
            .map_err(|e| self.fault(e.into()))?;
        self.engine
            .run_washing(program.duration_minutes())
            .map_err(|e| self.fault(e.into()))?;
        self.pump.release().map_err(|e| self.fault(e.into()))?;
        Ok(())
    }

    fn advance(&self, phase: Phase, event: Event) -> Phase {
        let next = phase.transition(event);
        #[cfg(feature = "defmt")]
        debug!("{} --{}--> {}", phase, event, next);
        next
    }

    fn fault(&self, error: WashError) -> WashError {
        #[cfg(feature = "defmt")]
        warn!("Wash aborted: {}", error);
        error
    }
}
