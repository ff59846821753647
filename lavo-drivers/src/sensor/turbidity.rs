//! Optical turbidity sensor
//!
//! An infrared LED shines through the wash water onto a phototransistor.
//! Suspended dirt scatters the light, so the ADC reading falls as the
//! water gets dirtier. The reading is mapped linearly between two
//! calibration points:
//!
//! - `clean_raw`: reading in clear water (0% dirt)
//! - `dirty_raw`: reading in the reference soil solution (100% dirt)
//!
//! Either point may be the larger one, so sensors with an inverted output
//! stage work with the same driver.
//!
//! The controller asks for the dirt degree before the main fill, so the
//! sensor must sit in the pre-rinse sump: a small amount of water is
//! sprayed through the load and collects over the sensor window. The
//! board is responsible for running that pre-rinse before the wash is
//! started; this driver only reads the sample.

use lavo_core::laundry::{LaundryBatch, Percentage};
use lavo_core::traits::{DirtDetector, SensorError};

/// Largest value a 12-bit ADC can return
pub const ADC_MAX: u16 = 4095;

/// ADC reading trait for platform abstraction
pub trait AdcReader {
    /// Read ADC value (12-bit, 0-4095)
    #[allow(clippy::result_unit_err)]
    fn read(&mut self) -> Result<u16, ()>;
}

/// Turbidity sensor calibration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TurbidityConfig {
    /// Reading in clear water
    pub clean_raw: u16,
    /// Reading in the reference soil solution
    pub dirty_raw: u16,
    /// Readings averaged per measurement (0 is treated as 1)
    pub samples: u8,
}

impl Default for TurbidityConfig {
    fn default() -> Self {
        Self {
            clean_raw: 3600,
            dirty_raw: 600,
            samples: 8,
        }
    }
}

/// Turbidity-based dirt detector
///
/// The reading describes the pre-rinse sample that passed through the
/// load, so the batch itself is not inspected.
pub struct TurbiditySensor<ADC> {
    adc: ADC,
    config: TurbidityConfig,
}

impl<ADC> TurbiditySensor<ADC> {
    /// Create a new turbidity sensor
    pub fn new(adc: ADC, config: TurbidityConfig) -> Self {
        Self { adc, config }
    }

    /// Get the calibration
    pub fn config(&self) -> &TurbidityConfig {
        &self.config
    }

    /// Convert an averaged ADC reading to a dirt degree
    ///
    /// Readings beyond the calibration points saturate at 0% or 100%.
    pub fn raw_to_percentage(&self, raw: u16) -> Result<Percentage, SensorError> {
        let clean = self.config.clean_raw as f64;
        let dirty = self.config.dirty_raw as f64;

        if self.config.clean_raw == self.config.dirty_raw {
            return Err(SensorError::OutOfRange);
        }

        let degree = (clean - raw as f64) / (clean - dirty) * 100.0;
        Ok(Percentage::saturating(degree))
    }
}

impl<ADC: AdcReader> TurbiditySensor<ADC> {
    /// Average several ADC readings
    pub fn read_raw(&mut self) -> Result<u16, SensorError> {
        let samples = self.config.samples.max(1) as u32;
        let mut sum: u32 = 0;

        for _ in 0..samples {
            let value = self.adc.read().map_err(|_| SensorError::ConversionError)?;
            if value > ADC_MAX {
                return Err(SensorError::ConversionError);
            }
            sum += value as u32;
        }

        Ok((sum / samples) as u16)
    }
}

impl<ADC: AdcReader> DirtDetector for TurbiditySensor<ADC> {
    fn detect_dirt_degree(&mut self, _batch: &LaundryBatch) -> Result<Percentage, SensorError> {
        let raw = self.read_raw()?;
        self.raw_to_percentage(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lavo_core::laundry::Material;

    /// Mock ADC cycling through fixed readings
    struct MockAdc {
        values: &'static [u16],
        next: usize,
        fail: bool,
    }

    impl MockAdc {
        fn new(values: &'static [u16]) -> Self {
            Self {
                values,
                next: 0,
                fail: false,
            }
        }
    }

    impl AdcReader for MockAdc {
        fn read(&mut self) -> Result<u16, ()> {
            if self.fail {
                return Err(());
            }
            let value = self.values[self.next % self.values.len()];
            self.next += 1;
            Ok(value)
        }
    }

    fn calibration(samples: u8) -> TurbidityConfig {
        TurbidityConfig {
            clean_raw: 3000,
            dirty_raw: 1000,
            samples,
        }
    }

    fn batch() -> LaundryBatch {
        LaundryBatch::new(5.0, Material::Cotton).unwrap()
    }

    #[test]
    fn test_calibration_points() {
        let sensor = TurbiditySensor::new(MockAdc::new(&[0]), calibration(1));
        assert_eq!(sensor.raw_to_percentage(3000), Ok(Percentage::ZERO));
        assert_eq!(sensor.raw_to_percentage(1000), Ok(Percentage::FULL));
        assert_eq!(sensor.raw_to_percentage(2000), Ok(Percentage::AVERAGE));
    }

    #[test]
    fn test_saturates_outside_calibration() {
        let sensor = TurbiditySensor::new(MockAdc::new(&[0]), calibration(1));
        assert_eq!(sensor.raw_to_percentage(4000), Ok(Percentage::ZERO));
        assert_eq!(sensor.raw_to_percentage(200), Ok(Percentage::FULL));
    }

    #[test]
    fn test_inverted_output_stage() {
        let config = TurbidityConfig {
            clean_raw: 500,
            dirty_raw: 2500,
            samples: 1,
        };
        let sensor = TurbiditySensor::new(MockAdc::new(&[0]), config);
        assert_eq!(sensor.raw_to_percentage(2000).unwrap().value(), 75.0);
    }

    #[test]
    fn test_degenerate_calibration() {
        let config = TurbidityConfig {
            clean_raw: 2000,
            dirty_raw: 2000,
            samples: 1,
        };
        let mut sensor = TurbiditySensor::new(MockAdc::new(&[2000]), config);
        assert_eq!(
            sensor.detect_dirt_degree(&batch()),
            Err(SensorError::OutOfRange)
        );
    }

    #[test]
    fn test_averages_samples() {
        let mut sensor = TurbiditySensor::new(MockAdc::new(&[1400, 1800]), calibration(4));
        assert_eq!(sensor.read_raw(), Ok(1600));

        // 1600 is 70% of the way from clean to dirty
        let degree = sensor.detect_dirt_degree(&batch()).unwrap();
        assert!((degree.value() - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_samples_reads_once() {
        let mut sensor = TurbiditySensor::new(MockAdc::new(&[2500]), calibration(0));
        assert_eq!(sensor.read_raw(), Ok(2500));
        assert_eq!(sensor.adc.next, 1);
    }

    #[test]
    fn test_adc_failure() {
        let mut adc = MockAdc::new(&[2000]);
        adc.fail = true;
        let mut sensor = TurbiditySensor::new(adc, calibration(1));
        assert_eq!(
            sensor.detect_dirt_degree(&batch()),
            Err(SensorError::ConversionError)
        );
    }

    #[test]
    fn test_reading_beyond_twelve_bits() {
        let mut sensor = TurbiditySensor::new(MockAdc::new(&[5000]), calibration(1));
        assert_eq!(sensor.read_raw(), Err(SensorError::ConversionError));
    }
}
