//! Appliance configuration loading
//!
//! Reads `appliance.toml` on the host and turns it into the core's
//! [`MachineLimits`] and default [`ProgramConfiguration`]. The controller
//! itself never touches files; this crate exists for tooling and for
//! baking a validated configuration into firmware.
//!
//! ```toml
//! [limits]
//! max_weight_kg = 8.0
//! average_dirt = 50.0
//!
//! [wash]
//! program = "autodetect"   # autodetect | short | medium | long
//! spin = true
//! ```

#![deny(unsafe_code)]

use std::fmt;
use std::fs;
use std::path::Path;

use lavo_core::config::{MachineLimits, AVERAGE_DIRT_DEGREE, MAX_WEIGHT_KG};
use lavo_core::laundry::{Percentage, Program, ProgramConfiguration, ProgramSelection};
use serde::Deserialize;

/// Configuration loading errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// File could not be read
    Io(std::io::ErrorKind),
    /// Invalid TOML syntax or unknown keys
    Toml(String),
    /// `limits.max_weight_kg` is not a positive finite number
    InvalidMaxWeight,
    /// `limits.average_dirt` is outside 0-100
    InvalidAverageDirt,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(kind) => write!(f, "failed to read config: {kind}"),
            ConfigError::Toml(msg) => write!(f, "invalid config: {msg}"),
            ConfigError::InvalidMaxWeight => {
                write!(f, "limits.max_weight_kg must be a positive number")
            }
            ConfigError::InvalidAverageDirt => {
                write!(f, "limits.average_dirt must be between 0 and 100")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e.kind())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Toml(e.to_string())
    }
}

/// Validated appliance configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplianceConfig {
    /// Capacity and dirt threshold
    pub limits: MachineLimits,
    /// Program used when the user does not pick one
    pub wash: ProgramConfiguration,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    limits: RawLimits,
    wash: RawWash,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawLimits {
    max_weight_kg: f64,
    average_dirt: f64,
}

impl Default for RawLimits {
    fn default() -> Self {
        Self {
            max_weight_kg: MAX_WEIGHT_KG,
            average_dirt: AVERAGE_DIRT_DEGREE.value(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawWash {
    program: ProgramName,
    spin: bool,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ProgramName {
    #[default]
    Autodetect,
    Short,
    Medium,
    Long,
}

impl From<ProgramName> for ProgramSelection {
    fn from(name: ProgramName) -> Self {
        match name {
            ProgramName::Autodetect => ProgramSelection::Autodetect,
            ProgramName::Short => ProgramSelection::Fixed(Program::Short),
            ProgramName::Medium => ProgramSelection::Fixed(Program::Medium),
            ProgramName::Long => ProgramSelection::Fixed(Program::Long),
        }
    }
}

/// Parse and validate configuration text
pub fn parse_config(input: &str) -> Result<ApplianceConfig, ConfigError> {
    let raw: RawConfig = toml::from_str(input)?;

    let average_dirt =
        Percentage::new(raw.limits.average_dirt).map_err(|_| ConfigError::InvalidAverageDirt)?;
    let limits = MachineLimits {
        max_weight_kg: raw.limits.max_weight_kg,
        average_dirt,
    };
    limits
        .validate()
        .map_err(|_| ConfigError::InvalidMaxWeight)?;

    Ok(ApplianceConfig {
        limits,
        wash: ProgramConfiguration::new(raw.wash.program.into(), raw.wash.spin),
    })
}

/// Read and validate a configuration file
pub fn load_config(path: impl AsRef<Path>) -> Result<ApplianceConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}
