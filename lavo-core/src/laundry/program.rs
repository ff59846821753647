//! Wash programs and the per-run program configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A runnable wash program
///
/// Every variant has a fixed duration. Autodetection is not a program; it
/// lives in [`ProgramSelection`] so a resolved program can never be it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Program {
    Short,
    Medium,
    Long,
}

impl Program {
    /// All runnable programs, shortest first
    pub const ALL: [Program; 3] = [Program::Short, Program::Medium, Program::Long];

    /// Wash duration in minutes
    pub const fn duration_minutes(&self) -> u16 {
        match self {
            Program::Short => 45,
            Program::Medium => 90,
            Program::Long => 120,
        }
    }
}

/// Which program the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ProgramSelection {
    /// Pick a program from the dirt sensor reading
    #[default]
    Autodetect,
    /// Run exactly this program
    Fixed(Program),
}

impl From<Program> for ProgramSelection {
    fn from(program: Program) -> Self {
        ProgramSelection::Fixed(program)
    }
}

/// Program configuration for a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProgramConfiguration {
    /// Requested program
    pub selection: ProgramSelection,
    /// Spin after the water is released
    pub spin: bool,
}

impl ProgramConfiguration {
    /// Create a configuration
    pub const fn new(selection: ProgramSelection, spin: bool) -> Self {
        Self { selection, spin }
    }

    /// Autodetect the program, no spin
    pub const fn autodetect() -> Self {
        Self::new(ProgramSelection::Autodetect, false)
    }

    /// Run a fixed program, no spin
    pub const fn fixed(program: Program) -> Self {
        Self::new(ProgramSelection::Fixed(program), false)
    }

    /// Same configuration with the spin flag replaced
    pub const fn with_spin(self, spin: bool) -> Self {
        Self {
            selection: self.selection,
            spin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_durations() {
        assert_eq!(Program::Short.duration_minutes(), 45);
        assert_eq!(Program::Medium.duration_minutes(), 90);
        assert_eq!(Program::Long.duration_minutes(), 120);
    }

    #[test]
    fn test_all_is_sorted_by_duration() {
        for pair in Program::ALL.windows(2) {
            assert!(pair[0].duration_minutes() < pair[1].duration_minutes());
        }
    }

    #[test]
    fn test_default_configuration() {
        let config = ProgramConfiguration::default();
        assert_eq!(config.selection, ProgramSelection::Autodetect);
        assert!(!config.spin);
        assert_eq!(config, ProgramConfiguration::autodetect());
    }

    #[test]
    fn test_builders() {
        let config = ProgramConfiguration::fixed(Program::Long).with_spin(true);
        assert_eq!(config.selection, ProgramSelection::Fixed(Program::Long));
        assert!(config.spin);

        let selection: ProgramSelection = Program::Short.into();
        assert_eq!(selection, ProgramSelection::Fixed(Program::Short));
    }
}
