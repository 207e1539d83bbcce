//! Cycle context supplied by the caller for each turn.
//!
//! Values are only ever built from the closed enumerations here; string input is
//! validated at this boundary so the response generator never sees a bad phase.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Menstrual-cycle stage used to tailor response content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CyclePhase {
    Menstrual,
    Follicular,
    Ovulation,
    Luteal,
}

impl CyclePhase {
    pub const ALL: [CyclePhase; 4] = [
        CyclePhase::Menstrual,
        CyclePhase::Follicular,
        CyclePhase::Ovulation,
        CyclePhase::Luteal,
    ];

    /// Lower-case name, as serialized
    pub fn name(&self) -> &'static str {
        match self {
            CyclePhase::Menstrual => "menstrual",
            CyclePhase::Follicular => "follicular",
            CyclePhase::Ovulation => "ovulation",
            CyclePhase::Luteal => "luteal",
        }
    }

    /// Human-readable description with the day range
    pub fn description(&self) -> &'static str {
        match self {
            CyclePhase::Menstrual => "Menstrual Phase (Days 1-5)",
            CyclePhase::Follicular => "Follicular Phase (Days 6-13)",
            CyclePhase::Ovulation => "Ovulation Phase (Days 14-16)",
            CyclePhase::Luteal => "Luteal Phase (Days 17-28)",
        }
    }

    /// Phase for a 1-based day of the cycle. Days past 28 stay luteal.
    pub fn from_cycle_day(day: u32) -> Result<Self, AppError> {
        match day {
            0 => Err(AppError::Validation(
                "Cycle day must start at 1".to_string(),
            )),
            1..=5 => Ok(CyclePhase::Menstrual),
            6..=13 => Ok(CyclePhase::Follicular),
            14..=16 => Ok(CyclePhase::Ovulation),
            _ => Ok(CyclePhase::Luteal),
        }
    }
}

impl fmt::Display for CyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CyclePhase {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "menstrual" => Ok(CyclePhase::Menstrual),
            "follicular" => Ok(CyclePhase::Follicular),
            "ovulation" => Ok(CyclePhase::Ovulation),
            "luteal" => Ok(CyclePhase::Luteal),
            other => Err(AppError::Validation(format!(
                "Unknown cycle phase '{}': expected menstrual, follicular, ovulation or luteal",
                other
            ))),
        }
    }
}

/// Per-turn context owned by the caller; the pipeline only reads it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextData {
    pub is_period_mode: bool,
    pub cycle_phase: CyclePhase,
}

impl ContextData {
    pub fn new(is_period_mode: bool, cycle_phase: CyclePhase) -> Self {
        Self {
            is_period_mode,
            cycle_phase,
        }
    }

    /// Build context from untrusted input, rejecting unknown phase names
    pub fn parse(is_period_mode: bool, cycle_phase: &str) -> Result<Self, AppError> {
        Ok(Self::new(is_period_mode, cycle_phase.parse()?))
    }
}

/// The home-screen cycle toggle and the phase it drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleState {
    is_period_mode: bool,
    cycle_phase: CyclePhase,
}

impl Default for CycleState {
    fn default() -> Self {
        Self {
            is_period_mode: false,
            cycle_phase: CyclePhase::Follicular,
        }
    }
}

impl CycleState {
    pub fn is_period_mode(&self) -> bool {
        self.is_period_mode
    }

    pub fn cycle_phase(&self) -> CyclePhase {
        self.cycle_phase
    }

    /// Flip period mode. Turning it on from the follicular default jumps to menstrual.
    pub fn set_period_mode(&mut self, enabled: bool) {
        self.is_period_mode = enabled;
        if enabled && self.cycle_phase == CyclePhase::Follicular {
            self.cycle_phase = CyclePhase::Menstrual;
        }
    }

    pub fn set_cycle_phase(&mut self, phase: CyclePhase) {
        self.cycle_phase = phase;
    }

    /// Label shown under the toggle
    pub fn status_label(&self) -> &'static str {
        if self.is_period_mode {
            "Menstrual Phase Active"
        } else {
            "Follicular Phase"
        }
    }

    /// Snapshot for one turn
    pub fn context(&self) -> ContextData {
        ContextData::new(self.is_period_mode, self.cycle_phase)
    }
}
