//! Guided breathing: inhale 4s, hold 2s, exhale 4s, five cycles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Number of full inhale/hold/exhale cycles in one session
pub const TOTAL_CYCLES: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreathingPhase {
    Inhale,
    Hold,
    Exhale,
}

impl BreathingPhase {
    pub fn duration(&self) -> Duration {
        match self {
            BreathingPhase::Inhale => Duration::from_secs(4),
            BreathingPhase::Hold => Duration::from_secs(2),
            BreathingPhase::Exhale => Duration::from_secs(4),
        }
    }

    pub fn instruction(&self) -> &'static str {
        match self {
            BreathingPhase::Inhale => "Breathe In",
            BreathingPhase::Hold => "Hold",
            BreathingPhase::Exhale => "Breathe Out",
        }
    }

    /// Yoruba cue shown under the instruction
    pub fn prompt(&self) -> &'static str {
        match self {
            BreathingPhase::Inhale => "Simi... Fill your lungs",
            BreathingPhase::Hold => "Mu... Hold gently",
            BreathingPhase::Exhale => "Fẹ... Let it go",
        }
    }

    fn next(&self) -> BreathingPhase {
        match self {
            BreathingPhase::Inhale => BreathingPhase::Hold,
            BreathingPhase::Hold => BreathingPhase::Exhale,
            BreathingPhase::Exhale => BreathingPhase::Inhale,
        }
    }
}

impl fmt::Display for BreathingPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.instruction())
    }
}

/// Step-driven breathing session. The caller owns the clock and calls
/// [`BreathingExercise::advance`] once the current phase has elapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreathingExercise {
    phase: BreathingPhase,
    cycle: u32,
    complete: bool,
}

impl Default for BreathingExercise {
    fn default() -> Self {
        Self::new()
    }
}

impl BreathingExercise {
    pub fn new() -> Self {
        Self {
            phase: BreathingPhase::Inhale,
            cycle: 1,
            complete: false,
        }
    }

    pub fn phase(&self) -> BreathingPhase {
        self.phase
    }

    /// 1-based cycle counter
    pub fn cycle(&self) -> u32 {
        self.cycle
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn current_duration(&self) -> Duration {
        self.phase.duration()
    }

    pub fn instruction(&self) -> &'static str {
        self.phase.instruction()
    }

    pub fn prompt(&self) -> &'static str {
        self.phase.prompt()
    }

    pub fn progress_label(&self) -> String {
        format!("Cycle {} of {}", self.cycle, TOTAL_CYCLES)
    }

    /// Move to the next phase. Returns `None` once the last exhale has finished.
    pub fn advance(&mut self) -> Option<BreathingPhase> {
        if self.complete {
            return None;
        }
        if self.phase == BreathingPhase::Exhale {
            if self.cycle >= TOTAL_CYCLES {
                self.complete = true;
                return None;
            }
            self.cycle += 1;
        }
        self.phase = self.phase.next();
        Some(self.phase)
    }

    /// Total wall-clock length of one full session
    pub fn total_duration() -> Duration {
        let per_cycle: Duration = [
            BreathingPhase::Inhale,
            BreathingPhase::Hold,
            BreathingPhase::Exhale,
        ]
        .iter()
        .map(BreathingPhase::duration)
        .sum();
        per_cycle * TOTAL_CYCLES
    }
}
