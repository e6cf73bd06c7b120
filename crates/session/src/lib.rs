//! Visualizer session: owns the sequence and the stepper and decides which
//! operations are allowed in which run state.

pub mod config;
pub mod scheduler;

use rand::Rng;
use serde::{Deserialize, Serialize};
use shared::{
    domain::{Sequence, SpeedLevel},
    error::ValidationError,
    protocol::{SortSnapshot, StepResult},
};
use sorting::{step_store, SequenceStore, SortStepper};
use thiserror::Error;

pub use config::{load_settings, Settings};
pub use scheduler::{run_ticker, TickClock};

pub const READY_STATUS: &str = "Enter numbers and press Sort";
pub const RANDOM_STATUS: &str = "Random numbers generated. Press Sort to begin.";
pub const LOADED_STATUS: &str = "Numbers loaded. Press Sort to begin.";
pub const PAUSED_STATUS: &str = "Paused. Press Sort to resume.";
pub const RUNNING_STATUS: &str = "Sorting...";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("a sort is in progress; reset or let it finish first")]
    RunActive,
    #[error("there are no numbers to sort")]
    NothingToSort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Paused,
    Completed,
}

impl RunState {
    /// Whether a run owns the sequence right now.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Running | Self::Paused)
    }
}

/// How many stepper calls a single tick may consume.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickGranularity {
    /// One primitive operation per tick.
    #[default]
    Fine,
    /// A selection shares its tick with the shift or placement after it.
    Merged,
}

impl std::str::FromStr for TickGranularity {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "fine" => Ok(Self::Fine),
            "merged" => Ok(Self::Merged),
            other => Err(format!("unknown tick granularity '{other}' (expected fine|merged)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickOutcome {
    pub steps: Vec<StepResult>,
}

impl TickOutcome {
    pub fn last(&self) -> Option<StepResult> {
        self.steps.last().copied()
    }

    pub fn is_completed(&self) -> bool {
        self.last().is_some_and(|step| step.is_completed())
    }
}

#[derive(Debug)]
pub struct VisualizerSession {
    store: SequenceStore,
    stepper: SortStepper,
    run_state: RunState,
    speed: SpeedLevel,
    granularity: TickGranularity,
    status: String,
}

impl Default for VisualizerSession {
    fn default() -> Self {
        Self::new(SpeedLevel::default(), TickGranularity::default())
    }
}

impl VisualizerSession {
    pub fn new(speed: SpeedLevel, granularity: TickGranularity) -> Self {
        Self {
            store: SequenceStore::new(),
            stepper: SortStepper::new(),
            run_state: RunState::Idle,
            speed,
            granularity,
            status: READY_STATUS.to_string(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.speed_level, settings.granularity)
    }

    pub fn load_text(&mut self, text: &str) -> Result<&Sequence, SessionError> {
        self.ensure_inactive()?;
        self.store.set_from_text(text)?;
        self.stepper.reset();
        self.run_state = RunState::Idle;
        self.status = LOADED_STATUS.to_string();
        Ok(self.store.sequence())
    }

    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&Sequence, SessionError> {
        self.ensure_inactive()?;
        self.store.randomize(rng);
        self.stepper.reset();
        self.run_state = RunState::Idle;
        self.status = RANDOM_STATUS.to_string();
        Ok(self.store.sequence())
    }

    /// Starts a run, or resumes a paused one where it left off.
    pub fn start(&mut self) -> Result<(), SessionError> {
        match self.run_state {
            RunState::Running => Ok(()),
            RunState::Paused => {
                self.run_state = RunState::Running;
                self.status = RUNNING_STATUS.to_string();
                tracing::info!("sort resumed");
                Ok(())
            }
            RunState::Idle | RunState::Completed => {
                let len = self.store.sequence().len();
                if len == 0 {
                    return Err(SessionError::NothingToSort);
                }
                self.stepper.start(len)?;
                self.run_state = RunState::Running;
                self.status = RUNNING_STATUS.to_string();
                tracing::info!(len, speed = self.speed.get(), "sort started");
                Ok(())
            }
        }
    }

    pub fn pause(&mut self) {
        if self.run_state == RunState::Running {
            self.run_state = RunState::Paused;
            self.status = PAUSED_STATUS.to_string();
            tracing::info!("sort paused");
        }
    }

    /// Advances the running sort by one tick. Returns `None` when no run is
    /// active.
    pub fn tick(&mut self) -> Option<TickOutcome> {
        if self.run_state != RunState::Running {
            return None;
        }

        let first = step_store(&mut self.stepper, &mut self.store);
        let mut steps = vec![first];
        if self.granularity == TickGranularity::Merged
            && matches!(first, StepResult::Selected { .. })
        {
            steps.push(step_store(&mut self.stepper, &mut self.store));
        }

        let outcome = TickOutcome { steps };
        if let Some(last) = outcome.last() {
            self.status = last.to_string();
        }
        tracing::trace!(steps = ?outcome.steps, "tick");

        if outcome.is_completed() {
            self.run_state = RunState::Completed;
            tracing::info!(sorted = self.store.sequence().is_sorted(), "sort completed");
        }
        Some(outcome)
    }

    pub fn reset(&mut self) {
        self.store.clear();
        self.stepper.reset();
        self.run_state = RunState::Idle;
        self.status = READY_STATUS.to_string();
        tracing::info!("session reset");
    }

    pub fn snapshot(&self) -> SortSnapshot {
        self.stepper.current_state(self.store.sequence())
    }

    pub fn sequence(&self) -> &Sequence {
        self.store.sequence()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn speed(&self) -> SpeedLevel {
        self.speed
    }

    pub fn set_speed(&mut self, speed: SpeedLevel) {
        if speed != self.speed {
            tracing::debug!(level = speed.get(), "speed changed");
            self.speed = speed;
        }
    }

    pub fn granularity(&self) -> TickGranularity {
        self.granularity
    }

    fn ensure_inactive(&self) -> Result<(), SessionError> {
        if self.run_state.is_active() {
            return Err(SessionError::RunActive);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
