use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{bar_role, BarRole, IDLE};

/// Outcome of a single stepper call. Carries enough to rebuild the status
/// line without looking at the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepResult {
    /// No run has been started; nothing changed.
    Idle,
    Selected { index: usize, key: u32 },
    /// `value` moved from `from` to `from + 1`.
    Shifted { from: usize, value: u32 },
    Placed { index: usize, key: u32 },
    Completed,
}

impl StepResult {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for StepResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("Enter numbers and press Sort"),
            Self::Selected { index, key } => {
                write!(f, "Selecting element at position {index} (value: {key})")
            }
            Self::Shifted { value, .. } => write!(f, "Shifting {value} to the right"),
            Self::Placed { index, key } => write!(f, "Placing {key} at position {index}"),
            Self::Completed => f.write_str("Sorting completed!"),
        }
    }
}

/// Read-only view handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSnapshot {
    pub values: Vec<u32>,
    pub outer_index: isize,
    pub inner_index: isize,
    pub finished: bool,
    pub last_step: Option<StepResult>,
}

impl SortSnapshot {
    pub fn idle(values: Vec<u32>) -> Self {
        Self {
            values,
            outer_index: IDLE,
            inner_index: IDLE,
            finished: false,
            last_step: None,
        }
    }

    pub fn role_at(&self, index: usize) -> BarRole {
        bar_role(index, self.outer_index, self.inner_index)
    }

    pub fn roles(&self) -> Vec<BarRole> {
        (0..self.values.len()).map(|i| self.role_at(i)).collect()
    }
}
