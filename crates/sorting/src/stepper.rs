//! Insertion sort advanced one primitive operation per call.

use shared::{
    domain::{Sequence, IDLE},
    error::ValidationError,
    protocol::{SortSnapshot, StepResult},
};

/// Cursor state of an insertion sort run.
///
/// The stepper never owns the values it sorts; the caller hands the same
/// slice to every [`SortStepper::step`] call of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortStepper {
    len: usize,
    outer: isize,
    inner: isize,
    key: Option<u32>,
    finished: bool,
    last_step: Option<StepResult>,
}

impl Default for SortStepper {
    fn default() -> Self {
        Self {
            len: 0,
            outer: IDLE,
            inner: IDLE,
            key: None,
            finished: false,
            last_step: None,
        }
    }
}

impl SortStepper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions the cursors for a fresh run over `len` values. A single
    /// value is already sorted, so that run is finished straight away.
    pub fn start(&mut self, len: usize) -> Result<(), ValidationError> {
        if len == 0 {
            return Err(ValidationError::Empty);
        }
        *self = Self {
            len,
            outer: 1,
            inner: 0,
            key: None,
            finished: len == 1,
            last_step: None,
        };
        Ok(())
    }

    /// Performs one operation on `values`. A slice whose length differs from
    /// the one the run was started with abandons the run: the stepper goes
    /// back to idle and answers [`StepResult::Idle`] without touching it.
    pub fn step(&mut self, values: &mut [u32]) -> StepResult {
        let result = self.advance(values);
        self.last_step = Some(result);
        result
    }

    fn advance(&mut self, values: &mut [u32]) -> StepResult {
        if self.is_idle() {
            return StepResult::Idle;
        }
        if values.len() != self.len {
            tracing::warn!(
                expected = self.len,
                actual = values.len(),
                "stepper driven with a slice of another length; run abandoned"
            );
            self.reset();
            return StepResult::Idle;
        }

        if self.finished || self.outer as usize >= self.len {
            self.finished = true;
            self.key = None;
            return StepResult::Completed;
        }

        let outer = self.outer as usize;
        let Some(key) = self.key else {
            debug_assert_eq!(self.inner, self.outer - 1);
            let key = values[outer];
            self.key = Some(key);
            return StepResult::Selected { index: outer, key };
        };

        if self.inner >= 0 && values[self.inner as usize] > key {
            let from = self.inner as usize;
            values[from + 1] = values[from];
            self.inner -= 1;
            return StepResult::Shifted {
                from,
                value: values[from + 1],
            };
        }

        let index = (self.inner + 1) as usize;
        values[index] = key;
        self.outer += 1;
        self.inner = self.outer - 1;
        self.key = None;
        StepResult::Placed { index, key }
    }

    pub fn current_state(&self, sequence: &Sequence) -> SortSnapshot {
        if self.is_idle() {
            return SortSnapshot::idle(sequence.as_slice().to_vec());
        }
        SortSnapshot {
            values: sequence.as_slice().to_vec(),
            outer_index: self.outer,
            inner_index: self.inner,
            finished: self.finished,
            last_step: self.last_step,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_idle(&self) -> bool {
        self.outer == IDLE
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn outer_index(&self) -> isize {
        self.outer
    }

    pub fn inner_index(&self) -> isize {
        self.inner
    }

    pub fn key(&self) -> Option<u32> {
        self.key
    }

    pub fn last_step(&self) -> Option<StepResult> {
        self.last_step
    }
}
