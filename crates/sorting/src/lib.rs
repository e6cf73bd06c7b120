//! Step-wise insertion sort core: the sequence store and the stepper.

pub mod stepper;
pub mod store;

pub use stepper::SortStepper;
pub use store::SequenceStore;

use shared::protocol::StepResult;

/// Runs one stepper call against the store's sequence.
pub fn step_store(stepper: &mut SortStepper, store: &mut SequenceStore) -> StepResult {
    stepper.step(store.sequence_mut().as_mut_slice())
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod store_tests;

#[cfg(test)]
#[path = "tests/stepper_tests.rs"]
mod stepper_tests;
