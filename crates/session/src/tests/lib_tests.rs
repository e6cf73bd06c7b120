use super::*;

use rand::{rngs::StdRng, SeedableRng};
use shared::domain::BarRole;

fn run_to_completion(session: &mut VisualizerSession) -> Vec<TickOutcome> {
    let mut outcomes = Vec::new();
    while let Some(outcome) = session.tick() {
        let done = outcome.is_completed();
        outcomes.push(outcome);
        if done {
            break;
        }
        assert!(outcomes.len() < 10_000, "session never completed");
    }
    outcomes
}

#[test]
fn fine_ticks_take_one_step_each() {
    let mut session = VisualizerSession::default();
    session.load_text("5, 3, 4, 1, 2").expect("valid input");
    session.start().expect("start");

    let outcomes = run_to_completion(&mut session);

    assert_eq!(outcomes.len(), 17);
    assert!(outcomes.iter().all(|o| o.steps.len() == 1));
    assert_eq!(session.sequence().as_slice(), &[1, 2, 3, 4, 5]);
    assert_eq!(session.run_state(), RunState::Completed);
    assert_eq!(session.status(), "Sorting completed!");
}

#[test]
fn merged_ticks_fold_selection_into_next_operation() {
    let mut session = VisualizerSession::new(SpeedLevel::default(), TickGranularity::Merged);
    session.load_text("5, 3, 4, 1, 2").expect("valid input");
    session.start().expect("start");

    let outcomes = run_to_completion(&mut session);

    assert_eq!(outcomes.len(), 13);
    assert_eq!(
        outcomes[0].steps,
        vec![
            StepResult::Selected { index: 1, key: 3 },
            StepResult::Shifted { from: 0, value: 5 },
        ]
    );
    assert_eq!(session.sequence().as_slice(), &[1, 2, 3, 4, 5]);
}

#[test]
fn status_follows_last_step() {
    let mut session = VisualizerSession::default();
    assert_eq!(session.status(), READY_STATUS);
    session.load_text("2, 1").expect("valid input");
    session.start().expect("start");

    session.tick();
    assert_eq!(session.status(), "Selecting element at position 1 (value: 1)");
    session.tick();
    assert_eq!(session.status(), "Shifting 2 to the right");
    session.tick();
    assert_eq!(session.status(), "Placing 1 at position 0");
}

#[test]
fn inputs_are_locked_while_a_run_is_active() {
    let mut session = VisualizerSession::default();
    let mut rng = StdRng::seed_from_u64(3);
    session.load_text("4, 3, 2").expect("valid input");
    session.start().expect("start");
    session.tick();

    assert!(matches!(session.load_text("1"), Err(SessionError::RunActive)));
    assert!(matches!(session.randomize(&mut rng), Err(SessionError::RunActive)));

    session.pause();
    assert!(matches!(session.load_text("1"), Err(SessionError::RunActive)));
    assert_eq!(session.sequence().as_slice(), &[4, 3, 2]);
}

#[test]
fn invalid_text_keeps_previous_sequence() {
    let mut session = VisualizerSession::default();
    session.load_text("8, 9").expect("valid input");
    let err = session.load_text("8, 101").expect_err("out of range");
    assert!(matches!(
        err,
        SessionError::Validation(ValidationError::Range { value: 101 })
    ));
    assert_eq!(session.sequence().as_slice(), &[8, 9]);
}

#[test]
fn pause_keeps_cursors_and_resume_continues() {
    let mut session = VisualizerSession::default();
    session.load_text("3, 1, 2").expect("valid input");
    session.start().expect("start");
    session.tick();
    session.tick();

    session.pause();
    let paused = session.snapshot();
    assert_eq!(session.tick(), None);
    assert_eq!(session.snapshot(), paused);
    assert_eq!(session.status(), PAUSED_STATUS);

    session.start().expect("resume");
    assert_eq!(session.run_state(), RunState::Running);
    let resumed = session.tick().expect("running");
    assert_eq!(resumed.last(), Some(StepResult::Placed { index: 0, key: 1 }));
}

#[test]
fn status_reports_sorting_whenever_a_run_goes_live() {
    let mut session = VisualizerSession::default();
    session.load_text("2, 1").expect("valid input");
    assert_eq!(session.status(), LOADED_STATUS);

    session.start().expect("start");
    assert_eq!(session.status(), RUNNING_STATUS);

    session.pause();
    assert_eq!(session.status(), PAUSED_STATUS);
    session.start().expect("resume");
    assert_eq!(session.status(), RUNNING_STATUS);

    run_to_completion(&mut session);
    assert_ne!(session.status(), RUNNING_STATUS);
    session.start().expect("restart");
    assert_eq!(session.status(), RUNNING_STATUS);
}

#[test]
fn start_without_numbers_is_rejected() {
    let mut session = VisualizerSession::default();
    assert!(matches!(session.start(), Err(SessionError::NothingToSort)));
    assert_eq!(session.run_state(), RunState::Idle);
}

#[test]
fn restart_after_completion_runs_over_sorted_values() {
    let mut session = VisualizerSession::default();
    session.load_text("2, 1").expect("valid input");
    session.start().expect("start");
    run_to_completion(&mut session);

    session.start().expect("restart");
    let outcomes = run_to_completion(&mut session);
    assert_eq!(outcomes.len(), 3, "select, place, complete");
    assert_eq!(session.sequence().as_slice(), &[1, 2]);
}

#[test]
fn reset_clears_everything() {
    let mut session = VisualizerSession::default();
    session.load_text("6, 5").expect("valid input");
    session.start().expect("start");
    session.tick();

    session.reset();

    assert_eq!(session.run_state(), RunState::Idle);
    assert!(session.sequence().is_empty());
    let snapshot = session.snapshot();
    assert_eq!((snapshot.outer_index, snapshot.inner_index), (-1, -1));
    assert_eq!(snapshot.last_step, None);
    assert_eq!(session.status(), READY_STATUS);
}

#[test]
fn randomize_sets_status_and_idle_snapshot() {
    let mut session = VisualizerSession::default();
    let mut rng = StdRng::seed_from_u64(11);
    let len = session.randomize(&mut rng).expect("idle").len();

    assert_eq!(session.status(), RANDOM_STATUS);
    let snapshot = session.snapshot();
    assert_eq!(snapshot.values.len(), len);
    assert!(snapshot.roles().iter().all(|r| *r == BarRole::Unsorted));
}

#[test]
fn completed_snapshot_renders_sorted() {
    let mut session = VisualizerSession::default();
    session.load_text("3, 2, 1").expect("valid input");
    session.start().expect("start");
    run_to_completion(&mut session);

    let snapshot = session.snapshot();
    assert!(snapshot.finished);
    assert!(snapshot.roles().iter().all(|r| *r == BarRole::Sorted));
}

#[test]
fn granularity_parses_case_insensitively() {
    assert_eq!("Merged".parse::<TickGranularity>(), Ok(TickGranularity::Merged));
    assert_eq!(" fine ".parse::<TickGranularity>(), Ok(TickGranularity::Fine));
    assert!("fast".parse::<TickGranularity>().is_err());
}
