use super::*;

use shared::domain::SpeedLevel;
use tokio::time::sleep;

use crate::{RunState, TickGranularity};

fn running_session(text: &str, level: u8) -> VisualizerSession {
    let mut session =
        VisualizerSession::new(SpeedLevel::new(level).expect("level"), TickGranularity::Fine);
    session.load_text(text).expect("valid input");
    session.start().expect("start");
    session
}

#[test]
fn clock_is_due_one_delay_after_arming() {
    let delay = Duration::from_millis(600);
    let start = Instant::now();
    let mut clock = TickClock::new();
    assert!(!clock.poll(start + delay, delay), "unarmed clock never fires");

    clock.arm(start);
    assert!(!clock.poll(start + Duration::from_millis(599), delay));
    assert_eq!(
        clock.time_until_next(start + Duration::from_millis(200), delay),
        Some(Duration::from_millis(400))
    );
    assert!(clock.poll(start + delay, delay));
    assert!(!clock.poll(start + delay, delay), "countdown restarts after a tick");
    assert!(clock.poll(start + delay * 2, delay));

    clock.disarm();
    assert!(!clock.is_armed());
    assert_eq!(clock.time_until_next(start, delay), None);
}

#[tokio::test(start_paused = true)]
async fn ticker_runs_to_completion_at_configured_speed() {
    let mut session = running_session("5, 3, 4, 1, 2", 10);
    let (_shutdown_tx, shutdown_rx) = broadcast::channel(1);
    let started = tokio::time::Instant::now();

    let mut statuses = Vec::new();
    let ticks = run_ticker(&mut session, shutdown_rx, |_, session| {
        statuses.push(session.status().to_string());
    })
    .await;

    assert_eq!(ticks, 17);
    assert_eq!(session.run_state(), RunState::Completed);
    assert_eq!(session.sequence().as_slice(), &[1, 2, 3, 4, 5]);
    assert_eq!(statuses.last().map(String::as_str), Some("Sorting completed!"));
    assert_eq!(started.elapsed(), Duration::from_millis(1700));
}

#[tokio::test(start_paused = true)]
async fn shutdown_pauses_between_ticks() {
    let mut session = running_session("9, 8, 7, 6", 10);
    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    tokio::spawn(async move {
        sleep(Duration::from_millis(350)).await;
        let _ = shutdown_tx.send(());
    });

    let ticks = run_ticker(&mut session, shutdown_rx, |_, _| {}).await;

    assert_eq!(ticks, 3);
    assert_eq!(session.run_state(), RunState::Paused);

    session.start().expect("resume");
    let (_shutdown_tx, shutdown_rx) = broadcast::channel(1);
    run_ticker(&mut session, shutdown_rx, |_, _| {}).await;
    assert_eq!(session.sequence().as_slice(), &[6, 7, 8, 9]);
}

#[tokio::test(start_paused = true)]
async fn ticker_returns_immediately_when_not_running() {
    let mut session = VisualizerSession::default();
    let (_shutdown_tx, shutdown_rx) = broadcast::channel(1);
    let ticks = run_ticker(&mut session, shutdown_rx, |_, _| {}).await;
    assert_eq!(ticks, 0);
}
