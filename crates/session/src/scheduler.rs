//! Tick scheduling for the session: a pure clock for frame-driven renderers
//! and an async interval loop for headless runs.

use std::time::{Duration, Instant};

use tokio::{
    sync::broadcast,
    time::{interval, MissedTickBehavior},
};

use crate::{TickOutcome, VisualizerSession};

/// Decides when a tick is due inside a frame loop.
#[derive(Debug, Default, Clone, Copy)]
pub struct TickClock {
    last_tick: Option<Instant>,
}

impl TickClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts counting; the first tick is due one `delay` after `now`.
    pub fn arm(&mut self, now: Instant) {
        self.last_tick = Some(now);
    }

    pub fn disarm(&mut self) {
        self.last_tick = None;
    }

    pub fn is_armed(&self) -> bool {
        self.last_tick.is_some()
    }

    /// Returns true and restarts the countdown when a tick is due.
    pub fn poll(&mut self, now: Instant, delay: Duration) -> bool {
        match self.last_tick {
            Some(last) if now.saturating_duration_since(last) >= delay => {
                self.last_tick = Some(now);
                true
            }
            _ => false,
        }
    }

    pub fn time_until_next(&self, now: Instant, delay: Duration) -> Option<Duration> {
        self.last_tick
            .map(|last| delay.saturating_sub(now.saturating_duration_since(last)))
    }
}

/// Ticks `session` at its speed until the run completes, the session stops
/// running, or `shutdown` fires. A shutdown pauses the run so it can be
/// resumed later. Returns the number of ticks performed.
///
/// A closed shutdown channel counts as a shutdown.
pub async fn run_ticker<F>(
    session: &mut VisualizerSession,
    mut shutdown: broadcast::Receiver<()>,
    mut observer: F,
) -> usize
where
    F: FnMut(&TickOutcome, &VisualizerSession),
{
    let mut interval = interval(session.speed().delay());
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick resolves immediately; the first step waits one delay.
    interval.tick().await;

    let mut ticks = 0;
    loop {
        tokio::select! {
            _ = interval.tick() => {
                let Some(outcome) = session.tick() else {
                    break;
                };
                ticks += 1;
                observer(&outcome, session);
                if outcome.is_completed() {
                    break;
                }
            }
            _ = shutdown.recv() => {
                session.pause();
                tracing::debug!(ticks, "ticker shut down");
                break;
            }
        }
    }
    ticks
}

#[cfg(test)]
#[path = "tests/scheduler_tests.rs"]
mod tests;
