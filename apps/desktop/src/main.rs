use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use session::{load_settings, run_ticker, RunState, TickGranularity, TickOutcome, VisualizerSession};
use shared::{
    domain::SpeedLevel,
    protocol::{SortSnapshot, StepResult},
};
use tokio::sync::broadcast;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Run the insertion sort animation in the terminal")]
struct Args {
    /// Comma separated values, each in 1..=100. Random values are used when omitted.
    #[arg(long, conflicts_with = "random")]
    numbers: Option<String>,
    /// Draw 10 to 15 random values; the default when --numbers is absent.
    #[arg(long)]
    random: bool,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
    speed: Option<u8>,
    #[arg(long)]
    granularity: Option<TickGranularity>,
    #[arg(long)]
    config: Option<PathBuf>,
    /// Emit one JSON object per tick instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum InputSource<'a> {
    Text(&'a str),
    Random,
}

impl Args {
    fn input_source(&self) -> InputSource<'_> {
        match (&self.numbers, self.random) {
            (Some(numbers), false) => InputSource::Text(numbers),
            _ => InputSource::Random,
        }
    }
}

#[derive(Serialize)]
struct TickLine<'a> {
    tick: usize,
    steps: &'a [StepResult],
    snapshot: SortSnapshot,
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings(args.config.as_deref()).context("failed to load settings")?;
    if let Some(level) = args.speed {
        settings.speed_level = SpeedLevel::clamped(level);
    }
    if let Some(granularity) = args.granularity {
        settings.granularity = granularity;
    }
    if args.seed.is_some() {
        settings.seed = args.seed;
    }

    let mut session = VisualizerSession::from_settings(&settings);
    match args.input_source() {
        InputSource::Text(numbers) => {
            session.load_text(numbers).context("rejected --numbers")?;
        }
        InputSource::Random => {
            let mut rng = match settings.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_rng(&mut rand::rng()),
            };
            session.randomize(&mut rng)?;
        }
    }

    if !args.json {
        println!("input: {}", session.sequence());
    }
    session.start()?;

    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_tx.send(());
        }
    });

    let mut tick = 0;
    let json = args.json;
    let ticks = run_ticker(&mut session, shutdown_rx, |outcome, session| {
        tick += 1;
        print_tick(tick, outcome, session, json);
    })
    .await;

    match session.run_state() {
        RunState::Completed => tracing::info!(ticks, "sorted: {}", session.sequence()),
        state => tracing::info!(ticks, ?state, "stopped before completion"),
    }
    Ok(())
}

fn print_tick(tick: usize, outcome: &TickOutcome, session: &VisualizerSession, json: bool) {
    let snapshot = session.snapshot();
    if json {
        let line = TickLine {
            tick,
            steps: &outcome.steps,
            snapshot,
        };
        match serde_json::to_string(&line) {
            Ok(text) => println!("{text}"),
            Err(err) => tracing::warn!(%err, tick, "failed to encode tick"),
        }
    } else {
        println!("{:>3}  {:<45} {}", tick, session.status(), render_row(&snapshot));
    }
}

/// One cell per value, suffixed with the symbol of its bar role.
fn render_row(snapshot: &SortSnapshot) -> String {
    snapshot
        .values
        .iter()
        .enumerate()
        .map(|(i, value)| format!("{value}{}", snapshot.role_at(i).symbol()))
        .collect::<Vec<_>>()
        .join(" ")
}
