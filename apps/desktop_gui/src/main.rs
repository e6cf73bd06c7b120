use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use session::{load_settings, TickGranularity};
use shared::domain::SpeedLevel;
use tracing_subscriber::EnvFilter;

mod controller;
mod ui;

use ui::{app::PersistedVisualizerSettings, StartupConfig, VisualizerApp};

const WINDOW_TITLE: &str = "Insertion Sort Visualizer";

#[derive(Parser, Debug)]
#[command(about = "Animate insertion sort over a small sequence of numbers")]
struct Args {
    /// Comma separated values to preload, each in 1..=100.
    #[arg(long)]
    numbers: Option<String>,
    /// Animation speed from 1 (slowest) to 10 (fastest).
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
    speed: Option<u8>,
    /// `fine` (one operation per tick) or `merged`.
    #[arg(long)]
    granularity: Option<TickGranularity>,
    #[arg(long)]
    seed: Option<u64>,
    /// Settings file; defaults to ./visualizer.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let mut settings = load_settings(args.config.as_deref()).context("failed to load settings")?;
    let speed_from_cli = args.speed.is_some();
    if let Some(level) = args.speed {
        settings.speed_level = SpeedLevel::clamped(level);
    }
    if let Some(granularity) = args.granularity {
        settings.granularity = granularity;
    }
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    tracing::info!(?settings, "starting visualizer");

    let startup = StartupConfig {
        numbers: args.numbers,
        settings,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            // An explicit --speed wins over the level remembered from last time.
            let persisted = cc
                .storage
                .filter(|_| !speed_from_cli)
                .and_then(|storage| storage.get_string(ui::app::SETTINGS_STORAGE_KEY))
                .and_then(|text| serde_json::from_str::<PersistedVisualizerSettings>(&text).ok());
            Ok(Box::new(VisualizerApp::new(startup, persisted)))
        }),
    )
    .map_err(|err| anyhow::anyhow!("visualizer window failed: {err}"))
}
