use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context};
use serde::Deserialize;
use shared::domain::SpeedLevel;

use crate::TickGranularity;

pub const DEFAULT_SETTINGS_FILE: &str = "visualizer.toml";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Settings {
    pub speed_level: SpeedLevel,
    pub granularity: TickGranularity,
    /// Fixed seed for random sequences; a fresh one is drawn per run when unset.
    pub seed: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    speed_level: Option<u8>,
    granularity: Option<TickGranularity>,
    seed: Option<u64>,
}

/// Defaults, then the TOML file, then `APP__*` environment variables.
///
/// Without an explicit `path` a missing `visualizer.toml` is not an error.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    let (file, required) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_SETTINGS_FILE), false),
    };

    match fs::read_to_string(&file) {
        Ok(raw) => apply_file(&mut settings, &raw)
            .with_context(|| format!("invalid settings file '{}'", file.display()))?,
        Err(err) if err.kind() == ErrorKind::NotFound && !required => {}
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read settings file '{}'", file.display()))
        }
    }

    apply_env(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

fn apply_file(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg: FileSettings = toml::from_str(raw)?;

    if let Some(level) = file_cfg.speed_level {
        let Some(level) = SpeedLevel::new(level) else {
            bail!(
                "speed_level {level} is outside {}..={}",
                SpeedLevel::MIN,
                SpeedLevel::MAX
            );
        };
        settings.speed_level = level;
    }
    if let Some(granularity) = file_cfg.granularity {
        settings.granularity = granularity;
    }
    if file_cfg.seed.is_some() {
        settings.seed = file_cfg.seed;
    }
    Ok(())
}

fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("APP__SPEED_LEVEL") {
        match v.trim().parse::<u8>().ok().and_then(SpeedLevel::new) {
            Some(level) => settings.speed_level = level,
            None => tracing::warn!(value = %v, "ignoring invalid APP__SPEED_LEVEL"),
        }
    }

    if let Some(v) = lookup("APP__GRANULARITY") {
        match v.parse::<TickGranularity>() {
            Ok(granularity) => settings.granularity = granularity,
            Err(err) => tracing::warn!(%err, "ignoring invalid APP__GRANULARITY"),
        }
    }

    if let Some(v) = lookup("APP__SEED") {
        match v.trim().parse::<u64>() {
            Ok(seed) => settings.seed = Some(seed),
            Err(err) => tracing::warn!(value = %v, %err, "ignoring invalid APP__SEED"),
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
