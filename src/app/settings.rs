use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{
    cli::{Cli, MinutesArg, UnitsArg},
    domain::{clock::MinuteStyle, weather::Units},
};

/// Choices that survive restarts: the committed city override, a pinned unit
/// and the minute policy. `None` means "decide from the data".
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RuntimeSettings {
    pub city: Option<String>,
    pub units: Option<Units>,
    pub minute_style: MinuteStyle,
}

impl RuntimeSettings {
    #[must_use]
    pub fn from_cli_defaults(cli: &Cli) -> Self {
        Self {
            city: cli.city.clone(),
            units: pinned_units(cli),
            minute_style: cli.minute_style(),
        }
    }
}

#[must_use]
pub fn pinned_units(cli: &Cli) -> Option<Units> {
    match cli.units {
        UnitsArg::Auto => None,
        UnitsArg::Celsius => Some(Units::Celsius),
        UnitsArg::Fahrenheit => Some(Units::Fahrenheit),
    }
}

pub fn load_runtime_settings(cli: &Cli, enable_disk: bool) -> (RuntimeSettings, Option<PathBuf>) {
    let mut settings = RuntimeSettings::from_cli_defaults(cli);
    if !enable_disk {
        return (settings, None);
    }

    let Some(path) = settings_path() else {
        return (settings, None);
    };

    if let Ok(content) = fs::read_to_string(&path)
        && let Ok(saved) = serde_json::from_str::<RuntimeSettings>(&content)
    {
        settings = saved;
    }

    // Explicit CLI values win over whatever was saved.
    if cli.city.is_some() {
        settings.city = cli.city.clone();
    }
    if cli.units != UnitsArg::Auto {
        settings.units = pinned_units(cli);
    }
    if cli.minutes != MinutesArg::Always {
        settings.minute_style = cli.minute_style();
    }

    (settings, Some(path))
}

pub fn save_runtime_settings(path: &Path, settings: &RuntimeSettings) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("creating settings directory failed")?;
    }
    let payload =
        serde_json::to_string_pretty(settings).context("serializing settings payload failed")?;
    fs::write(path, payload).context("writing settings file failed")
}

fn config_dir() -> Option<PathBuf> {
    if let Some(base) = std::env::var_os("WEATHER_TILE_CONFIG_DIR") {
        return Some(PathBuf::from(base));
    }

    let home = std::env::var_os("HOME")?;
    Some(PathBuf::from(home).join(".config").join("weather-tile"))
}

fn settings_path() -> Option<PathBuf> {
    Some(config_dir()?.join("settings.json"))
}

#[must_use]
pub fn log_file_path() -> Option<PathBuf> {
    Some(config_dir()?.join("weather-tile.log"))
}
