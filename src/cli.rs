use clap::{Parser, ValueEnum};

use crate::domain::clock::MinuteStyle;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum UnitsArg {
    Auto,
    Celsius,
    Fahrenheit,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum MinutesArg {
    Always,
    ElideZero,
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "weather-tile",
    version,
    about = "Single-city terminal weather tile with a live local clock"
)]
pub struct Cli {
    /// City name (default: London)
    pub city: Option<String>,

    /// Temperature unit; auto picks Fahrenheit for the United States
    #[arg(long, value_enum, default_value_t = UnitsArg::Auto)]
    pub units: UnitsArg,

    /// Minute rendering in the clock line
    #[arg(long, value_enum, default_value_t = MinutesArg::Always)]
    pub minutes: MinutesArg,

    /// Allow changing the city from inside the tile
    #[arg(long)]
    pub allow_city_change: bool,

    /// Refresh interval in seconds
    #[arg(long, default_value_t = 600)]
    pub refresh_interval: u64,

    /// Trust the weather payload's localtime; skip the secondary time lookup
    #[arg(long)]
    pub no_time_lookup: bool,

    /// Weather endpoint override
    #[arg(long, hide = true)]
    pub weather_url: Option<String>,

    /// Time endpoint override
    #[arg(long, hide = true)]
    pub time_url: Option<String>,

    /// Print one weather snapshot to stdout and exit (non-interactive)
    #[arg(long)]
    pub one_shot: bool,

    /// Do not load or save settings from disk
    #[arg(long)]
    pub no_persist: bool,
}

impl Cli {
    #[must_use]
    pub fn default_city(&self) -> String {
        self.city.clone().unwrap_or_else(|| "London".to_string())
    }

    #[must_use]
    pub fn minute_style(&self) -> MinuteStyle {
        match self.minutes {
            MinutesArg::Always => MinuteStyle::Always,
            MinutesArg::ElideZero => MinuteStyle::ElideZero,
        }
    }
}
