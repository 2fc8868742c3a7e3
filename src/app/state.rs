use std::path::PathBuf;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use tokio::sync::mpsc;

use crate::{
    app::{
        events::{AppEvent, start_clock_task, start_refresh_task},
        settings::{RuntimeSettings, load_runtime_settings, save_runtime_settings},
    },
    cli::Cli,
    data::{
        ProviderError, icons::AssetChain, time_api::TimeClient, weather_api::WeatherClient,
    },
    domain::{
        clock::{DisplayClock, MinuteStyle},
        weather::{DEFAULT_ICON, Observation, Units, icon_file},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Loading,
    Ready,
    EditingCity,
    Quit,
}

/// All mutable display state. Updated only through the event transitions in
/// `handle_event`; the renderer reads it and never writes.
#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    pub city: String,
    pub observation: Option<Observation>,
    pub icon: &'static str,
    pub icon_assets: AssetChain,
    pub clock: DisplayClock,
    pub units: Units,
    pub units_pinned: bool,
    pub minute_style: MinuteStyle,
    pub fetch_in_flight: bool,
    pub fetch_seq: u64,
    pub city_input: String,
    pub settings: RuntimeSettings,
    settings_path: Option<PathBuf>,
}

impl AppState {
    pub fn new(cli: &Cli) -> Self {
        let (settings, settings_path) =
            load_runtime_settings(cli, !cli.no_persist && !cli.one_shot);
        let city = settings.city.clone().unwrap_or_else(|| cli.default_city());
        let units = settings.units.unwrap_or(Units::Celsius);
        let units_pinned = settings.units.is_some();

        Self {
            mode: AppMode::Loading,
            running: true,
            city,
            observation: None,
            icon: DEFAULT_ICON,
            icon_assets: AssetChain::resolve(DEFAULT_ICON),
            clock: DisplayClock::now_local(),
            units,
            units_pinned,
            minute_style: settings.minute_style,
            fetch_in_flight: false,
            fetch_seq: 0,
            city_input: String::new(),
            settings,
            settings_path,
        }
    }

    pub async fn handle_event(
        &mut self,
        event: AppEvent,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        match event {
            AppEvent::Bootstrap => {
                start_clock_task(tx.clone());
                start_refresh_task(tx.clone(), cli.refresh_interval);
                self.start_fetch(tx, cli).await?;
            }
            AppEvent::TickClock => {
                // Paused while a fetch is in flight so a fresh remote time is
                // never advanced past itself on arrival.
                if !self.fetch_in_flight {
                    self.clock.tick();
                }
            }
            AppEvent::TickRefresh => self.start_fetch(tx, cli).await?,
            AppEvent::FetchStarted => self.fetch_in_flight = true,
            AppEvent::FetchCompleted { seq, outcome } => self.finish_fetch(seq, outcome),
            AppEvent::Input(event) => self.handle_input(event, tx, cli).await?,
            AppEvent::Quit => self.mode = AppMode::Quit,
        }

        Ok(())
    }

    fn finish_fetch(&mut self, seq: u64, outcome: Result<Observation, ProviderError>) {
        if seq != self.fetch_seq {
            // A newer request has been issued since; drop the late arrival.
            return;
        }
        self.fetch_in_flight = false;

        let observation = match outcome {
            Ok(observation) => observation,
            Err(err) => {
                tracing::warn!(city = %self.city, error = %err, "fetch failed, rendering fallback");
                Observation::fallback(&self.city)
            }
        };
        self.apply_observation(observation);

        if self.mode != AppMode::EditingCity {
            self.mode = AppMode::Ready;
        }
    }

    /// The fetch-success transition (fetch-failure routes through here with
    /// the fallback observation).
    pub fn apply_observation(&mut self, observation: Observation) {
        self.icon = icon_file(observation.condition_code, observation.is_day);
        self.icon_assets = AssetChain::resolve(self.icon);
        self.clock.reseed(observation.local_time);
        if !self.units_pinned {
            self.units = observation.default_units();
        }
        self.observation = Some(observation);
    }

    async fn handle_input(
        &mut self,
        event: Event,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        let Event::Key(key) = event else {
            return Ok(());
        };
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        if self.mode == AppMode::EditingCity {
            match key.code {
                KeyCode::Esc => self.close_city_popup(),
                KeyCode::Enter => self.commit_city_override(tx, cli).await?,
                KeyCode::Backspace => {
                    self.city_input.pop();
                }
                KeyCode::Char(c) => self.city_input.push(c),
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => tx.send(AppEvent::Quit).await?,
            KeyCode::Char('r') => self.start_fetch(tx, cli).await?,
            KeyCode::Char('f') => self.set_units(Units::Fahrenheit),
            KeyCode::Char('c') => self.set_units(Units::Celsius),
            KeyCode::Char('s') if cli.allow_city_change => {
                self.city_input.clear();
                self.mode = AppMode::EditingCity;
            }
            _ => {}
        }

        Ok(())
    }

    fn set_units(&mut self, units: Units) {
        self.units = units;
        self.units_pinned = true;
        self.settings.units = Some(units);
        self.persist_settings();
    }

    fn close_city_popup(&mut self) {
        self.city_input.clear();
        self.mode = if self.observation.is_some() {
            AppMode::Ready
        } else {
            AppMode::Loading
        };
    }

    async fn commit_city_override(
        &mut self,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        let city = self.city_input.trim().to_string();
        self.close_city_popup();
        if city.is_empty() {
            return Ok(());
        }

        self.city = city.clone();
        self.settings.city = Some(city);
        self.persist_settings();
        self.start_fetch(tx, cli).await
    }

    fn persist_settings(&self) {
        if let Some(path) = &self.settings_path
            && let Err(err) = save_runtime_settings(path, &self.settings)
        {
            tracing::warn!(error = %err, "failed to persist settings");
        }
    }

    async fn start_fetch(&mut self, tx: &mpsc::Sender<AppEvent>, cli: &Cli) -> Result<()> {
        self.fetch_seq += 1;
        let seq = self.fetch_seq;
        tx.send(AppEvent::FetchStarted).await?;

        let weather = weather_client(cli);
        let time = (!cli.no_time_lookup).then(|| time_client(cli));
        let city = self.city.clone();
        let tx2 = tx.clone();
        tokio::spawn(async move {
            let outcome = fetch_observation(&weather, time.as_ref(), &city).await;
            let _ = tx2.send(AppEvent::FetchCompleted { seq, outcome }).await;
        });

        Ok(())
    }
}

#[must_use]
pub fn weather_client(cli: &Cli) -> WeatherClient {
    let api_key = std::env::var("WEATHER_API_KEY").unwrap_or_default();
    match &cli.weather_url {
        Some(url) => WeatherClient::with_base_url(url.clone(), api_key),
        None => WeatherClient::new(api_key),
    }
}

#[must_use]
pub fn time_client(cli: &Cli) -> TimeClient {
    match &cli.time_url {
        Some(url) => TimeClient::with_base_url(url.clone()),
        None => TimeClient::new(),
    }
}

/// Weather first; when the payload carries coordinates, the time endpoint
/// refines the reported local time. A time failure is not a fetch failure.
pub async fn fetch_observation(
    weather: &WeatherClient,
    time: Option<&TimeClient>,
    city: &str,
) -> Result<Observation, ProviderError> {
    let mut observation = weather.fetch_current(city).await?;

    if let (Some(time), Some((lat, lon))) = (time, observation.coords()) {
        match time.fetch_local_time(lat, lon).await {
            Ok(moment) => observation.local_time = Some(moment),
            Err(err) => {
                tracing::warn!(error = %err, "time lookup failed, keeping provider localtime");
            }
        }
    }

    Ok(observation)
}
