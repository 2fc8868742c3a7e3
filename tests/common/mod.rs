#![allow(dead_code)]

use chrono::{NaiveDate, Utc};
use clap::Parser;
use weather_tile::{
    app::state::{AppMode, AppState},
    cli::Cli,
    domain::weather::Observation,
};

pub fn tile_cli(extra: &[&str]) -> Cli {
    let mut args = vec!["weather-tile", "London", "--no-persist"];
    args.extend_from_slice(extra);
    Cli::parse_from(args)
}

pub fn fixture_observation(code: i32, is_day: bool, country: &str) -> Observation {
    Observation {
        city: "London".to_string(),
        country: country.to_string(),
        condition_text: "Partly cloudy".to_string(),
        condition_code: code,
        is_day,
        temp_c: 14.0,
        temp_f: 57.2,
        local_time: NaiveDate::from_ymd_opt(2026, 11, 26)
            .unwrap()
            .and_hms_opt(9, 5, 0),
        latitude: Some(51.52),
        longitude: Some(-0.11),
        fetched_at: Utc::now(),
    }
}

pub fn ready_state(cli: &Cli, observation: Observation) -> AppState {
    let mut state = AppState::new(cli);
    state.apply_observation(observation);
    state.mode = AppMode::Ready;
    state
}

pub fn weatherapi_payload(
    code: i32,
    is_day: bool,
    country: &str,
    temp_c: f64,
    temp_f: f64,
    city: &str,
) -> serde_json::Value {
    serde_json::json!({
        "location": {
            "name": city,
            "country": country,
            "lat": 51.52,
            "lon": -0.11,
            "localtime": "2026-11-26 9:05"
        },
        "current": {
            "temp_c": temp_c,
            "temp_f": temp_f,
            "is_day": if is_day { 1 } else { 0 },
            "condition": { "text": "Partly cloudy", "code": code }
        }
    })
}
