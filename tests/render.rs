mod common;

use ratatui::{Terminal, backend::TestBackend};
use weather_tile::{
    app::state::{AppMode, AppState},
    cli::Cli,
    ui,
};

fn render_to_string(width: u16, height: u16, state: &AppState, cli: &Cli) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| ui::render(frame, state, cli))
        .expect("draw");

    let buffer = terminal.backend().buffer().clone();
    let mut lines = Vec::new();
    for y in 0..height {
        let mut line = String::new();
        for x in 0..width {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

#[test]
fn wide_tile_shows_condition_temperature_and_clock() {
    let cli = common::tile_cli(&[]);
    let state = common::ready_state(&cli, common::fixture_observation(1003, true, "United Kingdom"));

    let rendered = render_to_string(64, 8, &state, &cli);
    assert!(rendered.contains("London"), "got:\n{rendered}");
    assert!(rendered.contains("Partly cloudy"), "got:\n{rendered}");
    assert!(rendered.contains("14°C"), "got:\n{rendered}");
    assert!(rendered.contains("Nov 26th, 9:05am"), "got:\n{rendered}");
    assert!(rendered.contains("r refresh"), "got:\n{rendered}");
}

#[test]
fn city_change_hint_appears_only_when_enabled() {
    let cli = common::tile_cli(&[]);
    let state = common::ready_state(&cli, common::fixture_observation(1003, true, "United Kingdom"));
    let rendered = render_to_string(64, 8, &state, &cli);
    assert!(!rendered.contains("s city"), "got:\n{rendered}");

    let cli = common::tile_cli(&["--allow-city-change"]);
    let state = common::ready_state(&cli, common::fixture_observation(1003, true, "United Kingdom"));
    let rendered = render_to_string(64, 8, &state, &cli);
    assert!(rendered.contains("s city"), "got:\n{rendered}");
}

#[test]
fn narrow_tile_condenses_to_glyph_and_temperature() {
    let cli = common::tile_cli(&[]);
    let state = common::ready_state(&cli, common::fixture_observation(1003, true, "United Kingdom"));

    let rendered = render_to_string(26, 5, &state, &cli);
    assert!(rendered.contains("14°C"), "got:\n{rendered}");
    assert!(!rendered.contains("Nov"), "narrow layout drops the date, got:\n{rendered}");
    assert!(!rendered.contains("Partly cloudy"), "got:\n{rendered}");
}

#[test]
fn fahrenheit_rendering_for_us_observation() {
    let cli = common::tile_cli(&[]);
    let state = common::ready_state(
        &cli,
        common::fixture_observation(1003, true, "United States of America"),
    );

    let rendered = render_to_string(64, 8, &state, &cli);
    assert!(rendered.contains("57°F"), "got:\n{rendered}");
}

#[test]
fn loading_message_before_first_observation() {
    let cli = common::tile_cli(&[]);
    let state = AppState::new(&cli);

    let rendered = render_to_string(64, 8, &state, &cli);
    assert!(rendered.contains("Fetching weather"), "got:\n{rendered}");
}

#[test]
fn popup_overlays_the_tile_while_editing() {
    let cli = common::tile_cli(&["--allow-city-change"]);
    let mut state =
        common::ready_state(&cli, common::fixture_observation(1003, true, "United Kingdom"));
    state.mode = AppMode::EditingCity;
    state.city_input = "Par".to_string();

    let rendered = render_to_string(64, 12, &state, &cli);
    assert!(rendered.contains("Change city"), "got:\n{rendered}");
    assert!(rendered.contains("Par"), "got:\n{rendered}");
    assert!(rendered.contains("Enter confirm"), "got:\n{rendered}");
}

#[test]
fn tiny_terminal_shows_resize_warning() {
    let cli = common::tile_cli(&[]);
    let state = AppState::new(&cli);

    let rendered = render_to_string(14, 3, &state, &cli);
    assert!(rendered.contains("Resize"), "got:\n{rendered}");
}
