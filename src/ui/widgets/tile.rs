use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::state::AppState,
    cli::Cli,
    domain::weather::{Observation, condition_glyph},
    ui::layout::{TileDensity, tile_density},
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, cli: &Cli) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(state.city.as_str());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(observation) = &state.observation else {
        frame.render_widget(Paragraph::new("Fetching weather..."), inner);
        return;
    };

    let lines = match tile_density(inner.width) {
        TileDensity::Wide => wide_lines(state, observation, cli),
        TileDensity::Medium => medium_lines(state, observation),
        TileDensity::Narrow => narrow_lines(state, observation),
    };
    frame.render_widget(Paragraph::new(lines), inner);
}

fn condition_line(observation: &Observation) -> Line<'static> {
    let glyph = condition_glyph(observation.condition_code, observation.is_day);
    Line::from(vec![
        Span::styled(format!("{glyph} "), Style::default().fg(Color::Yellow)),
        Span::styled(
            observation.condition_text.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ])
}

fn temp_text(state: &AppState, observation: &Observation) -> String {
    format!("{}{}", observation.temp(state.units), state.units.suffix())
}

fn wide_lines(state: &AppState, observation: &Observation, cli: &Cli) -> Vec<Line<'static>> {
    vec![
        condition_line(observation),
        Line::from(Span::styled(
            temp_text(state, observation),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(state.clock.formatted(state.minute_style)),
        Line::from(Span::styled(
            hint_text(cli),
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

fn medium_lines(state: &AppState, observation: &Observation) -> Vec<Line<'static>> {
    vec![
        condition_line(observation),
        Line::from(format!(
            "{}  {}",
            temp_text(state, observation),
            state.clock.formatted(state.minute_style)
        )),
    ]
}

fn narrow_lines(state: &AppState, observation: &Observation) -> Vec<Line<'static>> {
    let glyph = condition_glyph(observation.condition_code, observation.is_day);
    vec![Line::from(format!(
        "{glyph} {}",
        temp_text(state, observation)
    ))]
}

fn hint_text(cli: &Cli) -> String {
    let mut hints = String::from("r refresh · f/c units");
    if cli.allow_city_change {
        hints.push_str(" · s city");
    }
    hints.push_str(" · q quit");
    hints
}
