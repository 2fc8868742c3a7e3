use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::state::AppState;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    frame.render_widget(Clear, area);

    let block = Block::default().borders(Borders::ALL).title("Change city");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::vertical([Constraint::Length(2), Constraint::Length(1)]).split(inner);

    render_input_line(frame, chunks[0], state);
    render_status_line(frame, chunks[1]);
}

fn render_input_line(frame: &mut Frame, area: Rect, state: &AppState) {
    let (text, style) = if state.city_input.is_empty() {
        (
            "Type a city name".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (
            state.city_input.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )
    };

    let input = Paragraph::new(vec![Line::from(vec![
        Span::styled("City: ", Style::default().fg(Color::DarkGray)),
        Span::styled(text, style),
    ])])
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(input, area);
}

fn render_status_line(frame: &mut Frame, area: Rect) {
    let status = Paragraph::new("Enter confirm · Esc cancel")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status, area);
}
