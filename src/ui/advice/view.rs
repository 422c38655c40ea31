//! Rendering for the advice widget.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, BUTTON_DISABLED, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR,
};

use super::state::{DisplayState, Phase};

pub const BUTTON_LABEL: &str = "Get Some Gouda Advice";

/// Spinner animation frames.
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Render the advice text, the spinner (while loading) and the button.
pub fn render_advice(frame: &mut Frame, area: Rect, state: &DisplayState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let text_style = match state.phase() {
        Phase::Error(_) | Phase::Unavailable(_) => Style::default().fg(STATUS_ERROR),
        Phase::Loading => Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        _ => Style::default().fg(HEADER_TEXT),
    };
    let text = Paragraph::new(Line::from(Span::styled(state.text(), text_style)))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(text, rows[0]);

    if state.spinner_visible() {
        let spinner = SPINNER_FRAMES[(state.spinner_tick() as usize) % SPINNER_FRAMES.len()];
        let line = Line::from(Span::styled(spinner, Style::default().fg(ACCENT)));
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), rows[1]);
    }

    frame.render_widget(button(state.button_enabled()), rows[3]);
}

fn button(enabled: bool) -> Paragraph<'static> {
    let style = if enabled {
        Style::default()
            .fg(ACCENT)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(BUTTON_DISABLED)
            .add_modifier(Modifier::DIM)
    };
    Paragraph::new(Line::from(Span::styled(format!("[ {} ]", BUTTON_LABEL), style)))
        .alignment(Alignment::Center)
}
