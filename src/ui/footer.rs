use crate::ui::advice::{DisplayState, Phase};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const ADVICE_HINT: &str = "Enter/Space: Get advice";
pub const QUIT_HINT: &str = "q: Quit";

/// Key hints on the left, phase and version on the right.
///
/// The advice hint is only offered while the button accepts a trigger.
pub struct Footer<'a> {
    state: &'a DisplayState,
}

impl<'a> Footer<'a> {
    pub fn new(state: &'a DisplayState) -> Self {
        Self { state }
    }

    pub fn hints(&self) -> Vec<&'static str> {
        if self.state.button_enabled() {
            vec![ADVICE_HINT, QUIT_HINT]
        } else {
            vec![QUIT_HINT]
        }
    }

    pub fn status(&self) -> &'static str {
        match self.state.phase() {
            Phase::Idle(_) => "ready",
            Phase::Loading => "fetching",
            Phase::Shown(_) => "served",
            Phase::Error(_) => "failed",
            Phase::Unavailable(_) => "out of advice",
        }
    }

    pub fn widget(&self, width: u16) -> Paragraph<'static> {
        let hints = format!(" {}", self.hints().join(" │ "));
        let status = format!("{} · v{} ", self.status(), VERSION);

        let content_width = width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints.chars().count())
            .saturating_sub(status.chars().count());

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        Paragraph::new(Line::from(vec![
            Span::styled(hints, text_style),
            Span::raw(" ".repeat(padding)),
            Span::styled(status, text_style),
        ]))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
