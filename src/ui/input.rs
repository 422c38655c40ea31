use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Action to take after processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    /// Press the advice button.
    Trigger,
    Quit,
}

pub fn handle_key(key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => InputAction::Quit,
            _ => InputAction::None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => InputAction::Quit,
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('g') => InputAction::Trigger,
        _ => InputAction::None,
    }
}
