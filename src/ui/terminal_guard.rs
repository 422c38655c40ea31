use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Leaves raw mode and the alternate screen when dropped.
///
/// A panic hook restores the terminal too, so the panic message lands on
/// the normal screen. Restoring twice is harmless.
pub struct TerminalGuard {
    _private: (),
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore();
    }
}

pub fn setup_terminal() -> io::Result<(Tui, TerminalGuard)> {
    install_panic_hook();
    enable_raw_mode()?;
    // From here on the guard owns cleanup, even if a later step fails.
    let guard = TerminalGuard { _private: () };
    execute!(io::stdout(), EnterAlternateScreen, Hide)?;

    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    Ok((terminal, guard))
}

fn restore() {
    if let Err(err) = disable_raw_mode() {
        tracing::warn!(error = %err, "Failed to leave raw mode");
    }
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        tracing::warn!(error = %err, "Failed to leave alternate screen");
    }
}

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore();
        default_hook(info);
    }));
}
