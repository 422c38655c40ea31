//! Display state for the advice widget.

use crate::ui::mvi::UiState;

pub const INSTRUCTION_TEXT: &str = "Click the button to get some grate advice.";
pub const LOADING_TEXT: &str = "Loading advice...";
pub const FAILURE_MESSAGE: &str = "Failed to load advice. Please try again later.";
pub const UNAVAILABLE_MESSAGE: &str = "There is no advice to give. Please come back later.";

/// Exactly one phase is active at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// Waiting for the first trigger.
    Idle(String),
    /// A fetch is in flight.
    Loading,
    /// Advice or a joke, ready to read.
    Shown(String),
    /// The last fetch failed; triggering again is allowed.
    Error(String),
    /// The provider has nothing to give. Terminal until reload.
    Unavailable(String),
}

/// What the renderer reads.
///
/// The button and spinner flags are derived from the phase, so
/// `spinner_visible() == is_loading()` and
/// `button_enabled() == !(Loading | Unavailable)` always hold.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    phase: Phase,
    /// Spinner frame counter, reset on every fetch.
    spinner_tick: u8,
}

impl UiState for DisplayState {}

impl Default for DisplayState {
    fn default() -> Self {
        Self::idle(INSTRUCTION_TEXT)
    }
}

impl DisplayState {
    pub fn idle(instruction: impl Into<String>) -> Self {
        Self::with_phase(Phase::Idle(instruction.into()))
    }

    pub(crate) fn with_phase(phase: Phase) -> Self {
        Self {
            phase,
            spinner_tick: 0,
        }
    }

    pub(crate) fn advance_spinner(self) -> Self {
        Self {
            spinner_tick: self.spinner_tick.wrapping_add(1),
            ..self
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Text for the advice area.
    pub fn text(&self) -> &str {
        match &self.phase {
            Phase::Idle(text)
            | Phase::Shown(text)
            | Phase::Error(text)
            | Phase::Unavailable(text) => text,
            Phase::Loading => LOADING_TEXT,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self.phase, Phase::Unavailable(_))
    }

    pub fn button_enabled(&self) -> bool {
        !self.is_loading() && !self.is_unavailable()
    }

    pub fn spinner_visible(&self) -> bool {
        self.is_loading()
    }

    pub fn spinner_tick(&self) -> u8 {
        self.spinner_tick
    }
}
