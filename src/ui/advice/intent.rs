//! Intents for the advice widget.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum AdviceIntent {
    /// The draw took the joke path; `text` is already attributed.
    JokeShown { text: String },

    /// A fetch was issued.
    FetchStarted,

    /// The fetch resolved; `text` is cheeseified and attributed.
    FetchSucceeded { text: String },

    /// Transport or malformed-response failure.
    FetchFailed,

    /// The provider returned an empty collection.
    DatasetEmpty,

    /// Spinner animation frame.
    SpinnerTick,
}

impl Intent for AdviceIntent {}
