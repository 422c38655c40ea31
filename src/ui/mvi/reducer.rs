//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The single place state transitions happen.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Must be pure: no I/O, no randomness, no logging.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
