//! Reducer for the advice widget.

use crate::ui::mvi::Reducer;

use super::intent::AdviceIntent;
use super::state::{DisplayState, Phase, FAILURE_MESSAGE, UNAVAILABLE_MESSAGE};

pub struct AdviceReducer;

impl Reducer for AdviceReducer {
    type State = DisplayState;
    type Intent = AdviceIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Trigger outcomes only apply where the button is enabled.
            AdviceIntent::JokeShown { text } if state.button_enabled() => {
                DisplayState::with_phase(Phase::Shown(text))
            }
            AdviceIntent::FetchStarted if state.button_enabled() => {
                DisplayState::with_phase(Phase::Loading)
            }

            // Completions only apply to an in-flight fetch.
            AdviceIntent::FetchSucceeded { text } if state.is_loading() => {
                DisplayState::with_phase(Phase::Shown(text))
            }
            AdviceIntent::FetchFailed if state.is_loading() => {
                DisplayState::with_phase(Phase::Error(FAILURE_MESSAGE.to_string()))
            }
            AdviceIntent::DatasetEmpty if state.is_loading() => {
                DisplayState::with_phase(Phase::Unavailable(UNAVAILABLE_MESSAGE.to_string()))
            }

            AdviceIntent::SpinnerTick if state.is_loading() => state.advance_spinner(),

            _ => state,
        }
    }
}
