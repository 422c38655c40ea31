//! The advice widget: one trigger, one text area, one spinner.
//!
//! - `state.rs` - display phases and derived flags
//! - `intent.rs` - trigger and fetch outcomes
//! - `reducer.rs` - state transitions
//! - `view.rs` - rendering

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::AdviceIntent;
pub use reducer::AdviceReducer;
pub use state::{
    DisplayState, Phase, FAILURE_MESSAGE, INSTRUCTION_TEXT, LOADING_TEXT, UNAVAILABLE_MESSAGE,
};
pub use view::{render_advice, BUTTON_LABEL, SPINNER_FRAMES};
