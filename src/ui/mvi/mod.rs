//! Model-View-Intent primitives for the widget.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────── controller ←── key ──┘
//! ```
//!
//! - **State**: everything the renderer needs, nothing else
//! - **Intent**: a trigger outcome or a fetch completion
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
