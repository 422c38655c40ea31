//! Marker trait for intents.

/// Something that happened to the widget: a joke was drawn, a fetch
/// started, a fetch resolved, a spinner frame elapsed.
pub trait Intent: Send + 'static {}
