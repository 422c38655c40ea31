//! Marker trait for renderable state.

/// State objects are cloned into new values by reducers and compared to
/// skip redundant redraws.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
