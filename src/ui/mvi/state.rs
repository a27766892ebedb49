//! Base trait for screen state.

/// Marker trait for screen state objects.
///
/// States are immutable values: reducers take the old state and return
/// a new one. `PartialEq` lets tests assert transitions directly, and
/// `Default` is the pre-mount state of every screen.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
