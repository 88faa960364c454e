//! Base trait for UI state in the MVI layer.

/// Marker trait for UI state objects.
///
/// States are immutable snapshots: cloned to build the next state, compared
/// with `PartialEq` to detect changes, and self-contained enough to render
/// the view from.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
