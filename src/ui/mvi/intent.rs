//! Base trait for intents in the MVI layer.

/// Marker trait for intent objects.
///
/// An intent is a discrete user action (key press) or system event,
/// processed by a reducer to produce the next state. Intents carry no
/// behavior of their own.
pub trait Intent: Send + 'static {}
