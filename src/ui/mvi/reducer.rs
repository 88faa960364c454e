//! Reducer trait: the single place state transitions happen.

use super::intent::Intent;
use super::state::UiState;

/// Transforms state in response to intents.
///
/// `reduce` must be a pure function `(State, Intent) -> State` with no side
/// effects; everything the view shows is derivable from the returned state.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
