//! Primitives for the unidirectional state flow used by the UI features.
//!
//! Every feature keeps its state in a plain value that is only replaced by
//! running a reducer over an intent: user keys and API outcomes become
//! intents, the reducer returns the next state, the view renders it. Side
//! effects (network calls, toasts) are decided by the caller from the
//! states before and after.

/// Marker trait for feature state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents: user actions and system events.
pub trait Intent: Send + 'static {}

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> State.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
