//! Base traits for screen state and mutations.

/// Marker trait for screen state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
pub trait UiState: Clone + PartialEq + Send + 'static {}

/// Marker trait for atomic state transitions.
///
/// Mutations are produced by effects (or external sources) and are the
/// only thing a reducer accepts.
pub trait Mutation: Send + 'static {}
