//! Base traits for intents and side-channel events.

use crate::error::ServiceError;

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (button taps, pull to refresh, form edits)
/// - System events (a store edited on another screen, a filter change)
///
/// Intents are turned into effects by a [`Reactor`](super::Reactor).
pub trait Intent: Send + 'static {}

/// One-shot signal delivered to currently subscribed observers only.
///
/// Navigation requests, toasts and alerts live here instead of in the
/// state, so a late subscriber never sees them again.
pub trait SideChannel: Clone + Send + 'static {
    /// Name of the channel this event is published on.
    fn channel(&self) -> &'static str;

    /// The failure carried by an `error` event.
    fn error(&self) -> Option<&ServiceError> {
        None
    }
}
