//! Reducer trait and the side-channel outbox it writes to.

use super::intent::SideChannel;
use super::state::{Mutation, UiState};

/// Reducer folds mutations into state.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Mutation) -> State. Side-channel
/// events raised by a mutation are written to the outbox and delivered by
/// the store once the new state is published.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The mutation type this reducer folds.
    type Mutation: Mutation;

    /// One-shot events this reducer may raise.
    type Event: SideChannel;

    /// Fold a mutation into the state and return the next state.
    fn reduce(
        state: Self::State,
        mutation: Self::Mutation,
        outbox: &mut Outbox<Self::Event>,
    ) -> Self::State;
}

/// Events raised during a single fold.
#[derive(Debug)]
pub struct Outbox<E> {
    events: Vec<E>,
}

impl<E> Outbox<E> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(&mut self, event: E) {
        self.events.push(event);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn into_events(self) -> Vec<E> {
        self.events
    }
}

impl<E> Default for Outbox<E> {
    fn default() -> Self {
        Self::new()
    }
}
