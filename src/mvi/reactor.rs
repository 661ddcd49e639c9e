//! Reactor trait: the per-screen specialization of a store.

use futures::stream::BoxStream;

use super::effect::Effect;
use super::intent::Intent;
use super::reducer::Reducer;

/// A stream of values coming from outside the store, usually the event bus.
pub type Source<T> = BoxStream<'static, T>;

/// Maps intents to effects on top of a [`Reducer`].
///
/// A reactor owns the injected collaborators (services, event bus) and is
/// the only place effects are created. Folding stays in the reducer, which
/// has no access to `self`.
pub trait Reactor: Reducer + Send + 'static {
    /// The intent type this reactor accepts.
    type Intent: Intent;

    /// Map an intent to the work it triggers.
    ///
    /// Runs on the store's owner task, so `state` is the latest folded
    /// state. Return [`Effect::none`] when a precondition fails.
    fn mutate(&self, intent: Self::Intent, state: &Self::State) -> Effect<Self::Mutation>;

    /// Supersession kind of an intent.
    ///
    /// A newer intent of the same kind cancels the older one's effect and
    /// discards its late mutations.
    fn effect_kind(_intent: &Self::Intent) -> Option<&'static str> {
        None
    }

    /// Intents derived from external sources, merged with dispatched ones.
    fn intent_sources(&self) -> Vec<Source<Self::Intent>> {
        Vec::new()
    }

    /// Mutations derived from external sources, merged before folding.
    fn mutation_sources(&self) -> Vec<Source<Self::Mutation>> {
        Vec::new()
    }
}
