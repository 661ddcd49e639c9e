//! The reactive state container.
//!
//! A [`Store`] owns one screen's state. Intents are queued to a single
//! owner task which maps them to effects, runs each effect as its own task
//! and folds the resulting mutations one at a time. Every fold is
//! published to state observers under one lock, so all observers see the
//! same sequence.

use std::collections::HashMap;
use std::sync::Arc;

use futures::StreamExt;
use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::task::{AbortHandle, JoinSet};
use uuid::Uuid;

use super::intent::SideChannel;
use super::reactor::Reactor;
use super::reducer::{Outbox, Reducer};
use super::subscription::{Subscribers, Subscription};
use crate::shutdown::ShutdownHandle;

/// Container behavior switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    /// Cancel the previous effect of the same kind when a new one starts.
    /// When false, late results of same-kind effects are folded as they
    /// arrive (last-resolved-wins).
    pub supersede_effects: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            supersede_effects: true,
        }
    }
}

enum Command<R: Reactor> {
    Dispatch(R::Intent),
    Apply {
        mutation: R::Mutation,
        ticket: Option<Ticket>,
    },
}

/// Identifies which generation of an effect kind produced a mutation.
#[derive(Debug, Clone, Copy)]
struct Ticket {
    kind: &'static str,
    generation: u64,
}

struct Published<R: Reactor> {
    current: R::State,
    states: Subscribers<R::State>,
    events: Subscribers<R::Event>,
    closed: bool,
}

impl<R: Reactor> Published<R> {
    fn close(&mut self) {
        self.closed = true;
        self.states.close();
        self.events.close();
    }
}

/// Reactive state container for one screen.
///
/// Dropping the store disposes it.
pub struct Store<R: Reactor> {
    id: Uuid,
    published: Arc<Mutex<Published<R>>>,
    commands: mpsc::UnboundedSender<Command<R>>,
    shutdown: ShutdownHandle,
}

impl<R: Reactor> Store<R> {
    /// Create a store with default options.
    ///
    /// # Panics
    /// Panics when called outside a tokio runtime.
    pub fn new(reactor: R, initial: R::State) -> Self {
        Self::with_options(reactor, initial, StoreOptions::default())
    }

    pub fn with_options(reactor: R, initial: R::State, options: StoreOptions) -> Self {
        let id = Uuid::new_v4();
        let (tx, rx) = mpsc::unbounded_channel();
        let published = Arc::new(Mutex::new(Published {
            current: initial.clone(),
            states: Subscribers::new(),
            events: Subscribers::new(),
            closed: false,
        }));
        let shutdown = ShutdownHandle::new();

        let mut sources = JoinSet::new();
        for mut source in reactor.intent_sources() {
            let tx = tx.clone();
            sources.spawn(async move {
                while let Some(intent) = source.next().await {
                    if tx.send(Command::Dispatch(intent)).is_err() {
                        break;
                    }
                }
            });
        }
        for mut source in reactor.mutation_sources() {
            let tx = tx.clone();
            sources.spawn(async move {
                while let Some(mutation) = source.next().await {
                    let command = Command::Apply {
                        mutation,
                        ticket: None,
                    };
                    if tx.send(command).is_err() {
                        break;
                    }
                }
            });
        }

        let owner = Owner {
            id,
            reactor,
            state: initial,
            options,
            tx: tx.clone(),
            published: Arc::clone(&published),
            effects: JoinSet::new(),
            sources,
            generations: HashMap::new(),
            in_flight: HashMap::new(),
            next_generation: 0,
            shutdown: shutdown.clone(),
        };
        tracing::debug!(store = %id, supersede = options.supersede_effects, "store created");
        tokio::spawn(owner.run(rx));

        Self {
            id,
            published,
            commands: tx,
            shutdown,
        }
    }

    /// Queue an intent. Never blocks.
    pub fn dispatch(&self, intent: R::Intent) {
        if self.shutdown.is_shutting_down() || self.commands.send(Command::Dispatch(intent)).is_err()
        {
            tracing::debug!(store = %self.id, "dispatch on disposed store ignored");
        }
    }

    /// Latest folded state.
    pub fn current_state(&self) -> R::State {
        self.published.lock().current.clone()
    }

    /// Current state first, then every subsequent fold.
    pub fn observe_state(&self) -> Subscription<R::State> {
        let mut published = self.published.lock();
        let seed = Some(published.current.clone());
        if published.closed {
            return Subscription::finished(seed);
        }
        published.states.subscribe(None, seed)
    }

    /// Events published on `name` from now on. Past events are not replayed.
    pub fn observe_side_channel(&self, name: &str) -> Subscription<R::Event> {
        let mut published = self.published.lock();
        if published.closed {
            return Subscription::finished(None);
        }
        published.events.subscribe(Some(name), None)
    }

    /// Every side-channel event from now on.
    pub fn observe_events(&self) -> Subscription<R::Event> {
        let mut published = self.published.lock();
        if published.closed {
            return Subscription::finished(None);
        }
        published.events.subscribe(None, None)
    }

    /// Stop the owner task, cancel in-flight effects and complete every
    /// subscription. Idempotent.
    pub fn dispose(&self) {
        if self.shutdown.signal() {
            self.published.lock().close();
            tracing::debug!(store = %self.id, "store disposed");
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.shutdown.is_shutting_down()
    }
}

impl<R: Reactor> Drop for Store<R> {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// The single task that owns a store's state.
struct Owner<R: Reactor> {
    id: Uuid,
    reactor: R,
    state: R::State,
    options: StoreOptions,
    tx: mpsc::UnboundedSender<Command<R>>,
    published: Arc<Mutex<Published<R>>>,
    effects: JoinSet<()>,
    sources: JoinSet<()>,
    generations: HashMap<&'static str, u64>,
    in_flight: HashMap<&'static str, AbortHandle>,
    next_generation: u64,
    shutdown: ShutdownHandle,
}

impl<R: Reactor> Owner<R> {
    async fn run(mut self, mut rx: mpsc::UnboundedReceiver<Command<R>>) {
        loop {
            tokio::select! {
                biased;
                _ = self.shutdown.wait() => break,
                command = rx.recv() => match command {
                    Some(Command::Dispatch(intent)) => self.handle_intent(intent),
                    Some(Command::Apply { mutation, ticket }) => self.fold(mutation, ticket),
                    None => break,
                },
                Some(joined) = self.effects.join_next(), if !self.effects.is_empty() => {
                    if let Err(err) = joined {
                        if err.is_panic() {
                            tracing::error!(store = %self.id, "effect task panicked");
                        }
                    }
                }
            }
        }

        self.effects.abort_all();
        self.sources.abort_all();
        self.published.lock().close();
        tracing::trace!(store = %self.id, "owner task finished");
    }

    fn handle_intent(&mut self, intent: R::Intent) {
        let kind = R::effect_kind(&intent);
        let effect = self.reactor.mutate(intent, &self.state);
        // An intent rejected before producing work leaves in-flight effects alone.
        if effect.is_none() {
            return;
        }
        let ticket = match kind {
            Some(kind) if self.options.supersede_effects => Some(self.supersede(kind)),
            _ => None,
        };

        let tx = self.tx.clone();
        let mut mutations = effect.into_stream();
        let abort = self.effects.spawn(async move {
            while let Some(mutation) = mutations.next().await {
                if tx.send(Command::Apply { mutation, ticket }).is_err() {
                    break;
                }
            }
        });
        if let Some(ticket) = ticket {
            self.in_flight.insert(ticket.kind, abort);
        }
    }

    /// Start a new generation for `kind`, cancelling the previous effect.
    fn supersede(&mut self, kind: &'static str) -> Ticket {
        self.next_generation += 1;
        let generation = self.next_generation;
        self.generations.insert(kind, generation);
        if let Some(previous) = self.in_flight.remove(kind) {
            if !previous.is_finished() {
                tracing::debug!(store = %self.id, kind, "superseding in-flight effect");
            }
            previous.abort();
        }
        Ticket { kind, generation }
    }

    fn fold(&mut self, mutation: R::Mutation, ticket: Option<Ticket>) {
        if let Some(ticket) = ticket {
            if self.generations.get(ticket.kind) != Some(&ticket.generation) {
                tracing::debug!(store = %self.id, kind = ticket.kind, "discarding stale mutation");
                return;
            }
        }

        let mut outbox = Outbox::new();
        self.state = <R as Reducer>::reduce(self.state.clone(), mutation, &mut outbox);

        let mut published = self.published.lock();
        if published.closed {
            return;
        }
        published.current = self.state.clone();
        published.states.publish(None, &self.state);
        for event in outbox.into_events() {
            published.events.publish(Some(SideChannel::channel(&event)), &event);
        }
        tracing::trace!(
            store = %self.id,
            observers = published.states.len(),
            "state published"
        );
    }
}
