//! Effects: asynchronous work that resolves into mutations.
//!
//! An effect is an ordered stream of mutations. Effects compose
//! sequentially (`concat`), concurrently (`merge`) and by dependency
//! (`deferred`), which covers every orchestration the screens need
//! without a full reactive-streams runtime.

use std::future::Future;

use futures::stream::{self, BoxStream, StreamExt};
use futures_core::Stream;

/// Work to perform in response to an intent.
pub struct Effect<M> {
    stream: BoxStream<'static, M>,
    empty: bool,
}

impl<M: Send + 'static> Effect<M> {
    /// An effect that produces nothing. Used for short-circuited preconditions.
    pub fn none() -> Self {
        Self {
            stream: stream::empty().boxed(),
            empty: true,
        }
    }

    /// A single mutation, produced immediately.
    pub fn just(mutation: M) -> Self {
        Self::from_stream(stream::iter(Some(mutation)))
    }

    pub fn from_stream<S>(mutations: S) -> Self
    where
        S: Stream<Item = M> + Send + 'static,
    {
        Self {
            stream: mutations.boxed(),
            empty: false,
        }
    }

    /// A single mutation produced by an infallible future.
    pub fn future<F>(future: F) -> Self
    where
        F: Future<Output = M> + Send + 'static,
    {
        Self::from_stream(stream::once(future))
    }

    /// A fallible step. The error is converted into a failure mutation here,
    /// so nothing escapes the effect boundary.
    pub fn attempt<F, E, R>(future: F, recover: R) -> Self
    where
        F: Future<Output = Result<M, E>> + Send + 'static,
        R: FnOnce(E) -> M + Send + 'static,
    {
        Self::future(async move {
            match future.await {
                Ok(mutation) => mutation,
                Err(err) => recover(err),
            }
        })
    }

    /// An effect whose shape depends on an earlier asynchronous result,
    /// e.g. "resolve the location, then fetch stores around it".
    pub fn deferred<F>(future: F) -> Self
    where
        F: Future<Output = Effect<M>> + Send + 'static,
    {
        Self::from_stream(stream::once(future).map(Effect::into_stream).flatten())
    }

    /// Run effects one after another, preserving each effect's order.
    pub fn concat<I>(effects: I) -> Self
    where
        I: IntoIterator<Item = Effect<M>>,
    {
        let parts: Vec<_> = effects
            .into_iter()
            .filter(|effect| !effect.empty)
            .map(Effect::into_stream)
            .collect();
        if parts.is_empty() {
            return Self::none();
        }
        Self::from_stream(stream::iter(parts).flatten())
    }

    /// Run effects concurrently; mutations interleave in resolution order.
    pub fn merge<I>(effects: I) -> Self
    where
        I: IntoIterator<Item = Effect<M>>,
    {
        let parts: Vec<_> = effects
            .into_iter()
            .filter(|effect| !effect.empty)
            .map(Effect::into_stream)
            .collect();
        if parts.is_empty() {
            return Self::none();
        }
        Self::from_stream(stream::select_all(parts))
    }

    pub fn is_none(&self) -> bool {
        self.empty
    }

    pub fn into_stream(self) -> BoxStream<'static, M> {
        self.stream
    }
}
