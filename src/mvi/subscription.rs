//! Observer streams handed out by a store.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::mpsc;

/// A lazily consumed, unbounded stream of values from a store.
///
/// Ends once the store is disposed and every buffered value was read.
pub struct Subscription<T> {
    rx: mpsc::UnboundedReceiver<T>,
}

impl<T> Subscription<T> {
    /// A subscription that yields `seed` (if any) and then ends.
    pub(crate) fn finished(seed: Option<T>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        if let Some(value) = seed {
            let _ = tx.send(value);
        }
        Self { rx }
    }

    /// Wait for the next value. `None` means the store was disposed.
    pub async fn recv(&mut self) -> Option<T> {
        self.rx.recv().await
    }

    /// Take an already delivered value without waiting.
    pub fn try_recv(&mut self) -> Option<T> {
        self.rx.try_recv().ok()
    }

    /// Skip values until one matches `predicate`.
    pub async fn wait_for<P>(&mut self, mut predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        while let Some(value) = self.rx.recv().await {
            if predicate(&value) {
                return Some(value);
            }
        }
        None
    }
}

impl<T> Stream for Subscription<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        self.rx.poll_recv(cx)
    }
}

struct Subscriber<T> {
    channel: Option<String>,
    tx: mpsc::UnboundedSender<T>,
}

/// Fan-out list of live subscribers. Closed subscribers are pruned on publish.
pub(crate) struct Subscribers<T> {
    entries: Vec<Subscriber<T>>,
}

impl<T: Clone> Subscribers<T> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Subscribe, optionally seeding the stream with a first value.
    pub(crate) fn subscribe(&mut self, channel: Option<&str>, seed: Option<T>) -> Subscription<T> {
        let (tx, rx) = mpsc::unbounded_channel();
        if let Some(value) = seed {
            let _ = tx.send(value);
        }
        self.entries.push(Subscriber {
            channel: channel.map(str::to_string),
            tx,
        });
        Subscription { rx }
    }

    /// Deliver to every subscriber listening on `channel` (or on everything).
    pub(crate) fn publish(&mut self, channel: Option<&str>, value: &T) {
        self.entries.retain(|entry| {
            let wants = match (&entry.channel, channel) {
                (None, _) => true,
                (Some(filter), Some(name)) => filter == name,
                (Some(_), None) => false,
            };
            if !wants {
                return !entry.tx.is_closed();
            }
            entry.tx.send(value.clone()).is_ok()
        });
    }

    /// Drop every sender so the streams complete.
    pub(crate) fn close(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
