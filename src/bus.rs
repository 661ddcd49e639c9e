//! Typed publish/subscribe bus for cross-screen events.
//!
//! One [`Topic`] per event kind. The bus is injected into every reactor
//! that publishes or folds an event; no screen holds a reference to another.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tokio::sync::broadcast;

use crate::model::{Category, Feedback, Medal, Photo, Review, StoreKey, StoreVariant};
use crate::mvi::Source;

pub const DEFAULT_CAPACITY: usize = 64;

/// A single broadcast channel. Subscribers only see events published after
/// they subscribed.
pub struct Topic<T> {
    name: &'static str,
    sender: broadcast::Sender<T>,
}

impl<T: Clone + Send + 'static> Topic<T> {
    pub fn new(name: &'static str, capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { name, sender }
    }

    /// Returns how many subscribers received the event.
    pub fn publish(&self, value: T) -> usize {
        match self.sender.send(value) {
            Ok(receivers) => {
                tracing::trace!(topic = self.name, receivers, "event published");
                receivers
            }
            Err(_) => {
                tracing::trace!(topic = self.name, "event published with no subscribers");
                0
            }
        }
    }

    pub fn subscribe(&self) -> Source<T> {
        let name = self.name;
        stream::unfold(self.sender.subscribe(), move |mut receiver| async move {
            loop {
                match receiver.recv().await {
                    Ok(value) => return Some((value, receiver)),
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!(topic = name, skipped, "subscriber lagged, events dropped");
                    }
                    Err(broadcast::error::RecvError::Closed) => return None,
                }
            }
        })
        .boxed()
    }
}

/// All cross-screen event kinds.
pub struct Topics {
    /// A store was edited somewhere in the app.
    pub store_updated: Topic<StoreVariant>,
    /// A store was deleted.
    pub store_deleted: Topic<StoreKey>,
    /// Feedback was added to a food truck.
    pub feedbacks_updated: Topic<Vec<Feedback>>,
    /// A category filter was picked.
    pub category_filter: Topic<Category>,
    /// Photos were uploaded for the store on screen.
    pub photos_added: Topic<Vec<Photo>>,
    /// A photo was deleted; carries the photo id.
    pub photo_deleted: Topic<i64>,
    /// A street food review was written.
    pub review_added: Topic<Review>,
    pub bookmark_added: Topic<StoreVariant>,
    pub bookmarks_deleted: Topic<Vec<StoreKey>>,
    pub nickname_updated: Topic<String>,
    pub medal_updated: Topic<Medal>,
}

/// Cheap cloneable handle to the process-wide topics.
#[derive(Clone)]
pub struct EventBus {
    topics: Arc<Topics>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        Self {
            topics: Arc::new(Topics {
                store_updated: Topic::new("store_updated", capacity),
                store_deleted: Topic::new("store_deleted", capacity),
                feedbacks_updated: Topic::new("feedbacks_updated", capacity),
                category_filter: Topic::new("category_filter", capacity),
                photos_added: Topic::new("photos_added", capacity),
                photo_deleted: Topic::new("photo_deleted", capacity),
                review_added: Topic::new("review_added", capacity),
                bookmark_added: Topic::new("bookmark_added", capacity),
                bookmarks_deleted: Topic::new("bookmarks_deleted", capacity),
                nickname_updated: Topic::new("nickname_updated", capacity),
                medal_updated: Topic::new("medal_updated", capacity),
            }),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl std::ops::Deref for EventBus {
    type Target = Topics;

    fn deref(&self) -> &Topics {
        &self.topics
    }
}
