use std::sync::Arc;

use futures::future;
use futures::stream::StreamExt;

use super::intent::{StoreDetailEvent, StoreDetailIntent, StoreDetailMutation};
use super::state::StoreDetailState;
use crate::bus::EventBus;
use crate::model::{Location, StoreKey, StoreVariant, StreetFoodStore};
use crate::mvi::{Effect, Reactor, Source};
use crate::services::{BookmarkService, LocationProvider, ReviewService, StoreService};

/// Photo cell that opens the full photo list instead of a single photo.
const MORE_PHOTOS_ROW: usize = 3;

/// Detail screen of one street food store.
pub struct StoreDetailReactor {
    store_id: i64,
    location: Arc<dyn LocationProvider>,
    stores: Arc<dyn StoreService>,
    reviews: Arc<dyn ReviewService>,
    bookmarks: Arc<dyn BookmarkService>,
    bus: EventBus,
}

impl StoreDetailReactor {
    pub fn new(
        store_id: i64,
        location: Arc<dyn LocationProvider>,
        stores: Arc<dyn StoreService>,
        reviews: Arc<dyn ReviewService>,
        bookmarks: Arc<dyn BookmarkService>,
        bus: EventBus,
    ) -> Self {
        Self {
            store_id,
            location,
            stores,
            reviews,
            bookmarks,
            bus,
        }
    }

    fn fetch_store(&self, from: Location) -> Effect<StoreDetailMutation> {
        let stores = Arc::clone(&self.stores);
        let store_id = self.store_id;
        Effect::attempt(
            async move {
                stores
                    .store_detail(store_id, from)
                    .await
                    .map(StoreDetailMutation::SetStore)
            },
            StoreDetailMutation::ShowError,
        )
    }

    fn load(&self) -> Effect<StoreDetailMutation> {
        let location = Arc::clone(&self.location);
        let stores = Arc::clone(&self.stores);
        let store_id = self.store_id;

        let fetch = Effect::deferred(async move {
            match location.current_location().await {
                Ok(current) => Effect::merge([
                    Effect::just(StoreDetailMutation::SetCurrentLocation(current)),
                    Effect::attempt(
                        async move {
                            stores
                                .store_detail(store_id, current)
                                .await
                                .map(StoreDetailMutation::SetStore)
                        },
                        StoreDetailMutation::ShowError,
                    ),
                ]),
                Err(err) => Effect::just(StoreDetailMutation::ShowError(err)),
            }
        });

        Effect::concat([
            Effect::just(StoreDetailMutation::SetLoading(true)),
            fetch,
            Effect::just(StoreDetailMutation::SetLoading(false)),
        ])
    }

    fn toggle_bookmark(&self, store: &StreetFoodStore) -> Effect<StoreDetailMutation> {
        let bookmarks = Arc::clone(&self.bookmarks);
        let bus = self.bus.clone();
        let key = StoreKey::StreetFood(store.id);

        if store.is_bookmarked {
            return Effect::deferred(async move {
                match bookmarks.remove_bookmark(&key).await {
                    Ok(()) => {
                        bus.bookmarks_deleted.publish(vec![key]);
                        Effect::concat([
                            Effect::just(StoreDetailMutation::SetBookmark(false)),
                            Effect::just(StoreDetailMutation::Signal(StoreDetailEvent::Toast(
                                "Removed from bookmarks".to_string(),
                            ))),
                        ])
                    }
                    Err(err) => Effect::just(StoreDetailMutation::ShowError(err)),
                }
            });
        }

        let bookmarked = StoreVariant::StreetFood(StreetFoodStore {
            is_bookmarked: true,
            ..store.clone()
        });
        Effect::deferred(async move {
            match bookmarks.add_bookmark(&key).await {
                Ok(()) => {
                    bus.bookmark_added.publish(bookmarked);
                    Effect::concat([
                        Effect::just(StoreDetailMutation::SetBookmark(true)),
                        Effect::just(StoreDetailMutation::Signal(StoreDetailEvent::Toast(
                            "Added to bookmarks".to_string(),
                        ))),
                    ])
                }
                Err(err) => Effect::just(StoreDetailMutation::ShowError(err)),
            }
        })
    }

    /// Delete a review, then reload the store so counts and ratings follow.
    fn delete_review(&self, review_id: i64, from: Location) -> Effect<StoreDetailMutation> {
        let reviews = Arc::clone(&self.reviews);
        let reload = self.fetch_store(from);
        let delete = Effect::deferred(async move {
            match reviews.delete_review(review_id).await {
                Ok(()) => reload,
                Err(err) => Effect::just(StoreDetailMutation::ShowError(err)),
            }
        });

        Effect::concat([
            Effect::just(StoreDetailMutation::SetLoading(true)),
            delete,
            Effect::just(StoreDetailMutation::SetLoading(false)),
        ])
    }

    fn signal(event: StoreDetailEvent) -> Effect<StoreDetailMutation> {
        Effect::just(StoreDetailMutation::Signal(event))
    }
}

impl Reactor for StoreDetailReactor {
    type Intent = StoreDetailIntent;

    fn mutate(
        &self,
        intent: StoreDetailIntent,
        state: &StoreDetailState,
    ) -> Effect<StoreDetailMutation> {
        let store_id = self.store_id;
        match intent {
            StoreDetailIntent::ViewLoaded => self.load(),
            StoreDetailIntent::TapBookmark => self.toggle_bookmark(&state.store),
            StoreDetailIntent::TapCurrentLocation => {
                let location = Arc::clone(&self.location);
                Effect::attempt(
                    async move {
                        location.current_location().await.map(|current| {
                            StoreDetailMutation::Signal(StoreDetailEvent::MoveCamera(current))
                        })
                    },
                    StoreDetailMutation::ShowError,
                )
            }
            StoreDetailIntent::TapDeleteRequest => {
                Self::signal(StoreDetailEvent::DeleteModal { store_id })
            }
            StoreDetailIntent::TapEditStore => {
                Self::signal(StoreDetailEvent::PushModify(state.store.clone()))
            }
            StoreDetailIntent::TapAddPhoto => Self::signal(StoreDetailEvent::AddPhoto { store_id }),
            StoreDetailIntent::TapShare => Self::signal(StoreDetailEvent::Share(state.store.clone())),
            StoreDetailIntent::TapVisitHistory => Self::signal(StoreDetailEvent::VisitHistories(
                state.store.visit_histories.clone(),
            )),
            StoreDetailIntent::TapWriteReview => Self::signal(StoreDetailEvent::ReviewModal {
                store_id,
                review: None,
            }),
            StoreDetailIntent::TapEditReview { row } => match state.store.reviews.get(row) {
                Some(review) => Self::signal(StoreDetailEvent::ReviewModal {
                    store_id,
                    review: Some(review.clone()),
                }),
                None => Effect::none(),
            },
            StoreDetailIntent::TapPhoto { row } => {
                if state.store.photos.is_empty() {
                    Effect::none()
                } else if row == MORE_PHOTOS_ROW {
                    Self::signal(StoreDetailEvent::PhotoList { store_id })
                } else {
                    Self::signal(StoreDetailEvent::PhotoDetail {
                        store_id,
                        index: row,
                    })
                }
            }
            StoreDetailIntent::DeleteReview { row } => match state.store.reviews.get(row) {
                Some(review) => self.delete_review(review.id, state.current_location),
                None => Effect::none(),
            },
            StoreDetailIntent::TapVisit => Self::signal(StoreDetailEvent::Visit(state.store.clone())),
        }
    }

    fn effect_kind(intent: &StoreDetailIntent) -> Option<&'static str> {
        match intent {
            StoreDetailIntent::ViewLoaded => Some("load"),
            _ => None,
        }
    }

    fn intent_sources(&self) -> Vec<Source<StoreDetailIntent>> {
        let store_id = self.store_id;
        vec![self
            .bus
            .store_updated
            .subscribe()
            .filter_map(move |store| {
                future::ready(match store {
                    StoreVariant::StreetFood(store) if store.id == store_id => {
                        Some(StoreDetailIntent::ViewLoaded)
                    }
                    _ => None,
                })
            })
            .boxed()]
    }

    fn mutation_sources(&self) -> Vec<Source<StoreDetailMutation>> {
        vec![
            self.bus
                .photos_added
                .subscribe()
                .map(StoreDetailMutation::PrependPhotos)
                .boxed(),
            self.bus
                .photo_deleted
                .subscribe()
                .map(|photo_id| StoreDetailMutation::DeletePhoto { photo_id })
                .boxed(),
            self.bus
                .review_added
                .subscribe()
                .map(StoreDetailMutation::AddReview)
                .boxed(),
        ]
    }
}
