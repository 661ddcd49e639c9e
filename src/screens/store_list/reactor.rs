use std::sync::Arc;

use futures::stream::StreamExt;

use super::intent::{StoreListEvent, StoreListIntent, StoreListMutation};
use super::state::StoreListState;
use crate::bus::EventBus;
use crate::model::{Location, StoreVariant};
use crate::mvi::{Effect, Reactor, Source};
use crate::services::{LocationProvider, StoreService};

/// Nearby store list.
pub struct StoreListReactor {
    location: Arc<dyn LocationProvider>,
    stores: Arc<dyn StoreService>,
    bus: EventBus,
    distance_m: u32,
}

impl StoreListReactor {
    pub fn new(
        location: Arc<dyn LocationProvider>,
        stores: Arc<dyn StoreService>,
        bus: EventBus,
        distance_m: u32,
    ) -> Self {
        Self {
            location,
            stores,
            bus,
            distance_m,
        }
    }

    /// Resolve a center (unless one is known), then search around it.
    fn fetch(&self, known_center: Option<Location>) -> Effect<StoreListMutation> {
        let location = Arc::clone(&self.location);
        let stores = Arc::clone(&self.stores);
        let distance_m = self.distance_m;

        let search = Effect::deferred(async move {
            let center = match known_center {
                Some(center) => center,
                None => match location.current_location().await {
                    Ok(center) => center,
                    Err(err) => return Effect::just(StoreListMutation::ShowError(err)),
                },
            };
            Effect::concat([
                Effect::just(StoreListMutation::SetCenter(center)),
                Effect::attempt(
                    async move {
                        stores
                            .nearby_stores(center, distance_m)
                            .await
                            .map(StoreListMutation::SetStores)
                    },
                    StoreListMutation::ShowError,
                ),
            ])
        });

        Effect::concat([
            Effect::just(StoreListMutation::SetLoading(true)),
            search,
            Effect::just(StoreListMutation::SetLoading(false)),
        ])
    }
}

impl Reactor for StoreListReactor {
    type Intent = StoreListIntent;

    fn mutate(&self, intent: StoreListIntent, state: &StoreListState) -> Effect<StoreListMutation> {
        match intent {
            StoreListIntent::ViewLoaded => self.fetch(None),
            StoreListIntent::Refetch => self.fetch(state.center),
            StoreListIntent::TapStore { row } => {
                let Some(store) = state.visible_stores().get(row).copied() else {
                    return Effect::none();
                };
                let event = match store {
                    StoreVariant::StreetFood(store) => {
                        StoreListEvent::PushStoreDetail { store_id: store.id }
                    }
                    StoreVariant::FoodTruck(store) => StoreListEvent::PushFoodTruckDetail {
                        store_id: store.id.clone(),
                    },
                };
                Effect::just(StoreListMutation::Signal(event))
            }
            StoreListIntent::Delete { store_id, reason } => {
                let stores = Arc::clone(&self.stores);
                Effect::attempt(
                    async move {
                        stores
                            .delete_store(store_id, reason)
                            .await
                            .map(|()| StoreListMutation::DeleteRequested { store_id })
                    },
                    StoreListMutation::ShowError,
                )
            }
        }
    }

    fn effect_kind(intent: &StoreListIntent) -> Option<&'static str> {
        match intent {
            StoreListIntent::ViewLoaded | StoreListIntent::Refetch => Some("fetch"),
            _ => None,
        }
    }

    fn intent_sources(&self) -> Vec<Source<StoreListIntent>> {
        vec![self
            .bus
            .category_filter
            .subscribe()
            .map(|_| StoreListIntent::Refetch)
            .boxed()]
    }

    fn mutation_sources(&self) -> Vec<Source<StoreListMutation>> {
        vec![
            self.bus
                .store_deleted
                .subscribe()
                .map(StoreListMutation::RemoveStore)
                .boxed(),
            self.bus
                .category_filter
                .subscribe()
                .map(StoreListMutation::SetCategory)
                .boxed(),
        ]
    }
}
