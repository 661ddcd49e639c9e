use std::sync::Arc;

use futures::stream::StreamExt;

use super::intent::{FoodTruckDetailEvent, FoodTruckDetailIntent, FoodTruckDetailMutation};
use super::state::FoodTruckDetailState;
use crate::bus::EventBus;
use crate::mvi::{Effect, Reactor, Source};
use crate::services::{LocationProvider, StoreService};

/// Detail screen of one food truck.
pub struct FoodTruckDetailReactor {
    store_id: String,
    location: Arc<dyn LocationProvider>,
    stores: Arc<dyn StoreService>,
    bus: EventBus,
}

impl FoodTruckDetailReactor {
    pub fn new(
        store_id: impl Into<String>,
        location: Arc<dyn LocationProvider>,
        stores: Arc<dyn StoreService>,
        bus: EventBus,
    ) -> Self {
        Self {
            store_id: store_id.into(),
            location,
            stores,
            bus,
        }
    }

    /// Resolve the current location, then fetch the truck as seen from there.
    fn load(&self) -> Effect<FoodTruckDetailMutation> {
        let location = Arc::clone(&self.location);
        let stores = Arc::clone(&self.stores);
        let store_id = self.store_id.clone();

        let fetch = Effect::deferred(async move {
            match location.current_location().await {
                Ok(current) => Effect::merge([
                    Effect::just(FoodTruckDetailMutation::SetCurrentLocation(current)),
                    Effect::attempt(
                        async move {
                            stores
                                .food_truck_detail(&store_id, current)
                                .await
                                .map(FoodTruckDetailMutation::SetStore)
                        },
                        FoodTruckDetailMutation::ShowError,
                    ),
                ]),
                Err(err) => Effect::just(FoodTruckDetailMutation::ShowError(err)),
            }
        });

        Effect::concat([
            Effect::just(FoodTruckDetailMutation::SetLoading(true)),
            fetch,
            Effect::just(FoodTruckDetailMutation::SetLoading(false)),
        ])
    }

    fn signal(event: FoodTruckDetailEvent) -> Effect<FoodTruckDetailMutation> {
        Effect::just(FoodTruckDetailMutation::Signal(event))
    }
}

impl Reactor for FoodTruckDetailReactor {
    type Intent = FoodTruckDetailIntent;

    fn mutate(
        &self,
        intent: FoodTruckDetailIntent,
        state: &FoodTruckDetailState,
    ) -> Effect<FoodTruckDetailMutation> {
        match intent {
            FoodTruckDetailIntent::ViewLoaded => self.load(),
            FoodTruckDetailIntent::TapCurrentLocation => {
                let location = Arc::clone(&self.location);
                Effect::attempt(
                    async move {
                        location.current_location().await.map(|current| {
                            FoodTruckDetailMutation::Signal(FoodTruckDetailEvent::MoveCamera(
                                current,
                            ))
                        })
                    },
                    FoodTruckDetailMutation::ShowError,
                )
            }
            FoodTruckDetailIntent::TapSns => match &state.store.sns_url {
                Some(url) => Self::signal(FoodTruckDetailEvent::OpenUrl(url.clone())),
                None => Effect::none(),
            },
            FoodTruckDetailIntent::TapShare => {
                Self::signal(FoodTruckDetailEvent::Share(state.store.clone()))
            }
            FoodTruckDetailIntent::TapFeedback => Self::signal(FoodTruckDetailEvent::PushFeedback {
                store_id: self.store_id.clone(),
            }),
        }
    }

    fn effect_kind(intent: &FoodTruckDetailIntent) -> Option<&'static str> {
        match intent {
            FoodTruckDetailIntent::ViewLoaded => Some("load"),
            _ => None,
        }
    }

    fn mutation_sources(&self) -> Vec<Source<FoodTruckDetailMutation>> {
        // Feedback is only sent from this truck's feedback screen.
        vec![self
            .bus
            .feedbacks_updated
            .subscribe()
            .map(FoodTruckDetailMutation::SetFeedbacks)
            .boxed()]
    }
}
