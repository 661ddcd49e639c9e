use std::sync::Arc;

use super::intent::{WriteAddressEvent, WriteAddressIntent, WriteAddressMutation};
use super::state::WriteAddressState;
use crate::error::ServiceError;
use crate::model::Location;
use crate::mvi::{Effect, Reactor, Store, StoreOptions};
use crate::services::{LocationProvider, MapService, StoreService};

/// Radius of the "stores already here" overlay.
const NEAR_STORES_DISTANCE_M: u32 = 200;
/// Radius within which a new report is likely a duplicate.
const DUPLICATE_DISTANCE_M: u32 = 10;

pub struct WriteAddressReactor {
    map: Arc<dyn MapService>,
    stores: Arc<dyn StoreService>,
    location: Arc<dyn LocationProvider>,
}

impl WriteAddressReactor {
    pub fn new(
        map: Arc<dyn MapService>,
        stores: Arc<dyn StoreService>,
        location: Arc<dyn LocationProvider>,
    ) -> Self {
        Self {
            map,
            stores,
            location,
        }
    }

    /// Build the store and center the map on the current location.
    pub fn into_store(self, options: StoreOptions) -> Store<Self> {
        let store = Store::with_options(self, WriteAddressState::default(), options);
        store.dispatch(WriteAddressIntent::TapCurrentLocation);
        store
    }

    fn move_to(
        map: Arc<dyn MapService>,
        stores: Arc<dyn StoreService>,
        center: Location,
    ) -> Effect<WriteAddressMutation> {
        Effect::merge([
            Effect::attempt(
                async move {
                    stores
                        .nearby_stores(center, NEAR_STORES_DISTANCE_M)
                        .await
                        .map(WriteAddressMutation::SetNearStores)
                },
                WriteAddressMutation::ShowError,
            ),
            Effect::attempt(
                async move { map.address_of(center).await.map(WriteAddressMutation::SetAddress) },
                WriteAddressMutation::ShowError,
            ),
            Effect::just(WriteAddressMutation::MoveCamera(center)),
        ])
    }

    fn invalid_position() -> Effect<WriteAddressMutation> {
        Effect::just(WriteAddressMutation::ShowError(ServiceError::invalid(
            "Map position is not valid",
        )))
    }
}

impl Reactor for WriteAddressReactor {
    type Intent = WriteAddressIntent;

    fn mutate(
        &self,
        intent: WriteAddressIntent,
        state: &WriteAddressState,
    ) -> Effect<WriteAddressMutation> {
        let map = Arc::clone(&self.map);
        let stores = Arc::clone(&self.stores);

        match intent {
            WriteAddressIntent::MoveMapCenter { center } => Self::move_to(map, stores, center),
            WriteAddressIntent::TapCurrentLocation => {
                let location = Arc::clone(&self.location);
                Effect::deferred(async move {
                    match location.current_location().await {
                        Ok(center) => Self::move_to(map, stores, center),
                        Err(err) => Effect::just(WriteAddressMutation::ShowError(err)),
                    }
                })
            }
            WriteAddressIntent::TapSetAddress => {
                let Some(camera) = state.camera_position else {
                    return Self::invalid_position();
                };
                Effect::attempt(
                    async move {
                        stores
                            .stores_exist_around(camera, DUPLICATE_DISTANCE_M)
                            .await
                            .map(|exists| WriteAddressMutation::AddressChecked {
                                exists,
                                location: camera,
                            })
                    },
                    WriteAddressMutation::ShowError,
                )
            }
            WriteAddressIntent::TapConfirmAddress => match state.camera_position {
                Some(camera) => Effect::just(WriteAddressMutation::Signal(
                    WriteAddressEvent::PushAddressDetail {
                        address: state.address.clone(),
                        location: camera,
                    },
                )),
                None => Self::invalid_position(),
            },
        }
    }

    fn effect_kind(intent: &WriteAddressIntent) -> Option<&'static str> {
        match intent {
            WriteAddressIntent::MoveMapCenter { .. } | WriteAddressIntent::TapCurrentLocation => {
                Some("map")
            }
            _ => None,
        }
    }
}
