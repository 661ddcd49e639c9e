use crate::error::ServiceError;
use crate::model::{Category, Location, StoreKey, StoreVariant};
use crate::mvi::{Intent, Mutation, SideChannel};
use crate::services::DeleteReason;

#[derive(Debug, Clone)]
pub enum StoreListIntent {
    ViewLoaded,
    /// Search again around the last center, or the current location if none.
    Refetch,
    /// Row index into the visible stores.
    TapStore { row: usize },
    Delete { store_id: i64, reason: DeleteReason },
}

impl Intent for StoreListIntent {}

#[derive(Debug, Clone)]
pub enum StoreListMutation {
    SetLoading(bool),
    SetCenter(Location),
    SetStores(Vec<StoreVariant>),
    SetCategory(Category),
    RemoveStore(StoreKey),
    DeleteRequested { store_id: i64 },
    Signal(StoreListEvent),
    ShowError(ServiceError),
}

impl Mutation for StoreListMutation {}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreListEvent {
    PushStoreDetail { store_id: i64 },
    PushFoodTruckDetail { store_id: String },
    Error(ServiceError),
    Toast(String),
}

impl SideChannel for StoreListEvent {
    fn channel(&self) -> &'static str {
        match self {
            StoreListEvent::PushStoreDetail { .. } => "push_store_detail",
            StoreListEvent::PushFoodTruckDetail { .. } => "push_food_truck_detail",
            StoreListEvent::Error(_) => "error",
            StoreListEvent::Toast(_) => "toast",
        }
    }

    fn error(&self) -> Option<&ServiceError> {
        match self {
            StoreListEvent::Error(err) => Some(err),
            _ => None,
        }
    }
}
