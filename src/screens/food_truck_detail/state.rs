use serde::Serialize;

use crate::model::{FoodTruckStore, Location};
use crate::mvi::UiState;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FoodTruckDetailState {
    pub current_location: Location,
    pub store: FoodTruckStore,
    pub is_loading: bool,
}

impl UiState for FoodTruckDetailState {}
