use serde::Serialize;

use crate::model::{Location, StreetFoodStore};
use crate::mvi::UiState;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StoreDetailState {
    pub current_location: Location,
    pub store: StreetFoodStore,
    pub is_loading: bool,
}

impl UiState for StoreDetailState {}
