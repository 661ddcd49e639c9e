use serde::Serialize;

use crate::model::{Location, StoreVariant};
use crate::mvi::UiState;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WriteAddressState {
    pub address: String,
    pub near_stores: Vec<StoreVariant>,
    /// Map center; unknown until the first camera move.
    pub camera_position: Option<Location>,
}

impl UiState for WriteAddressState {}
