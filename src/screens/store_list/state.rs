use serde::Serialize;

use crate::model::{Category, Location, StoreVariant};
use crate::mvi::UiState;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StoreListState {
    /// Center of the last search, once a location was resolved.
    pub center: Option<Location>,
    /// Everything the last search returned, unfiltered.
    pub stores: Vec<StoreVariant>,
    pub category: Option<Category>,
    pub is_loading: bool,
}

impl StoreListState {
    /// Stores shown to the user: the last result narrowed to the picked category.
    pub fn visible_stores(&self) -> Vec<&StoreVariant> {
        self.stores
            .iter()
            .filter(|store| match &self.category {
                Some(category) => store.in_category(category),
                None => true,
            })
            .collect()
    }
}

impl UiState for StoreListState {}
