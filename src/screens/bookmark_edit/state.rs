use serde::Serialize;

use crate::model::BookmarkFolder;
use crate::mvi::UiState;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BookmarkEditState {
    pub folder: BookmarkFolder,
    pub is_loading: bool,
}

impl BookmarkEditState {
    pub fn new(folder: BookmarkFolder) -> Self {
        Self {
            folder,
            is_loading: false,
        }
    }
}

impl UiState for BookmarkEditState {}
