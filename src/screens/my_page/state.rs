use serde::Serialize;

use crate::model::{StoreVariant, User, VisitHistory};
use crate::mvi::UiState;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MyPageState {
    pub user: User,
    pub visit_histories: Vec<VisitHistory>,
    pub bookmarks: Vec<StoreVariant>,
}

impl UiState for MyPageState {}
