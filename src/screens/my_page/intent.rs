use crate::error::ServiceError;
use crate::model::{Medal, StoreKey, StoreVariant, User, VisitHistory};
use crate::mvi::{Intent, Mutation, SideChannel};

#[derive(Debug, Clone)]
pub enum MyPageIntent {
    ViewLoaded,
    /// Pull to refresh.
    Refresh,
    TapMedal,
    TapVisitHistory { row: usize },
    TapBookmarkMore,
    TapBookmark { row: usize },
}

impl Intent for MyPageIntent {}

#[derive(Debug, Clone)]
pub enum MyPageMutation {
    SetUser(User),
    UpdateNickname(String),
    UpdateMedal(Medal),
    SetVisitHistories(Vec<VisitHistory>),
    SetBookmarks(Vec<StoreVariant>),
    AppendBookmark(StoreVariant),
    DeleteBookmark(StoreKey),
    Signal(MyPageEvent),
    ShowError(ServiceError),
}

impl Mutation for MyPageMutation {}

#[derive(Debug, Clone, PartialEq)]
pub enum MyPageEvent {
    EndRefresh,
    PushMedal(Medal),
    PushStoreDetail { store_id: i64 },
    PushFoodTruckDetail { store_id: String },
    PushBookmarkList { user_name: String },
    Error(ServiceError),
}

impl SideChannel for MyPageEvent {
    fn channel(&self) -> &'static str {
        match self {
            MyPageEvent::EndRefresh => "end_refresh",
            MyPageEvent::PushMedal(_) => "push_medal",
            MyPageEvent::PushStoreDetail { .. } => "push_store_detail",
            MyPageEvent::PushFoodTruckDetail { .. } => "push_food_truck_detail",
            MyPageEvent::PushBookmarkList { .. } => "push_bookmark_list",
            MyPageEvent::Error(_) => "error",
        }
    }

    fn error(&self) -> Option<&ServiceError> {
        match self {
            MyPageEvent::Error(err) => Some(err),
            _ => None,
        }
    }
}
