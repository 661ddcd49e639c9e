use crate::error::ServiceError;
use crate::model::{Location, Photo, Review, StreetFoodStore, VisitHistory};
use crate::mvi::{Intent, Mutation, SideChannel};

#[derive(Debug, Clone)]
pub enum StoreDetailIntent {
    ViewLoaded,
    TapBookmark,
    TapCurrentLocation,
    TapDeleteRequest,
    TapEditStore,
    TapAddPhoto,
    TapShare,
    TapVisitHistory,
    TapWriteReview,
    TapEditReview { row: usize },
    /// Row 3 is the "more photos" cell.
    TapPhoto { row: usize },
    DeleteReview { row: usize },
    TapVisit,
}

impl Intent for StoreDetailIntent {}

#[derive(Debug, Clone)]
pub enum StoreDetailMutation {
    SetLoading(bool),
    SetStore(StreetFoodStore),
    SetCurrentLocation(Location),
    SetBookmark(bool),
    /// Newly uploaded photos go first.
    PrependPhotos(Vec<Photo>),
    DeletePhoto { photo_id: i64 },
    AddReview(Review),
    Signal(StoreDetailEvent),
    ShowError(ServiceError),
}

impl Mutation for StoreDetailMutation {}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreDetailEvent {
    MoveCamera(Location),
    DeleteModal { store_id: i64 },
    /// Open the edit form for the store.
    PushModify(StreetFoodStore),
    /// Ask where the new photo comes from.
    AddPhoto { store_id: i64 },
    Share(StreetFoodStore),
    VisitHistories(Vec<VisitHistory>),
    ReviewModal { store_id: i64, review: Option<Review> },
    PhotoDetail { store_id: i64, index: usize },
    PhotoList { store_id: i64 },
    Visit(StreetFoodStore),
    Error(ServiceError),
    Toast(String),
}

impl SideChannel for StoreDetailEvent {
    fn channel(&self) -> &'static str {
        match self {
            StoreDetailEvent::MoveCamera(_) => "move_camera",
            StoreDetailEvent::DeleteModal { .. } => "delete_modal",
            StoreDetailEvent::PushModify(_) => "push_modify",
            StoreDetailEvent::AddPhoto { .. } => "add_photo",
            StoreDetailEvent::Share(_) => "share",
            StoreDetailEvent::VisitHistories(_) => "visit_histories",
            StoreDetailEvent::ReviewModal { .. } => "review_modal",
            StoreDetailEvent::PhotoDetail { .. } => "photo_detail",
            StoreDetailEvent::PhotoList { .. } => "photo_list",
            StoreDetailEvent::Visit(_) => "visit",
            StoreDetailEvent::Error(_) => "error",
            StoreDetailEvent::Toast(_) => "toast",
        }
    }

    fn error(&self) -> Option<&ServiceError> {
        match self {
            StoreDetailEvent::Error(err) => Some(err),
            _ => None,
        }
    }
}
