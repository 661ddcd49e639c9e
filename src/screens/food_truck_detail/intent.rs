use crate::error::ServiceError;
use crate::model::{Feedback, FoodTruckStore, Location};
use crate::mvi::{Intent, Mutation, SideChannel};

#[derive(Debug, Clone)]
pub enum FoodTruckDetailIntent {
    ViewLoaded,
    TapCurrentLocation,
    /// Open the operator's social page, if the truck has one.
    TapSns,
    TapShare,
    TapFeedback,
}

impl Intent for FoodTruckDetailIntent {}

#[derive(Debug, Clone)]
pub enum FoodTruckDetailMutation {
    SetLoading(bool),
    SetCurrentLocation(Location),
    SetStore(FoodTruckStore),
    /// Replaces the breakdown and its total.
    SetFeedbacks(Vec<Feedback>),
    Signal(FoodTruckDetailEvent),
    ShowError(ServiceError),
}

impl Mutation for FoodTruckDetailMutation {}

#[derive(Debug, Clone, PartialEq)]
pub enum FoodTruckDetailEvent {
    MoveCamera(Location),
    OpenUrl(String),
    Share(FoodTruckStore),
    PushFeedback { store_id: String },
    Error(ServiceError),
}

impl SideChannel for FoodTruckDetailEvent {
    fn channel(&self) -> &'static str {
        match self {
            FoodTruckDetailEvent::MoveCamera(_) => "move_camera",
            FoodTruckDetailEvent::OpenUrl(_) => "open_url",
            FoodTruckDetailEvent::Share(_) => "share",
            FoodTruckDetailEvent::PushFeedback { .. } => "push_feedback",
            FoodTruckDetailEvent::Error(_) => "error",
        }
    }

    fn error(&self) -> Option<&ServiceError> {
        match self {
            FoodTruckDetailEvent::Error(err) => Some(err),
            _ => None,
        }
    }
}
