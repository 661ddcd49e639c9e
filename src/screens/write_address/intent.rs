use crate::error::ServiceError;
use crate::model::{Location, StoreVariant};
use crate::mvi::{Intent, Mutation, SideChannel};

#[derive(Debug, Clone)]
pub enum WriteAddressIntent {
    MoveMapCenter { center: Location },
    TapCurrentLocation,
    TapSetAddress,
    /// Continue despite stores already reported nearby.
    TapConfirmAddress,
}

impl Intent for WriteAddressIntent {}

#[derive(Debug, Clone)]
pub enum WriteAddressMutation {
    SetNearStores(Vec<StoreVariant>),
    SetAddress(String),
    MoveCamera(Location),
    /// Result of the duplicate check for a pick at `location`. The address
    /// shown is whatever the state holds when this folds.
    AddressChecked { exists: bool, location: Location },
    Signal(WriteAddressEvent),
    ShowError(ServiceError),
}

impl Mutation for WriteAddressMutation {}

#[derive(Debug, Clone, PartialEq)]
pub enum WriteAddressEvent {
    ConfirmPopup { address: String },
    PushAddressDetail { address: String, location: Location },
    Error(ServiceError),
}

impl SideChannel for WriteAddressEvent {
    fn channel(&self) -> &'static str {
        match self {
            WriteAddressEvent::ConfirmPopup { .. } => "confirm_popup",
            WriteAddressEvent::PushAddressDetail { .. } => "push_address_detail",
            WriteAddressEvent::Error(_) => "error",
        }
    }

    fn error(&self) -> Option<&ServiceError> {
        match self {
            WriteAddressEvent::Error(err) => Some(err),
            _ => None,
        }
    }
}
