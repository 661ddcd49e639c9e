//! Domain values shared by services, the event bus and screen state.

mod location;
mod review;
mod store;
mod user;

pub use location::Location;
pub use review::{Feedback, Photo, Review, VisitHistory};
pub use store::{Category, FoodTruckStore, OpenStatus, StoreKey, StoreVariant, StreetFoodStore};
pub use user::{BookmarkFolder, Medal, User};
