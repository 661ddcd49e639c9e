//! Collaborator interfaces effects call into.
//!
//! Every method is an async operation returning `success | ServiceError`.
//! Implementations are shared between stores and must tolerate concurrent
//! calls.

use async_trait::async_trait;

use crate::error::ServiceResult;
use crate::model::{
    BookmarkFolder, FoodTruckStore, Location, StoreKey, StoreVariant, StreetFoodStore, User,
    VisitHistory,
};

#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn current_location(&self) -> ServiceResult<Location>;
}

/// Why a user asks for a store to be removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteReason {
    NotExists,
    WrongContent,
    Overlapped,
}

impl DeleteReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeleteReason::NotExists => "NOSTORE",
            DeleteReason::WrongContent => "WRONGCONTENT",
            DeleteReason::Overlapped => "OVERLAPSTORE",
        }
    }
}

#[async_trait]
pub trait StoreService: Send + Sync {
    async fn nearby_stores(&self, center: Location, distance_m: u32)
        -> ServiceResult<Vec<StoreVariant>>;

    async fn store_detail(&self, store_id: i64, from: Location) -> ServiceResult<StreetFoodStore>;

    async fn food_truck_detail(&self, store_id: &str, from: Location)
        -> ServiceResult<FoodTruckStore>;

    async fn delete_store(&self, store_id: i64, reason: DeleteReason) -> ServiceResult<()>;

    async fn stores_exist_around(&self, center: Location, distance_m: u32) -> ServiceResult<bool>;
}

#[async_trait]
pub trait BookmarkService: Send + Sync {
    async fn my_bookmarks(&self, size: usize) -> ServiceResult<BookmarkFolder>;

    async fn add_bookmark(&self, store: &StoreKey) -> ServiceResult<()>;

    async fn remove_bookmark(&self, store: &StoreKey) -> ServiceResult<()>;

    async fn edit_folder(&self, name: &str, introduction: &str) -> ServiceResult<()>;
}

#[async_trait]
pub trait ReviewService: Send + Sync {
    async fn delete_review(&self, review_id: i64) -> ServiceResult<()>;
}

#[async_trait]
pub trait UserService: Send + Sync {
    async fn user_activity(&self) -> ServiceResult<User>;
}

#[async_trait]
pub trait VisitHistoryService: Send + Sync {
    async fn my_visits(&self, size: usize) -> ServiceResult<Vec<VisitHistory>>;
}

#[async_trait]
pub trait MapService: Send + Sync {
    /// Reverse-geocode a position into a display address.
    async fn address_of(&self, location: Location) -> ServiceResult<String>;
}

/// Location provider that always answers with the same position.
///
/// Stands in for the device sensor in the headless renderer.
pub struct FixedLocation(pub Location);

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn current_location(&self) -> ServiceResult<Location> {
        Ok(self.0)
    }
}
