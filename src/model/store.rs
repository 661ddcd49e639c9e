//! Store variants.
//!
//! Street food stalls are user-reported and keyed by a numeric id; food
//! trucks are operator-managed and keyed by a string id. Everything that
//! handles "a store" matches on [`StoreVariant`].

use std::fmt;

use serde::{Deserialize, Serialize};

use super::location::Location;
use super::review::{Feedback, Photo, Review, VisitHistory};

/// Identity of a store across both variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "storeType", content = "storeId", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StoreKey {
    StreetFood(i64),
    FoodTruck(String),
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKey::StreetFood(id) => write!(f, "street-food/{}", id),
            StoreKey::FoodTruck(id) => write!(f, "food-truck/{}", id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OpenStatus {
    Open,
    #[default]
    Closed,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreetFoodStore {
    pub id: i64,
    pub name: String,
    pub location: Location,
    pub categories: Vec<Category>,
    pub rating: f64,
    /// Distance from the requesting position in meters.
    pub distance_m: i32,
    pub reviews: Vec<Review>,
    pub photos: Vec<Photo>,
    pub visit_histories: Vec<VisitHistory>,
    pub is_bookmarked: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodTruckStore {
    pub id: String,
    pub name: String,
    pub location: Option<Location>,
    pub categories: Vec<Category>,
    pub distance_m: i32,
    pub open_status: OpenStatus,
    pub introduction: Option<String>,
    /// Operator's social page, opened from the detail screen.
    pub sns_url: Option<String>,
    pub feedback_count: u32,
    pub feedbacks: Vec<Feedback>,
    pub is_bookmarked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "storeType", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StoreVariant {
    StreetFood(StreetFoodStore),
    FoodTruck(FoodTruckStore),
}

impl StoreVariant {
    pub fn key(&self) -> StoreKey {
        match self {
            StoreVariant::StreetFood(store) => StoreKey::StreetFood(store.id),
            StoreVariant::FoodTruck(store) => StoreKey::FoodTruck(store.id.clone()),
        }
    }

    pub fn categories(&self) -> &[Category] {
        match self {
            StoreVariant::StreetFood(store) => &store.categories,
            StoreVariant::FoodTruck(store) => &store.categories,
        }
    }

    pub fn in_category(&self, category: &Category) -> bool {
        self.categories().iter().any(|c| c.id == category.id)
    }
}
