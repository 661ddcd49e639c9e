//! Wire types. Field names follow the server's camelCase JSON.

use serde::{Deserialize, Serialize};

use crate::model::{
    BookmarkFolder, Category, Feedback, FoodTruckStore, Location, Medal, OpenStatus, Photo,
    Review, StoreKey, StoreVariant, StreetFoodStore, User, VisitHistory,
};

/// Every response is wrapped in this envelope.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Envelope<T> {
    #[serde(default)]
    pub result_code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LocationDto {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CategoryDto {
    pub category_id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WriterDto {
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReviewDto {
    pub review_id: i64,
    pub rating: u8,
    pub contents: String,
    pub user: WriterDto,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ImageDto {
    pub image_id: i64,
    pub url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FeedbackDto {
    pub feedback_type: String,
    pub count: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VisitDto {
    pub visit_id: i64,
    pub store_id: i64,
    pub store_name: String,
    /// "EXISTS" or "NOT_EXISTS".
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StreetFoodDto {
    pub store_id: i64,
    pub store_name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub categories: Vec<CategoryDto>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub distance: i32,
    #[serde(default)]
    pub reviews: Vec<ReviewDto>,
    #[serde(default)]
    pub images: Vec<ImageDto>,
    #[serde(default)]
    pub visit_histories: Vec<VisitDto>,
    #[serde(default)]
    pub is_bookmarked: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OpenStatusDto {
    pub status: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FoodTruckDto {
    pub boss_store_id: String,
    pub name: String,
    #[serde(default)]
    pub location: Option<LocationDto>,
    #[serde(default)]
    pub categories: Vec<CategoryDto>,
    #[serde(default)]
    pub distance: i32,
    pub open_status: OpenStatusDto,
    #[serde(default)]
    pub introduction: Option<String>,
    #[serde(default)]
    pub sns_url: Option<String>,
    #[serde(default)]
    pub total_feedbacks_counts: u32,
    #[serde(default)]
    pub feedbacks: Vec<FeedbackDto>,
    #[serde(default)]
    pub is_bookmarked: bool,
}

/// Food truck detail: the store plus its feedback breakdown.
#[derive(Debug, Deserialize)]
pub(crate) struct FoodTruckDetailDto {
    pub store: FoodTruckDto,
    #[serde(default)]
    pub feedbacks: Vec<FeedbackDto>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "storeType", rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum StoreDto {
    StreetFood(StreetFoodDto),
    FoodTruck(FoodTruckDto),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MedalDto {
    pub medal_id: i64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserDto {
    pub user_id: i64,
    pub name: String,
    #[serde(default)]
    pub medal: Option<MedalDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BookmarkFolderDto {
    pub folder_id: String,
    pub name: String,
    #[serde(default)]
    pub introduction: String,
    #[serde(default)]
    pub bookmarks: Vec<StoreDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ExistsDto {
    pub is_exists: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EditFolderRequest<'a> {
    pub name: &'a str,
    pub introduction: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BookmarkRequest {
    pub store_type: &'static str,
    pub store_id: String,
}

impl From<&StoreKey> for BookmarkRequest {
    fn from(key: &StoreKey) -> Self {
        match key {
            StoreKey::StreetFood(id) => BookmarkRequest {
                store_type: "STORE",
                store_id: id.to_string(),
            },
            StoreKey::FoodTruck(id) => BookmarkRequest {
                store_type: "BOSS_STORE",
                store_id: id.clone(),
            },
        }
    }
}

impl From<CategoryDto> for Category {
    fn from(dto: CategoryDto) -> Self {
        Category {
            id: dto.category_id,
            name: dto.name,
        }
    }
}

impl From<ReviewDto> for Review {
    fn from(dto: ReviewDto) -> Self {
        Review {
            id: dto.review_id,
            rating: dto.rating,
            contents: dto.contents,
            writer: dto.user.name,
        }
    }
}

impl From<ImageDto> for Photo {
    fn from(dto: ImageDto) -> Self {
        Photo {
            id: dto.image_id,
            url: dto.url,
        }
    }
}

impl From<FeedbackDto> for Feedback {
    fn from(dto: FeedbackDto) -> Self {
        Feedback {
            kind: dto.feedback_type,
            count: dto.count,
        }
    }
}

impl From<VisitDto> for VisitHistory {
    fn from(dto: VisitDto) -> Self {
        VisitHistory {
            id: dto.visit_id,
            store_id: dto.store_id,
            store_name: dto.store_name,
            exists: dto.kind == "EXISTS",
        }
    }
}

impl From<StreetFoodDto> for StreetFoodStore {
    fn from(dto: StreetFoodDto) -> Self {
        StreetFoodStore {
            id: dto.store_id,
            name: dto.store_name,
            location: Location::new(dto.latitude, dto.longitude),
            categories: dto.categories.into_iter().map(Category::from).collect(),
            rating: dto.rating,
            distance_m: dto.distance,
            reviews: dto.reviews.into_iter().map(Review::from).collect(),
            photos: dto.images.into_iter().map(Photo::from).collect(),
            visit_histories: dto.visit_histories.into_iter().map(VisitHistory::from).collect(),
            is_bookmarked: dto.is_bookmarked,
        }
    }
}

impl From<FoodTruckDto> for FoodTruckStore {
    fn from(dto: FoodTruckDto) -> Self {
        FoodTruckStore {
            id: dto.boss_store_id,
            name: dto.name,
            location: dto
                .location
                .map(|location| Location::new(location.latitude, location.longitude)),
            categories: dto.categories.into_iter().map(Category::from).collect(),
            distance_m: dto.distance,
            open_status: if dto.open_status.status == "OPEN" {
                OpenStatus::Open
            } else {
                OpenStatus::Closed
            },
            introduction: dto.introduction,
            sns_url: dto.sns_url,
            feedback_count: dto.total_feedbacks_counts,
            feedbacks: dto.feedbacks.into_iter().map(Feedback::from).collect(),
            is_bookmarked: dto.is_bookmarked,
        }
    }
}

impl From<FoodTruckDetailDto> for FoodTruckStore {
    fn from(dto: FoodTruckDetailDto) -> Self {
        let feedbacks: Vec<Feedback> = dto.feedbacks.into_iter().map(Feedback::from).collect();
        FoodTruckStore {
            feedback_count: Feedback::total(&feedbacks),
            feedbacks,
            ..dto.store.into()
        }
    }
}

impl From<StoreDto> for StoreVariant {
    fn from(dto: StoreDto) -> Self {
        match dto {
            StoreDto::StreetFood(store) => StoreVariant::StreetFood(store.into()),
            StoreDto::FoodTruck(store) => StoreVariant::FoodTruck(store.into()),
        }
    }
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        User {
            id: dto.user_id,
            name: dto.name,
            medal: dto
                .medal
                .map(|medal| Medal {
                    id: medal.medal_id,
                    name: medal.name,
                })
                .unwrap_or_default(),
        }
    }
}

impl From<BookmarkFolderDto> for BookmarkFolder {
    fn from(dto: BookmarkFolderDto) -> Self {
        BookmarkFolder {
            id: dto.folder_id,
            name: dto.name,
            introduction: dto.introduction,
            bookmarks: dto.bookmarks.into_iter().map(StoreVariant::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_list_decodes_both_variants() {
        let json = r#"[
            {"storeType": "STREET_FOOD", "storeId": 1, "storeName": "Fish bread",
             "latitude": 37.5, "longitude": 127.0, "rating": 4.5, "distance": 120},
            {"storeType": "FOOD_TRUCK", "bossStoreId": "b-1", "name": "Taco Truck",
             "openStatus": {"status": "OPEN"}, "totalFeedbacksCounts": 3}
        ]"#;
        let stores: Vec<StoreDto> = serde_json::from_str(json).unwrap();
        let stores: Vec<StoreVariant> = stores.into_iter().map(StoreVariant::from).collect();

        match &stores[0] {
            StoreVariant::StreetFood(store) => {
                assert_eq!(store.id, 1);
                assert_eq!(store.distance_m, 120);
            }
            other => panic!("Expected street food store, got {:?}", other),
        }
        match &stores[1] {
            StoreVariant::FoodTruck(store) => {
                assert_eq!(store.open_status, OpenStatus::Open);
                assert_eq!(store.feedback_count, 3);
                assert_eq!(store.location, None);
            }
            other => panic!("Expected food truck, got {:?}", other),
        }
    }

    #[test]
    fn visit_type_maps_to_exists_flag() {
        let json = r#"{"visitId": 3, "storeId": 9, "storeName": "Hotteok", "type": "NOT_EXISTS"}"#;
        let visit: VisitHistory = serde_json::from_str::<VisitDto>(json).unwrap().into();
        assert!(!visit.exists);
        assert_eq!(visit.store_id, 9);
    }

    #[test]
    fn bookmark_request_uses_server_store_types() {
        let request = BookmarkRequest::from(&StoreKey::FoodTruck("b-1".into()));
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["storeType"], "BOSS_STORE");
        assert_eq!(json["storeId"], "b-1");
    }

    #[test]
    fn truck_detail_counts_its_feedbacks() {
        let json = r#"{
            "store": {"bossStoreId": "b-2", "name": "Crepe Truck",
                      "openStatus": {"status": "CLOSED"}, "snsUrl": "https://sns.example/crepe"},
            "feedbacks": [{"feedbackType": "FOOD_IS_DELICIOUS", "count": 4},
                          {"feedbackType": "BOSS_IS_KIND", "count": 2}]
        }"#;
        let store: FoodTruckStore = serde_json::from_str::<FoodTruckDetailDto>(json)
            .unwrap()
            .into();
        assert_eq!(store.id, "b-2");
        assert_eq!(store.sns_url.as_deref(), Some("https://sns.example/crepe"));
        assert_eq!(store.feedback_count, 6);
        assert_eq!(store.feedbacks[1].kind, "BOSS_IS_KIND");
    }

    #[test]
    fn user_without_medal_gets_default() {
        let json = r#"{"userId": 5, "name": "kim"}"#;
        let user: User = serde_json::from_str::<UserDto>(json).unwrap().into();
        assert_eq!(user.medal, Medal::default());
    }
}
