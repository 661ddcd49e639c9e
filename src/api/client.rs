use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::time::timeout;

use super::dto::{
    BookmarkFolderDto, BookmarkRequest, EditFolderRequest, Envelope, ExistsDto,
    FoodTruckDetailDto, StoreDto, StreetFoodDto, UserDto, VisitDto,
};
use crate::config::ApiConfig;
use crate::error::{ServiceError, ServiceResult};
use crate::model::{
    BookmarkFolder, FoodTruckStore, Location, StoreKey, StoreVariant, StreetFoodStore, User,
    VisitHistory,
};
use crate::services::{
    BookmarkService, DeleteReason, ReviewService, StoreService, UserService, VisitHistoryService,
};

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ServiceError::Decode {
                message: err.to_string(),
            }
        } else {
            ServiceError::Transport {
                message: err.to_string(),
            }
        }
    }
}

/// REST client for the vendor API.
///
/// Cheap to share behind an `Arc`; `reqwest::Client` pools connections.
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
    request_timeout: Duration,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> ServiceResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            request_timeout: Duration::from_secs(config.timeout_seconds.into()),
        })
    }

    fn url(&self, path: &str, query: &[(&str, String)]) -> ServiceResult<Url> {
        let raw = format!("{}{}", self.base_url, path);
        let parsed = if query.is_empty() {
            Url::parse(&raw)
        } else {
            Url::parse_with_params(&raw, query)
        };
        parsed.map_err(|e| ServiceError::invalid(format!("Invalid request URL {}: {}", raw, e)))
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        tracing::debug!(%method, %url, "api request");
        let builder = self.client.request(method, url);
        match &self.token {
            Some(token) => builder.header(AUTHORIZATION, token),
            None => builder,
        }
    }

    /// Send and unwrap the envelope's `data`.
    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ServiceResult<T> {
        let body = self.execute(builder).await?;
        let envelope: Envelope<T> =
            serde_json::from_str(&body).map_err(|e| ServiceError::Decode {
                message: e.to_string(),
            })?;
        envelope.data.ok_or_else(|| ServiceError::Decode {
            message: "response has no data".to_string(),
        })
    }

    /// Send a request whose response body carries nothing of interest.
    async fn send_empty(&self, builder: RequestBuilder) -> ServiceResult<()> {
        self.execute(builder).await.map(|_| ())
    }

    /// Send and read the whole body under one deadline. A server that
    /// answers headers and then stalls the body still times out.
    async fn execute(&self, builder: RequestBuilder) -> ServiceResult<String> {
        let round_trip = async {
            let response = builder.send().await?;
            let status = response.status();
            let body = response.text().await.map_err(|e| ServiceError::Transport {
                message: format!("failed to read response body: {}", e),
            })?;
            Ok::<_, ServiceError>((status, body))
        };
        let (status, body) = match timeout(self.request_timeout, round_trip).await {
            Ok(result) => result?,
            Err(_) => {
                tracing::warn!(
                    timeout_secs = self.request_timeout.as_secs(),
                    "api request timed out"
                );
                return Err(ServiceError::Transport {
                    message: format!(
                        "request timed out after {}s",
                        self.request_timeout.as_secs()
                    ),
                });
            }
        };
        if status.is_success() {
            return Ok(body);
        }

        let message = serde_json::from_str::<Envelope<serde_json::Value>>(&body)
            .ok()
            .and_then(|envelope| {
                if let Some(code) = &envelope.result_code {
                    tracing::debug!(status = status.as_u16(), code, "api rejected request");
                }
                envelope.message
            })
            .unwrap_or_else(|| status.to_string());
        tracing::warn!(status = status.as_u16(), %message, "api request failed");
        Err(ServiceError::Rejected {
            status: status.as_u16(),
            message,
        })
    }

    async fn send_json<B: Serialize + Sync>(
        &self,
        method: Method,
        url: Url,
        body: &B,
    ) -> ServiceResult<()> {
        self.send_empty(self.request(method, url).json(body)).await
    }
}

#[async_trait]
impl StoreService for ApiClient {
    async fn nearby_stores(
        &self,
        center: Location,
        distance_m: u32,
    ) -> ServiceResult<Vec<StoreVariant>> {
        let url = self.url(
            "/api/v2/stores/near",
            &[
                ("latitude", center.latitude.to_string()),
                ("longitude", center.longitude.to_string()),
                ("distance", distance_m.to_string()),
            ],
        )?;
        let stores: Vec<StoreDto> = self.send(self.request(Method::GET, url)).await?;
        Ok(stores.into_iter().map(StoreVariant::from).collect())
    }

    async fn store_detail(&self, store_id: i64, from: Location) -> ServiceResult<StreetFoodStore> {
        let url = self.url(
            "/api/v2/store",
            &[
                ("storeId", store_id.to_string()),
                ("latitude", from.latitude.to_string()),
                ("longitude", from.longitude.to_string()),
            ],
        )?;
        let store: StreetFoodDto = self.send(self.request(Method::GET, url)).await?;
        Ok(store.into())
    }

    async fn food_truck_detail(
        &self,
        store_id: &str,
        from: Location,
    ) -> ServiceResult<FoodTruckStore> {
        let url = self.url(
            &format!("/api/v1/boss/store/{}", store_id),
            &[
                ("latitude", from.latitude.to_string()),
                ("longitude", from.longitude.to_string()),
            ],
        )?;
        let store: FoodTruckDetailDto = self.send(self.request(Method::GET, url)).await?;
        Ok(store.into())
    }

    async fn delete_store(&self, store_id: i64, reason: DeleteReason) -> ServiceResult<()> {
        let url = self.url(
            &format!("/api/v2/store/{}", store_id),
            &[("deleteReasonType", reason.as_str().to_string())],
        )?;
        self.send_empty(self.request(Method::DELETE, url)).await
    }

    async fn stores_exist_around(&self, center: Location, distance_m: u32) -> ServiceResult<bool> {
        let url = self.url(
            "/api/v1/stores/near/exists",
            &[
                ("distance", distance_m.to_string()),
                ("mapLatitude", center.latitude.to_string()),
                ("mapLongitude", center.longitude.to_string()),
            ],
        )?;
        let exists: ExistsDto = self.send(self.request(Method::GET, url)).await?;
        Ok(exists.is_exists)
    }
}

#[async_trait]
impl BookmarkService for ApiClient {
    async fn my_bookmarks(&self, size: usize) -> ServiceResult<BookmarkFolder> {
        let url = self.url("/api/v1/my/bookmarks", &[("size", size.to_string())])?;
        let folder: BookmarkFolderDto = self.send(self.request(Method::GET, url)).await?;
        Ok(folder.into())
    }

    async fn add_bookmark(&self, store: &StoreKey) -> ServiceResult<()> {
        let url = self.url("/api/v1/bookmark/store", &[])?;
        self.send_json(Method::POST, url, &BookmarkRequest::from(store))
            .await
    }

    async fn remove_bookmark(&self, store: &StoreKey) -> ServiceResult<()> {
        let url = self.url("/api/v1/bookmark/store", &[])?;
        self.send_json(Method::DELETE, url, &BookmarkRequest::from(store))
            .await
    }

    async fn edit_folder(&self, name: &str, introduction: &str) -> ServiceResult<()> {
        let url = self.url("/api/v1/bookmark/folder", &[])?;
        self.send_json(Method::PUT, url, &EditFolderRequest { name, introduction })
            .await
    }
}

#[async_trait]
impl ReviewService for ApiClient {
    async fn delete_review(&self, review_id: i64) -> ServiceResult<()> {
        let url = self.url(&format!("/api/v2/store/review/{}", review_id), &[])?;
        self.send_empty(self.request(Method::DELETE, url)).await
    }
}

#[async_trait]
impl UserService for ApiClient {
    async fn user_activity(&self) -> ServiceResult<User> {
        let url = self.url("/api/v1/user/me/activity", &[])?;
        let user: UserDto = self.send(self.request(Method::GET, url)).await?;
        Ok(user.into())
    }
}

#[async_trait]
impl VisitHistoryService for ApiClient {
    async fn my_visits(&self, size: usize) -> ServiceResult<Vec<VisitHistory>> {
        let url = self.url("/api/v2/store/visits/me", &[("size", size.to_string())])?;
        let visits: Vec<VisitDto> = self.send(self.request(Method::GET, url)).await?;
        Ok(visits.into_iter().map(VisitHistory::from).collect())
    }
}
