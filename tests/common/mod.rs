//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use std::collections::VecDeque;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::Semaphore;

use pocket::error::{ServiceError, ServiceResult};
use pocket::model::{
    BookmarkFolder, FoodTruckStore, Location, StoreKey, StoreVariant, StreetFoodStore, User,
    VisitHistory,
};
use pocket::mvi::Subscription;
use pocket::services::{
    BookmarkService, DeleteReason, LocationProvider, MapService, ReviewService, StoreService,
    UserService, VisitHistoryService,
};

/// How long a test waits for a state or event before failing.
pub const WAIT: Duration = Duration::from_secs(2);

/// Await `future` or panic after [`WAIT`].
pub async fn within<F: Future>(what: &str, future: F) -> F::Output {
    tokio::time::timeout(WAIT, future)
        .await
        .unwrap_or_else(|_| panic!("Timed out waiting for {}", what))
}

/// Next value matching `predicate`; panics on timeout or end of stream.
pub async fn wait_for<T, P>(subscription: &mut Subscription<T>, what: &str, predicate: P) -> T
where
    P: FnMut(&T) -> bool,
{
    within(what, subscription.wait_for(predicate))
        .await
        .unwrap_or_else(|| panic!("Stream ended before {}", what))
}

/// Let spawned tasks run for a moment.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(50)).await;
}

/// Holds a scripted reply back until opened.
#[derive(Clone)]
pub struct Gate(Arc<Semaphore>);

impl Gate {
    pub fn new() -> Self {
        Self(Arc::new(Semaphore::new(0)))
    }

    pub fn open(&self) {
        self.0.add_permits(1);
    }

    /// Wait until the gate is opened once.
    pub async fn wait(&self) {
        self.0
            .acquire()
            .await
            .expect("gate semaphore closed")
            .forget();
    }
}

struct Reply<T> {
    result: ServiceResult<T>,
    gate: Option<Gate>,
}

/// Queue of replies for one service method, consumed in call order.
pub struct Script<T> {
    name: &'static str,
    replies: Mutex<VecDeque<Reply<T>>>,
    calls: AtomicUsize,
}

impl<T> Script<T> {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            replies: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn ok(&self, value: T) -> &Self {
        self.push(Ok(value), None)
    }

    pub fn fail(&self, err: ServiceError) -> &Self {
        self.push(Err(err), None)
    }

    /// Reply with `result` once `gate` is opened.
    pub fn gated(&self, result: ServiceResult<T>, gate: &Gate) -> &Self {
        self.push(result, Some(gate.clone()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn push(&self, result: ServiceResult<T>, gate: Option<Gate>) -> &Self {
        self.replies.lock().push_back(Reply { result, gate });
        self
    }

    async fn take(&self) -> ServiceResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let reply = self.replies.lock().pop_front();
        match reply {
            Some(reply) => {
                if let Some(gate) = reply.gate {
                    gate.wait().await;
                }
                reply.result
            }
            None => Err(ServiceError::precondition(format!(
                "no scripted reply for {}",
                self.name
            ))),
        }
    }
}

/// Every collaborator in one scripted mock.
pub struct MockServices {
    pub location: Script<Location>,
    pub nearby: Script<Vec<StoreVariant>>,
    pub detail: Script<StreetFoodStore>,
    pub truck_detail: Script<FoodTruckStore>,
    pub delete_store: Script<()>,
    pub exists: Script<bool>,
    pub bookmarks: Script<BookmarkFolder>,
    pub add_bookmark: Script<()>,
    pub remove_bookmark: Script<()>,
    pub edit_folder: Script<()>,
    pub delete_review: Script<()>,
    pub user: Script<User>,
    pub visits: Script<Vec<VisitHistory>>,
    pub address: Script<String>,
    /// Arguments of every call, formatted as `method:arg:arg`.
    pub requests: Mutex<Vec<String>>,
}

impl MockServices {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            location: Script::new("current_location"),
            nearby: Script::new("nearby_stores"),
            detail: Script::new("store_detail"),
            truck_detail: Script::new("food_truck_detail"),
            delete_store: Script::new("delete_store"),
            exists: Script::new("stores_exist_around"),
            bookmarks: Script::new("my_bookmarks"),
            add_bookmark: Script::new("add_bookmark"),
            remove_bookmark: Script::new("remove_bookmark"),
            edit_folder: Script::new("edit_folder"),
            delete_review: Script::new("delete_review"),
            user: Script::new("user_activity"),
            visits: Script::new("my_visits"),
            address: Script::new("address_of"),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }

    fn record(&self, request: String) {
        self.requests.lock().push(request);
    }
}

#[async_trait]
impl LocationProvider for MockServices {
    async fn current_location(&self) -> ServiceResult<Location> {
        self.location.take().await
    }
}

#[async_trait]
impl StoreService for MockServices {
    async fn nearby_stores(
        &self,
        center: Location,
        distance_m: u32,
    ) -> ServiceResult<Vec<StoreVariant>> {
        self.record(format!(
            "nearby_stores:{}:{}:{}",
            center.latitude, center.longitude, distance_m
        ));
        self.nearby.take().await
    }

    async fn store_detail(&self, store_id: i64, from: Location) -> ServiceResult<StreetFoodStore> {
        self.record(format!(
            "store_detail:{}:{}:{}",
            store_id, from.latitude, from.longitude
        ));
        self.detail.take().await
    }

    async fn food_truck_detail(
        &self,
        store_id: &str,
        from: Location,
    ) -> ServiceResult<FoodTruckStore> {
        self.record(format!(
            "food_truck_detail:{}:{}:{}",
            store_id, from.latitude, from.longitude
        ));
        self.truck_detail.take().await
    }

    async fn delete_store(&self, store_id: i64, reason: DeleteReason) -> ServiceResult<()> {
        self.record(format!("delete_store:{}:{}", store_id, reason.as_str()));
        self.delete_store.take().await
    }

    async fn stores_exist_around(&self, center: Location, distance_m: u32) -> ServiceResult<bool> {
        self.record(format!(
            "stores_exist_around:{}:{}:{}",
            center.latitude, center.longitude, distance_m
        ));
        self.exists.take().await
    }
}

#[async_trait]
impl BookmarkService for MockServices {
    async fn my_bookmarks(&self, size: usize) -> ServiceResult<BookmarkFolder> {
        self.record(format!("my_bookmarks:{}", size));
        self.bookmarks.take().await
    }

    async fn add_bookmark(&self, store: &StoreKey) -> ServiceResult<()> {
        self.record(format!("add_bookmark:{}", store));
        self.add_bookmark.take().await
    }

    async fn remove_bookmark(&self, store: &StoreKey) -> ServiceResult<()> {
        self.record(format!("remove_bookmark:{}", store));
        self.remove_bookmark.take().await
    }

    async fn edit_folder(&self, name: &str, introduction: &str) -> ServiceResult<()> {
        self.record(format!("edit_folder:{}:{}", name, introduction));
        self.edit_folder.take().await
    }
}

#[async_trait]
impl ReviewService for MockServices {
    async fn delete_review(&self, review_id: i64) -> ServiceResult<()> {
        self.record(format!("delete_review:{}", review_id));
        self.delete_review.take().await
    }
}

#[async_trait]
impl UserService for MockServices {
    async fn user_activity(&self) -> ServiceResult<User> {
        self.user.take().await
    }
}

#[async_trait]
impl VisitHistoryService for MockServices {
    async fn my_visits(&self, size: usize) -> ServiceResult<Vec<VisitHistory>> {
        self.record(format!("my_visits:{}", size));
        self.visits.take().await
    }
}

#[async_trait]
impl MapService for MockServices {
    async fn address_of(&self, location: Location) -> ServiceResult<String> {
        self.record(format!("address_of:{}:{}", location.latitude, location.longitude));
        self.address.take().await
    }
}

pub fn street_food(id: i64, name: &str) -> StoreVariant {
    StoreVariant::StreetFood(StreetFoodStore {
        id,
        name: name.to_string(),
        location: Location::new(37.5, 127.0),
        ..StreetFoodStore::default()
    })
}

pub fn transport_error() -> ServiceError {
    ServiceError::Transport {
        message: "connection refused".to_string(),
    }
}
