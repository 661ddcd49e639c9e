mod common;

use std::sync::Arc;

use common::{settle, transport_error, wait_for, within, MockServices};
use pocket::bus::EventBus;
use pocket::model::{Feedback, FoodTruckStore, Location, OpenStatus};
use pocket::mvi::Store;
use pocket::screens::food_truck_detail::{
    FoodTruckDetailEvent, FoodTruckDetailIntent, FoodTruckDetailReactor, FoodTruckDetailState,
};

const HERE: Location = Location {
    latitude: 37.5,
    longitude: 127.0,
};

fn open(services: &Arc<MockServices>, bus: &EventBus) -> Store<FoodTruckDetailReactor> {
    let reactor = FoodTruckDetailReactor::new("b-1", services.clone(), services.clone(), bus.clone());
    Store::new(reactor, FoodTruckDetailState::default())
}

fn feedback(kind: &str, count: u32) -> Feedback {
    Feedback {
        kind: kind.to_string(),
        count,
    }
}

fn truck(sns_url: Option<&str>) -> FoodTruckStore {
    FoodTruckStore {
        id: "b-1".into(),
        name: "Taco Truck".into(),
        location: Some(Location::new(37.51, 127.01)),
        open_status: OpenStatus::Open,
        sns_url: sns_url.map(str::to_string),
        feedback_count: 3,
        feedbacks: vec![feedback("FOOD_IS_DELICIOUS", 3)],
        ..FoodTruckStore::default()
    }
}

async fn loaded(
    services: &Arc<MockServices>,
    bus: &EventBus,
    store: FoodTruckStore,
) -> Store<FoodTruckDetailReactor> {
    services.location.ok(HERE);
    services.truck_detail.ok(store);
    let screen = open(services, bus);
    let mut states = screen.observe_state();
    screen.dispatch(FoodTruckDetailIntent::ViewLoaded);
    wait_for(&mut states, "truck", |s| s.store.id == "b-1" && !s.is_loading).await;
    screen
}

#[tokio::test]
async fn view_loaded_fetches_truck_from_current_location() {
    let services = MockServices::new();
    let screen = open(&services, &EventBus::default());
    let mut states = screen.observe_state();
    services.location.ok(HERE);
    services.truck_detail.ok(truck(None));

    screen.dispatch(FoodTruckDetailIntent::ViewLoaded);
    wait_for(&mut states, "loading on", |s| s.is_loading).await;
    let state = wait_for(&mut states, "loading off", |s| !s.is_loading).await;

    assert_eq!(state.store, truck(None));
    assert_eq!(state.current_location, HERE);
    assert_eq!(services.requests(), vec!["food_truck_detail:b-1:37.5:127".to_string()]);
}

#[tokio::test]
async fn location_failure_skips_the_fetch() {
    let services = MockServices::new();
    services.location.fail(transport_error());
    let screen = open(&services, &EventBus::default());
    let mut errors = screen.observe_side_channel("error");

    screen.dispatch(FoodTruckDetailIntent::ViewLoaded);
    assert_eq!(
        within("error", errors.recv()).await,
        Some(FoodTruckDetailEvent::Error(transport_error()))
    );
    settle().await;

    assert!(!screen.current_state().is_loading);
    assert_eq!(services.truck_detail.calls(), 0);
}

#[tokio::test]
async fn taps_raise_side_channel_events() {
    let services = MockServices::new();
    let screen = loaded(&services, &EventBus::default(), truck(Some("https://sns.example/taco"))).await;
    let mut events = screen.observe_events();

    screen.dispatch(FoodTruckDetailIntent::TapSns);
    assert_eq!(
        within("sns", events.recv()).await,
        Some(FoodTruckDetailEvent::OpenUrl("https://sns.example/taco".into()))
    );

    screen.dispatch(FoodTruckDetailIntent::TapShare);
    assert_eq!(
        within("share", events.recv()).await,
        Some(FoodTruckDetailEvent::Share(truck(Some("https://sns.example/taco"))))
    );

    screen.dispatch(FoodTruckDetailIntent::TapFeedback);
    assert_eq!(
        within("feedback", events.recv()).await,
        Some(FoodTruckDetailEvent::PushFeedback {
            store_id: "b-1".into()
        })
    );

    services.location.ok(Location::new(37.6, 127.1));
    screen.dispatch(FoodTruckDetailIntent::TapCurrentLocation);
    assert_eq!(
        within("camera", events.recv()).await,
        Some(FoodTruckDetailEvent::MoveCamera(Location::new(37.6, 127.1)))
    );
}

#[tokio::test]
async fn sns_tap_without_link_does_nothing() {
    let services = MockServices::new();
    let screen = loaded(&services, &EventBus::default(), truck(None)).await;
    let mut events = screen.observe_events();

    screen.dispatch(FoodTruckDetailIntent::TapSns);
    settle().await;
    assert_eq!(events.try_recv(), None);
}

#[tokio::test]
async fn sent_feedback_updates_the_breakdown() {
    let services = MockServices::new();
    let bus = EventBus::default();
    let screen = loaded(&services, &bus, truck(None)).await;
    let mut states = screen.observe_state();

    bus.feedbacks_updated.publish(vec![
        feedback("FOOD_IS_DELICIOUS", 4),
        feedback("BOSS_IS_KIND", 1),
    ]);
    let state = wait_for(&mut states, "feedbacks", |s| s.store.feedback_count == 5).await;
    assert_eq!(state.store.feedbacks[1], feedback("BOSS_IS_KIND", 1));
    assert_eq!(state.store.name, "Taco Truck");
}
