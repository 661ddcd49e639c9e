mod common;

use std::sync::Arc;

use common::{settle, street_food, transport_error, wait_for, within, MockServices};
use pocket::bus::EventBus;
use pocket::model::{BookmarkFolder, Medal, StoreKey, User, VisitHistory};
use pocket::mvi::Store;
use pocket::screens::my_page::{MyPageEvent, MyPageIntent, MyPageReactor, MyPageState};

fn open(services: &Arc<MockServices>, bus: &EventBus) -> Store<MyPageReactor> {
    let reactor = MyPageReactor::new(
        services.clone(),
        services.clone(),
        services.clone(),
        bus.clone(),
        5,
    );
    Store::new(reactor, MyPageState::default())
}

fn user(name: &str) -> User {
    User {
        id: 1,
        name: name.to_string(),
        medal: Medal {
            id: 3,
            name: "Explorer".into(),
        },
    }
}

fn folder(bookmarks: Vec<pocket::model::StoreVariant>) -> BookmarkFolder {
    BookmarkFolder {
        id: "folder-1".into(),
        name: "Favorites".into(),
        introduction: String::new(),
        bookmarks,
    }
}

fn script_all(services: &MockServices) {
    services.user.ok(user("kim"));
    services.visits.ok(vec![VisitHistory {
        id: 10,
        store_id: 4,
        store_name: "Bungeoppang".into(),
        exists: true,
    }]);
    services.bookmarks.ok(folder(vec![street_food(1, "A")]));
}

#[tokio::test]
async fn view_loaded_fetches_profile_visits_and_bookmarks() {
    let services = MockServices::new();
    script_all(&services);
    let store = open(&services, &EventBus::default());
    let mut states = store.observe_state();

    store.dispatch(MyPageIntent::ViewLoaded);
    let state = wait_for(&mut states, "all sections", |s| {
        !s.user.name.is_empty() && !s.visit_histories.is_empty() && !s.bookmarks.is_empty()
    })
    .await;

    assert_eq!(state.user, user("kim"));
    assert_eq!(state.bookmarks, vec![street_food(1, "A")]);
    let requests = services.requests();
    assert!(requests.contains(&"my_visits:5".to_string()));
    assert!(requests.contains(&"my_bookmarks:5".to_string()));
}

#[tokio::test]
async fn added_bookmark_is_appended() {
    let services = MockServices::new();
    let bus = EventBus::default();
    script_all(&services);
    let store = open(&services, &bus);
    let mut states = store.observe_state();

    store.dispatch(MyPageIntent::ViewLoaded);
    wait_for(&mut states, "bookmarks", |s| s.bookmarks.len() == 1).await;

    bus.bookmark_added.publish(street_food(2, "B"));
    let state = wait_for(&mut states, "appended", |s| s.bookmarks.len() == 2).await;
    assert_eq!(state.bookmarks, vec![street_food(1, "A"), street_food(2, "B")]);
}

#[tokio::test]
async fn deleted_bookmarks_are_removed() {
    let services = MockServices::new();
    let bus = EventBus::default();
    services.user.ok(user("kim"));
    services.visits.ok(Vec::new());
    services.bookmarks.ok(folder(vec![
        street_food(1, "A"),
        street_food(2, "B"),
        street_food(3, "C"),
    ]));
    let store = open(&services, &bus);
    let mut states = store.observe_state();

    store.dispatch(MyPageIntent::ViewLoaded);
    wait_for(&mut states, "bookmarks", |s| s.bookmarks.len() == 3).await;

    bus.bookmarks_deleted
        .publish(vec![StoreKey::StreetFood(1), StoreKey::StreetFood(3)]);
    let state = wait_for(&mut states, "removed", |s| s.bookmarks.len() == 1).await;
    assert_eq!(state.bookmarks, vec![street_food(2, "B")]);
}

#[tokio::test]
async fn profile_updates_from_other_screens() {
    let services = MockServices::new();
    let bus = EventBus::default();
    let store = open(&services, &bus);
    let mut states = store.observe_state();

    bus.nickname_updated.publish("lee".into());
    wait_for(&mut states, "nickname", |s| s.user.name == "lee").await;

    let medal = Medal {
        id: 9,
        name: "Regular".into(),
    };
    bus.medal_updated.publish(medal.clone());
    let state = wait_for(&mut states, "medal", |s| s.user.medal.id == 9).await;
    assert_eq!(state.user.medal, medal);
    assert_eq!(state.user.name, "lee");
}

#[tokio::test]
async fn refresh_ends_after_every_section() {
    let services = MockServices::new();
    script_all(&services);
    let store = open(&services, &EventBus::default());
    let mut end = store.observe_side_channel("end_refresh");

    store.dispatch(MyPageIntent::Refresh);
    let event = within("end of refresh", end.recv()).await;
    assert_eq!(event, Some(MyPageEvent::EndRefresh));

    let state = store.current_state();
    assert_eq!(state.user.name, "kim");
    assert_eq!(state.visit_histories.len(), 1);
    assert_eq!(state.bookmarks.len(), 1);
}

#[tokio::test]
async fn one_failing_section_leaves_the_others() {
    let services = MockServices::new();
    services.user.fail(transport_error());
    services.visits.ok(Vec::new());
    services.bookmarks.ok(folder(vec![street_food(1, "A")]));
    let store = open(&services, &EventBus::default());
    let mut states = store.observe_state();
    let mut errors = store.observe_side_channel("error");

    store.dispatch(MyPageIntent::ViewLoaded);
    let error = within("error", errors.recv()).await;
    assert_eq!(error, Some(MyPageEvent::Error(transport_error())));
    wait_for(&mut states, "bookmarks", |s| s.bookmarks.len() == 1).await;
    settle().await;

    assert_eq!(store.current_state().user, User::default());
    assert_eq!(errors.try_recv(), None);
}

#[tokio::test]
async fn taps_route_to_the_matching_screen() {
    let services = MockServices::new();
    script_all(&services);
    let store = open(&services, &EventBus::default());
    let mut states = store.observe_state();
    let mut events = store.observe_events();

    store.dispatch(MyPageIntent::ViewLoaded);
    wait_for(&mut states, "all sections", |s| {
        !s.user.name.is_empty() && !s.visit_histories.is_empty() && !s.bookmarks.is_empty()
    })
    .await;

    store.dispatch(MyPageIntent::TapVisitHistory { row: 0 });
    assert_eq!(
        within("visit push", events.recv()).await,
        Some(MyPageEvent::PushStoreDetail { store_id: 4 })
    );

    store.dispatch(MyPageIntent::TapBookmarkMore);
    assert_eq!(
        within("bookmark list push", events.recv()).await,
        Some(MyPageEvent::PushBookmarkList {
            user_name: "kim".into()
        })
    );

    store.dispatch(MyPageIntent::TapMedal);
    assert_eq!(
        within("medal push", events.recv()).await,
        Some(MyPageEvent::PushMedal(user("kim").medal))
    );

    // Rows past the end are ignored.
    store.dispatch(MyPageIntent::TapBookmark { row: 7 });
    settle().await;
    assert_eq!(events.try_recv(), None);
}
