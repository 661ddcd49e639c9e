use std::sync::Arc;

use futures::stream::{self, StreamExt};

use super::intent::{MyPageEvent, MyPageIntent, MyPageMutation};
use super::state::MyPageState;
use crate::bus::EventBus;
use crate::model::StoreVariant;
use crate::mvi::{Effect, Reactor, Source};
use crate::services::{BookmarkService, UserService, VisitHistoryService};

pub struct MyPageReactor {
    users: Arc<dyn UserService>,
    visits: Arc<dyn VisitHistoryService>,
    bookmarks: Arc<dyn BookmarkService>,
    bus: EventBus,
    page_size: usize,
}

impl MyPageReactor {
    pub fn new(
        users: Arc<dyn UserService>,
        visits: Arc<dyn VisitHistoryService>,
        bookmarks: Arc<dyn BookmarkService>,
        bus: EventBus,
        page_size: usize,
    ) -> Self {
        Self {
            users,
            visits,
            bookmarks,
            bus,
            page_size,
        }
    }

    /// All three sections at once. Each failure is reported on its own and
    /// leaves the other sections alone.
    fn fetch_all(&self) -> Effect<MyPageMutation> {
        let users = Arc::clone(&self.users);
        let visits = Arc::clone(&self.visits);
        let bookmarks = Arc::clone(&self.bookmarks);
        let size = self.page_size;

        Effect::merge([
            Effect::attempt(
                async move { users.user_activity().await.map(MyPageMutation::SetUser) },
                MyPageMutation::ShowError,
            ),
            Effect::attempt(
                async move {
                    visits
                        .my_visits(size)
                        .await
                        .map(MyPageMutation::SetVisitHistories)
                },
                MyPageMutation::ShowError,
            ),
            Effect::attempt(
                async move {
                    bookmarks
                        .my_bookmarks(size)
                        .await
                        .map(|folder| MyPageMutation::SetBookmarks(folder.bookmarks))
                },
                MyPageMutation::ShowError,
            ),
        ])
    }

    fn signal(event: MyPageEvent) -> Effect<MyPageMutation> {
        Effect::just(MyPageMutation::Signal(event))
    }
}

impl Reactor for MyPageReactor {
    type Intent = MyPageIntent;

    fn mutate(&self, intent: MyPageIntent, state: &MyPageState) -> Effect<MyPageMutation> {
        match intent {
            MyPageIntent::ViewLoaded => self.fetch_all(),
            MyPageIntent::Refresh => Effect::concat([
                self.fetch_all(),
                Self::signal(MyPageEvent::EndRefresh),
            ]),
            MyPageIntent::TapMedal => Self::signal(MyPageEvent::PushMedal(state.user.medal.clone())),
            MyPageIntent::TapVisitHistory { row } => match state.visit_histories.get(row) {
                Some(history) => Self::signal(MyPageEvent::PushStoreDetail {
                    store_id: history.store_id,
                }),
                None => Effect::none(),
            },
            MyPageIntent::TapBookmarkMore => Self::signal(MyPageEvent::PushBookmarkList {
                user_name: state.user.name.clone(),
            }),
            MyPageIntent::TapBookmark { row } => match state.bookmarks.get(row) {
                Some(StoreVariant::StreetFood(store)) => {
                    Self::signal(MyPageEvent::PushStoreDetail { store_id: store.id })
                }
                Some(StoreVariant::FoodTruck(store)) => {
                    Self::signal(MyPageEvent::PushFoodTruckDetail {
                        store_id: store.id.clone(),
                    })
                }
                None => Effect::none(),
            },
        }
    }

    fn effect_kind(intent: &MyPageIntent) -> Option<&'static str> {
        match intent {
            MyPageIntent::Refresh => Some("refresh"),
            _ => None,
        }
    }

    fn mutation_sources(&self) -> Vec<Source<MyPageMutation>> {
        vec![
            self.bus
                .bookmark_added
                .subscribe()
                .map(MyPageMutation::AppendBookmark)
                .boxed(),
            self.bus
                .bookmarks_deleted
                .subscribe()
                .flat_map(|keys| stream::iter(keys.into_iter().map(MyPageMutation::DeleteBookmark)))
                .boxed(),
            self.bus
                .nickname_updated
                .subscribe()
                .map(MyPageMutation::UpdateNickname)
                .boxed(),
            self.bus
                .medal_updated
                .subscribe()
                .map(MyPageMutation::UpdateMedal)
                .boxed(),
        ]
    }
}
