use super::intent::{MyPageEvent, MyPageMutation};
use super::reactor::MyPageReactor;
use super::state::MyPageState;
use crate::mvi::{Outbox, Reducer};

impl Reducer for MyPageReactor {
    type State = MyPageState;
    type Mutation = MyPageMutation;
    type Event = MyPageEvent;

    fn reduce(
        mut state: MyPageState,
        mutation: MyPageMutation,
        outbox: &mut Outbox<MyPageEvent>,
    ) -> MyPageState {
        match mutation {
            MyPageMutation::SetUser(user) => state.user = user,
            MyPageMutation::UpdateNickname(name) => state.user.name = name,
            MyPageMutation::UpdateMedal(medal) => state.user.medal = medal,
            MyPageMutation::SetVisitHistories(histories) => state.visit_histories = histories,
            MyPageMutation::SetBookmarks(bookmarks) => state.bookmarks = bookmarks,
            MyPageMutation::AppendBookmark(store) => state.bookmarks.push(store),
            // Only the first match goes; duplicates are left for the next delete.
            MyPageMutation::DeleteBookmark(key) => {
                if let Some(index) = state.bookmarks.iter().position(|store| store.key() == key) {
                    state.bookmarks.remove(index);
                }
            }
            MyPageMutation::Signal(event) => outbox.emit(event),
            MyPageMutation::ShowError(err) => outbox.emit(MyPageEvent::Error(err)),
        }
        state
    }
}
