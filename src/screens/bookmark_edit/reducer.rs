use super::intent::{BookmarkEditEvent, BookmarkEditMutation};
use super::reactor::BookmarkEditReactor;
use super::state::BookmarkEditState;
use crate::mvi::{Outbox, Reducer};

impl Reducer for BookmarkEditReactor {
    type State = BookmarkEditState;
    type Mutation = BookmarkEditMutation;
    type Event = BookmarkEditEvent;

    fn reduce(
        mut state: BookmarkEditState,
        mutation: BookmarkEditMutation,
        outbox: &mut Outbox<BookmarkEditEvent>,
    ) -> BookmarkEditState {
        match mutation {
            BookmarkEditMutation::SetTitle(title) => state.folder.name = title,
            BookmarkEditMutation::SetDescription(description) => {
                state.folder.introduction = description
            }
            BookmarkEditMutation::SetLoading(is_loading) => state.is_loading = is_loading,
            BookmarkEditMutation::Saved => outbox.emit(BookmarkEditEvent::Pop),
            BookmarkEditMutation::ShowError(err) => outbox.emit(BookmarkEditEvent::Error(err)),
        }
        state
    }
}
