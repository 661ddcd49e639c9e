use std::sync::Arc;

use super::intent::{BookmarkEditIntent, BookmarkEditMutation};
use super::state::BookmarkEditState;
use crate::mvi::{Effect, Reactor};
use crate::services::BookmarkService;

pub struct BookmarkEditReactor {
    bookmarks: Arc<dyn BookmarkService>,
}

impl BookmarkEditReactor {
    pub fn new(bookmarks: Arc<dyn BookmarkService>) -> Self {
        Self { bookmarks }
    }
}

impl Reactor for BookmarkEditReactor {
    type Intent = BookmarkEditIntent;

    fn mutate(
        &self,
        intent: BookmarkEditIntent,
        state: &BookmarkEditState,
    ) -> Effect<BookmarkEditMutation> {
        match intent {
            BookmarkEditIntent::EditTitle(title) => Effect::just(BookmarkEditMutation::SetTitle(title)),
            BookmarkEditIntent::EditDescription(description) => {
                Effect::just(BookmarkEditMutation::SetDescription(description))
            }
            BookmarkEditIntent::Save => {
                let bookmarks = Arc::clone(&self.bookmarks);
                let name = state.folder.name.clone();
                let introduction = state.folder.introduction.clone();
                Effect::concat([
                    Effect::just(BookmarkEditMutation::SetLoading(true)),
                    Effect::attempt(
                        async move {
                            bookmarks
                                .edit_folder(&name, &introduction)
                                .await
                                .map(|()| BookmarkEditMutation::Saved)
                        },
                        BookmarkEditMutation::ShowError,
                    ),
                    Effect::just(BookmarkEditMutation::SetLoading(false)),
                ])
            }
        }
    }

    fn effect_kind(intent: &BookmarkEditIntent) -> Option<&'static str> {
        match intent {
            BookmarkEditIntent::Save => Some("save"),
            _ => None,
        }
    }
}
