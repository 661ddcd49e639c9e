//! Bookmark folder title and description editor.

mod intent;
mod reactor;
mod reducer;
mod state;

pub use intent::{BookmarkEditEvent, BookmarkEditIntent, BookmarkEditMutation};
pub use reactor::BookmarkEditReactor;
pub use state::BookmarkEditState;
