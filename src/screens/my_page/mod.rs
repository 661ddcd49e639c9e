//! My page: profile, visit histories and a bookmark preview.

mod intent;
mod reactor;
mod reducer;
mod state;

pub use intent::{MyPageEvent, MyPageIntent, MyPageMutation};
pub use reactor::MyPageReactor;
pub use state::MyPageState;
