//! Nearby store list (home screen list mode).

mod intent;
mod reactor;
mod reducer;
mod state;

pub use intent::{StoreListEvent, StoreListIntent, StoreListMutation};
pub use reactor::StoreListReactor;
pub use state::StoreListState;
