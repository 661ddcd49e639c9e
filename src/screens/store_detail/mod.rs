//! Street food store detail.

mod intent;
mod reactor;
mod reducer;
mod state;

pub use intent::{StoreDetailEvent, StoreDetailIntent, StoreDetailMutation};
pub use reactor::StoreDetailReactor;
pub use state::StoreDetailState;
