//! Food truck detail.

mod intent;
mod reactor;
mod reducer;
mod state;

pub use intent::{FoodTruckDetailEvent, FoodTruckDetailIntent, FoodTruckDetailMutation};
pub use reactor::FoodTruckDetailReactor;
pub use state::FoodTruckDetailState;
