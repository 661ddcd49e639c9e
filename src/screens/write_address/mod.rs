//! First step of reporting a store: pick its position on the map.

mod intent;
mod reactor;
mod reducer;
mod state;

pub use intent::{WriteAddressEvent, WriteAddressIntent, WriteAddressMutation};
pub use reactor::WriteAddressReactor;
pub use state::WriteAddressState;
