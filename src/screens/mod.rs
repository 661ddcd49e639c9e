//! Screen reactors.
//!
//! Each screen follows the same layout:
//! - `state.rs` - what the view renders
//! - `intent.rs` - intents, mutations and side-channel events
//! - `reducer.rs` - pure state transitions
//! - `reactor.rs` - intent to effect mapping and bus wiring

pub mod bookmark_edit;
pub mod food_truck_detail;
pub mod my_page;
pub mod store_detail;
pub mod store_list;
pub mod write_address;
