//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides the reactive state container every screen is
//! built on, plus the traits a screen implements to specialize it.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reactor::mutate ──→ Effect ──→ Mutation ──→ Reducer ──→ State ──→ View
//!    ↑                                         ↑              │                   │
//!    │                                     event bus          └──→ side channel   │
//!    └────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of what the view renders
//! - **Intent**: User actions or system events
//! - **Effect**: Asynchronous work resolving into mutations
//! - **Mutation**: Atomic state transition
//! - **Reducer**: Pure function that folds a mutation into the state

mod effect;
mod intent;
mod reactor;
mod reducer;
mod state;
mod store;
mod subscription;

pub use effect::Effect;
pub use intent::{Intent, SideChannel};
pub use reactor::{Reactor, Source};
pub use reducer::{Outbox, Reducer};
pub use state::{Mutation, UiState};
pub use store::{Store, StoreOptions};
pub use subscription::Subscription;
