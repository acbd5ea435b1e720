//! Model-View-Intent (MVI) primitives.
//!
//! Base traits for unidirectional data flow, plus the observable [`Store`]
//! that owns the single current state value. Nothing in this module knows
//! about terminals or rendering.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Subscribers ──→ View
//!    ↑                                              │
//!    └──────────────────────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of a feature's state
//! - **Intent**: user actions or system events
//! - **Reducer**: pure function that transforms state based on intents
//! - **Store**: holds the current state and publishes every replacement

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::StoreState;
pub use store::Store;
