//! Predictable state container primitives.
//!
//! This module provides the store/dispatch/subscribe core for
//! unidirectional data flow.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Observers
//!    ↑                               │
//!    └───────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of application state
//! - **Action**: A structured description of a requested state change
//! - **Reducer**: Pure function that transforms state based on actions
//! - **Store**: Owns the current state, mediates reads, writes and
//!   change notification

mod action;
mod local;
mod reducer;
mod state;
mod sync;

pub use action::Action;
pub use local::{Store, Subscription};
pub use reducer::Reducer;
pub use state::State;
pub use sync::{SyncStore, SyncSubscription};
