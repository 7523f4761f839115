//! Task list feature module.
//!
//! The domain half of the crate: the task data model, the actions that
//! change it and the reducer that applies them.
//!
//! - `state.rs` - `Task`, `Filter` and the `TaskListState` container
//! - `action.rs` - `TaskAction` plus the `TaskActions` constructors
//! - `reducer.rs` - pure state transitions

mod action;
mod reducer;
mod state;

pub use action::{TaskAction, TaskActions};
pub use reducer::TaskReducer;
pub use state::{Filter, ParseFilterError, Task, TaskId, TaskListState, TaskStats};

use crate::store::{Store, SyncStore};

/// Single-threaded task store.
pub type TaskStore = Store<TaskReducer>;

/// Thread-safe task store.
pub type SyncTaskStore = SyncStore<TaskReducer>;
