//! Predictable state container backing a task list.
//!
//! A single store holds the application state, accepts typed actions and
//! computes the next state through a pure reducer, then synchronously
//! notifies subscribed observers. Presentation layers are external
//! consumers of the `get_state` / `dispatch` / `subscribe` contract.
//!
//! ```
//! use taskstore::id::SequentialIds;
//! use taskstore::tasks::{Filter, TaskActions, TaskStore};
//!
//! let store = TaskStore::new();
//! let mut actions = TaskActions::new(SequentialIds::default());
//!
//! store.dispatch(actions.add("Buy milk"));
//! let added = store.get_state().tasks[0].id;
//! store.dispatch(actions.toggle(added));
//! store.dispatch(actions.set_filter(Filter::Completed));
//!
//! let visible = store.select(|state| state.visible().count());
//! assert_eq!(visible, 1);
//! ```

pub mod commands;
pub mod id;
pub mod logging;
pub mod store;
pub mod tasks;
