//! Actions for the task list.

use crate::id::IdSource;
use crate::store::Action;

use super::state::{Filter, Task, TaskId};

/// Actions the task reducer handles.
///
/// Built through [`TaskActions`] in normal operation; constructing
/// variants directly is fine for tests and callers that manage ids
/// themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
    /// Append a new task. The payload arrives fully formed: the
    /// constructor pre-fills the id and `completed: false`.
    Add { task: Task },

    /// Flip `completed` on the task with this id. No-op if absent.
    Toggle { id: TaskId },

    /// Remove the task with this id. No-op if absent.
    Delete { id: TaskId },

    /// Replace the text of the task with this id. No-op if absent.
    Edit { id: TaskId, text: String },

    /// Replace the active filter. Tasks are untouched.
    SetFilter { filter: Filter },
}

impl Action for TaskAction {}

/// Action constructors bound to an id generation strategy.
///
/// Pure intent-to-action mapping: no trimming, no validation. Callers are
/// expected to pass already-trimmed, non-empty text to [`add`](Self::add)
/// and [`edit`](Self::edit).
#[derive(Debug)]
pub struct TaskActions<I: IdSource> {
    ids: I,
}

impl<I: IdSource> TaskActions<I> {
    pub fn new(ids: I) -> Self {
        Self { ids }
    }

    /// Build an `Add` action with a fresh id and `completed: false`.
    pub fn add(&mut self, text: impl Into<String>) -> TaskAction {
        TaskAction::Add {
            task: Task {
                id: self.ids.next_id(),
                text: text.into(),
                completed: false,
            },
        }
    }

    pub fn toggle(&self, id: TaskId) -> TaskAction {
        TaskAction::Toggle { id }
    }

    pub fn delete(&self, id: TaskId) -> TaskAction {
        TaskAction::Delete { id }
    }

    pub fn edit(&self, id: TaskId, text: impl Into<String>) -> TaskAction {
        TaskAction::Edit {
            id,
            text: text.into(),
        }
    }

    pub fn set_filter(&self, filter: Filter) -> TaskAction {
        TaskAction::SetFilter { filter }
    }
}
