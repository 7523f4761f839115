//! State for the task list.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::State;

/// Opaque task identifier.
///
/// Immutable once assigned and unique within a task list; uniqueness is
/// supplied by the [`IdSource`](crate::id::IdSource) used to mint it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

/// Which tasks the presentation layer should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Filter {
    #[default]
    All,
    Pending,
    Completed,
}

impl Filter {
    /// Whether `task` is visible under this filter.
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Pending => !task.completed,
            Filter::Completed => task.completed,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Filter::All => "ALL",
            Filter::Pending => "PENDING",
            Filter::Completed => "COMPLETED",
        };
        f.write_str(name)
    }
}

/// Error returned when parsing a filter name fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filter '{0}', expected ALL, PENDING or COMPLETED")]
pub struct ParseFilterError(pub String);

impl FromStr for Filter {
    type Err = ParseFilterError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_uppercase().as_str() {
            "ALL" => Ok(Filter::All),
            "PENDING" => Ok(Filter::Pending),
            "COMPLETED" => Ok(Filter::Completed),
            _ => Err(ParseFilterError(input.to_string())),
        }
    }
}

/// Aggregate counts over a task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskStats {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}

/// The full application state: the task sequence plus the active filter.
///
/// Tasks stay in append order and are never reordered; every transition
/// replaces the state value rather than mutating it in place.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskListState {
    pub tasks: Vec<Task>,
    pub filter: Filter,
}

impl State for TaskListState {}

impl TaskListState {
    /// First task with the given id, if any.
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Tasks visible under the active filter, in append order.
    pub fn visible(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|task| self.filter.matches(task))
    }

    /// Counts of total, pending and completed tasks.
    pub fn stats(&self) -> TaskStats {
        let completed = self.tasks.iter().filter(|task| task.completed).count();
        TaskStats {
            total: self.tasks.len(),
            pending: self.tasks.len() - completed,
            completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: u64, text: &str, completed: bool) -> Task {
        Task {
            id: TaskId::new(id),
            text: text.to_string(),
            completed,
        }
    }

    #[test]
    fn default_state_is_empty_with_all_filter() {
        let state = TaskListState::default();
        assert!(state.tasks.is_empty());
        assert_eq!(state.filter, Filter::All);
    }

    #[test]
    fn filter_matches() {
        let done = task(1, "done", true);
        let open = task(2, "open", false);

        assert!(Filter::All.matches(&done));
        assert!(Filter::All.matches(&open));
        assert!(Filter::Completed.matches(&done));
        assert!(!Filter::Completed.matches(&open));
        assert!(Filter::Pending.matches(&open));
        assert!(!Filter::Pending.matches(&done));
    }

    #[test]
    fn filter_parses_case_insensitively() {
        assert_eq!("all".parse::<Filter>(), Ok(Filter::All));
        assert_eq!("Pending".parse::<Filter>(), Ok(Filter::Pending));
        assert_eq!("COMPLETED".parse::<Filter>(), Ok(Filter::Completed));
        assert!("done".parse::<Filter>().is_err());
    }

    #[test]
    fn filter_round_trips_through_display() {
        for filter in [Filter::All, Filter::Pending, Filter::Completed] {
            assert_eq!(filter.to_string().parse::<Filter>(), Ok(filter));
        }
    }

    #[test]
    fn visible_applies_active_filter_in_order() {
        let state = TaskListState {
            tasks: vec![task(1, "a", true), task(2, "b", false), task(3, "c", true)],
            filter: Filter::Completed,
        };
        let visible: Vec<_> = state.visible().map(|t| t.id).collect();
        assert_eq!(visible, vec![TaskId::new(1), TaskId::new(3)]);
    }

    #[test]
    fn stats_count_pending_and_completed() {
        let state = TaskListState {
            tasks: vec![task(1, "a", true), task(2, "b", false), task(3, "c", false)],
            filter: Filter::All,
        };
        assert_eq!(
            state.stats(),
            TaskStats {
                total: 3,
                pending: 2,
                completed: 1
            }
        );
    }

    #[test]
    fn task_lookup_returns_first_match() {
        let state = TaskListState {
            tasks: vec![task(1, "a", false), task(2, "b", false)],
            filter: Filter::All,
        };
        assert_eq!(state.task(TaskId::new(2)).map(|t| t.text.as_str()), Some("b"));
        assert!(state.task(TaskId::new(9)).is_none());
    }

    #[test]
    fn filter_serializes_as_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&Filter::Completed).unwrap(),
            "\"COMPLETED\""
        );
    }
}
