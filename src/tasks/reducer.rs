//! Reducer for the task list.

use crate::store::Reducer;

use super::action::TaskAction;
use super::state::TaskListState;

/// Pure transition function for [`TaskListState`].
///
/// Id matching always stops at the first match, so even a list with
/// duplicated ids (which an [`IdSource`](crate::id::IdSource) should never
/// produce) has exactly one record touched per action. Actions naming an
/// absent id fall through to an equivalent state.
pub struct TaskReducer;

impl Reducer for TaskReducer {
    type State = TaskListState;
    type Action = TaskAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        let TaskListState { mut tasks, mut filter } = state;

        match action {
            TaskAction::Add { task } => {
                tasks.push(task);
            }

            TaskAction::Toggle { id } => {
                if let Some(task) = tasks.iter_mut().find(|task| task.id == id) {
                    task.completed = !task.completed;
                }
            }

            TaskAction::Delete { id } => {
                if let Some(position) = tasks.iter().position(|task| task.id == id) {
                    tasks.remove(position);
                }
            }

            TaskAction::Edit { id, text } => {
                if let Some(task) = tasks.iter_mut().find(|task| task.id == id) {
                    task.text = text;
                }
            }

            TaskAction::SetFilter { filter: next } => {
                filter = next;
            }
        }

        TaskListState { tasks, filter }
    }
}
