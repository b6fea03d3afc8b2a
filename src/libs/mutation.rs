//! Mutation pipeline: write, then invalidate.
//!
//! Writes never patch cached data. A successful write marks the affected
//! query keys stale and the next read of those keys refetches from the store
//! (optimistic-via-refetch). A failed write invalidates nothing, so the
//! previously fetched state stays on screen; the error is returned to the
//! caller and nothing is retried or rolled back.
//!
//! Completion toggling flips between `done` and `todo` only. Subtask toggling
//! rebuilds the full subtask array and sends it as one replacement.

use super::client::QueryClient;
use super::error::ApiError;
use super::query::QueryKey;
use super::task::{Subtask, Task, TaskStatus};
use crate::api::RemoteStore;
use tracing::{debug, warn};

/// Outcome of one mutation invocation.
///
/// `Idle` means no write was sent. While a write is pending the caller is
/// awaiting it, so there is no separate variant for that.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MutationState {
    #[default]
    Idle,
    Success(Task),
    Error(ApiError),
}

impl MutationState {
    pub fn is_error(&self) -> bool {
        matches!(self, MutationState::Error(_))
    }
}

impl From<Result<Task, ApiError>> for MutationState {
    fn from(result: Result<Task, ApiError>) -> Self {
        match result {
            Ok(task) => MutationState::Success(task),
            Err(e) => MutationState::Error(e),
        }
    }
}

/// Status a completion toggle writes for a task currently in `current`.
pub fn toggled_status(current: TaskStatus) -> TaskStatus {
    current.toggled()
}

/// Copy of `subtasks` with the `completed` flag of `subtask_id` flipped.
///
/// Order, ids and titles are preserved. An unknown id yields an unchanged copy.
pub fn toggle_subtask(subtasks: &[Subtask], subtask_id: &str) -> Vec<Subtask> {
    subtasks
        .iter()
        .map(|s| {
            if s.id == subtask_id {
                Subtask {
                    completed: !s.completed,
                    ..s.clone()
                }
            } else {
                s.clone()
            }
        })
        .collect()
}

/// Keys a status write may have changed. `["tasks"]` covers every project task list.
pub fn status_write_keys(task_id: &str) -> Vec<QueryKey> {
    vec![QueryKey::Tasks, QueryKey::Task(task_id.to_string())]
}

/// Keys a subtask write may have changed.
pub fn subtask_write_keys(task_id: &str) -> Vec<QueryKey> {
    vec![QueryKey::Task(task_id.to_string()), QueryKey::Tasks]
}

impl<S: RemoteStore> QueryClient<S> {
    fn commit(&self, result: Result<Task, ApiError>, keys: Vec<QueryKey>) -> Result<Task, ApiError> {
        match result {
            Ok(task) => {
                for key in &keys {
                    self.invalidate(key);
                }
                debug!(task = %task.id, "mutation succeeded");
                Ok(task)
            }
            Err(e) => {
                warn!(error = %e, "mutation failed");
                Err(e)
            }
        }
    }

    /// Writes `status` for `task_id` and invalidates the task queries.
    pub async fn set_task_status(&self, task_id: &str, status: TaskStatus) -> Result<Task, ApiError> {
        let result = self.store().update_task_status(task_id, status).await;
        self.commit(result, status_write_keys(task_id))
    }

    /// Flips completion of a task whose displayed status is `current`.
    pub async fn toggle_task(&self, task_id: &str, current: TaskStatus) -> Result<Task, ApiError> {
        self.set_task_status(task_id, toggled_status(current)).await
    }

    /// Flips one subtask of `task` and writes the whole array back.
    pub async fn toggle_subtask(&self, task: &Task, subtask_id: &str) -> Result<Task, ApiError> {
        let subtasks = toggle_subtask(&task.subtasks, subtask_id);
        let result = self.store().update_subtasks(&task.id, &subtasks).await;
        self.commit(result, subtask_write_keys(&task.id))
    }
}
