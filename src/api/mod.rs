//! Data access layer for the TaskFlow remote store.
//!
//! The remote store is a json-server style CRUD service with two collections,
//! `projects` and `tasks`. Everything above this module talks to it through
//! the [`RemoteStore`] trait, so the query cache and mutation pipeline can run
//! against the real HTTP client ([`TaskFlowApi`]) or, in tests, the
//! in-memory store from the `memory` module (built only with the `test-util`
//! feature).
//!
//! ## Wire contract
//!
//! | Operation             | Method | Path                    | Body                      |
//! |-----------------------|--------|-------------------------|---------------------------|
//! | List projects         | GET    | `/projects`             |                           |
//! | Get project           | GET    | `/projects/{id}`        |                           |
//! | List tasks            | GET    | `/tasks`                |                           |
//! | Get task              | GET    | `/tasks/{id}`           |                           |
//! | List tasks by project | GET    | `/tasks?projectId={id}` |                           |
//! | Update task status    | PATCH  | `/tasks/{id}`           | `{"status": ...}`         |
//! | Update subtasks       | PATCH  | `/tasks/{id}`           | `{"subtasks": [...]}`     |
//!
//! Any 2xx is success. Every other status is a failure, with no retry and no
//! status-specific handling.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskflow::api::{ApiConfig, RemoteStore, TaskFlowApi};
//!
//! # async fn run() -> Result<(), taskflow::libs::error::ApiError> {
//! let api = TaskFlowApi::new(&ApiConfig::default());
//! let tasks = api.tasks().await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::error::ApiError;
use crate::libs::project::Project;
use crate::libs::task::{Subtask, Task, TaskStatus};

#[cfg(any(test, feature = "test-util"))]
pub mod memory;
pub mod taskflow;

#[cfg(any(test, feature = "test-util"))]
pub use memory::MemoryStore;
pub use taskflow::{ApiConfig, TaskFlowApi};

/// Typed operations of the remote store.
///
/// Reads fail with [`ApiError::Fetch`] and writes with [`ApiError::Write`].
/// Writes replace only the named field on the server and return the updated
/// task. No implementation retries, times out or rolls back on its own.
#[allow(async_fn_in_trait)]
pub trait RemoteStore {
    /// Where the store lives, for error hints (the base URL for HTTP).
    fn endpoint(&self) -> &str;

    async fn projects(&self) -> Result<Vec<Project>, ApiError>;

    async fn project(&self, id: &str) -> Result<Project, ApiError>;

    async fn tasks(&self) -> Result<Vec<Task>, ApiError>;

    async fn task(&self, id: &str) -> Result<Task, ApiError>;

    /// Tasks whose `projectId` equals `project_id`.
    async fn tasks_by_project(&self, project_id: &str) -> Result<Vec<Task>, ApiError>;

    /// Replaces the task's `status`.
    async fn update_task_status(&self, task_id: &str, status: TaskStatus) -> Result<Task, ApiError>;

    /// Replaces the task's whole `subtasks` array.
    ///
    /// There is no per-item patch: callers send the full list, in order.
    async fn update_subtasks(&self, task_id: &str, subtasks: &[Subtask]) -> Result<Task, ApiError>;
}
