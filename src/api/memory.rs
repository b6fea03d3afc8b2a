//! In-memory implementation of [`RemoteStore`].
//!
//! Holds projects and tasks in `Vec`s behind a mutex and records every call
//! in the same `METHOD /path` form the HTTP client would send, so tests can
//! assert on request counts without a network. Reads take a snapshot of the
//! data when the call starts and then wait for the configured latency, which
//! lets tests interleave slow and fast responses deterministically.

use super::RemoteStore;
use crate::libs::error::{ApiError, FailureReason, Resource};
use crate::libs::project::Project;
use crate::libs::task::{Subtask, Task, TaskStatus};
use parking_lot::Mutex;
use std::time::Duration;

#[derive(Default)]
struct State {
    projects: Vec<Project>,
    tasks: Vec<Task>,
    calls: Vec<String>,
    latency: Duration,
    read_failure: Option<u16>,
    write_failure: Option<u16>,
}

#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    pub fn new(projects: Vec<Project>, tasks: Vec<Task>) -> Self {
        Self {
            state: Mutex::new(State {
                projects,
                tasks,
                ..State::default()
            }),
        }
    }

    /// Delay applied to calls started after this point.
    pub fn set_latency(&self, latency: Duration) {
        self.state.lock().latency = latency;
    }

    /// Makes every read answer with the given status (or succeed again with `None`).
    pub fn fail_reads(&self, status: Option<u16>) {
        self.state.lock().read_failure = status;
    }

    pub fn fail_writes(&self, status: Option<u16>) {
        self.state.lock().write_failure = status;
    }

    pub fn set_tasks(&self, tasks: Vec<Task>) {
        self.state.lock().tasks = tasks;
    }

    pub fn set_projects(&self, projects: Vec<Project>) {
        self.state.lock().projects = projects;
    }

    pub fn tasks_snapshot(&self) -> Vec<Task> {
        self.state.lock().tasks.clone()
    }

    /// Every call so far, e.g. `GET /tasks?projectId=p1` or `PATCH /tasks/t1`.
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().calls.clone()
    }

    /// Number of recorded calls equal to `call`.
    pub fn call_count(&self, call: &str) -> usize {
        self.state.lock().calls.iter().filter(|c| c.as_str() == call).count()
    }

    /// Records the call and returns the data snapshot the read should answer with.
    async fn read<T>(&self, call: String, resource: Resource, select: impl FnOnce(&State) -> Option<T>) -> Result<T, ApiError> {
        let (outcome, latency) = {
            let mut state = self.state.lock();
            state.calls.push(call);
            let outcome = match state.read_failure {
                Some(code) => Err(ApiError::fetch(resource.clone(), FailureReason::Status(code))),
                None => select(&state).ok_or_else(|| ApiError::fetch(resource.clone(), FailureReason::Status(404))),
            };
            (outcome, state.latency)
        };
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
        outcome
    }

    async fn write(&self, task_id: &str, resource: Resource, apply: impl FnOnce(&mut Task)) -> Result<Task, ApiError> {
        let (outcome, latency) = {
            let mut state = self.state.lock();
            state.calls.push(format!("PATCH /tasks/{}", task_id));
            let latency = state.latency;
            if let Some(code) = state.write_failure {
                (Err(ApiError::write(resource, FailureReason::Status(code))), latency)
            } else {
                match state.tasks.iter_mut().find(|t| t.id == task_id) {
                    Some(task) => {
                        apply(task);
                        (Ok(task.clone()), latency)
                    }
                    None => (Err(ApiError::write(resource, FailureReason::Status(404))), latency),
                }
            }
        };
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
        outcome
    }
}

impl RemoteStore for MemoryStore {
    fn endpoint(&self) -> &str {
        "memory"
    }

    async fn projects(&self) -> Result<Vec<Project>, ApiError> {
        self.read("GET /projects".to_string(), Resource::Projects, |s| Some(s.projects.clone()))
            .await
    }

    async fn project(&self, id: &str) -> Result<Project, ApiError> {
        self.read(format!("GET /projects/{}", id), Resource::Project(id.to_string()), |s| {
            s.projects.iter().find(|p| p.id == id).cloned()
        })
        .await
    }

    async fn tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.read("GET /tasks".to_string(), Resource::Tasks, |s| Some(s.tasks.clone())).await
    }

    async fn task(&self, id: &str) -> Result<Task, ApiError> {
        self.read(format!("GET /tasks/{}", id), Resource::Task(id.to_string()), |s| {
            s.tasks.iter().find(|t| t.id == id).cloned()
        })
        .await
    }

    async fn tasks_by_project(&self, project_id: &str) -> Result<Vec<Task>, ApiError> {
        self.read(
            format!("GET /tasks?projectId={}", project_id),
            Resource::ProjectTasks(project_id.to_string()),
            |s| Some(s.tasks.iter().filter(|t| t.project_id == project_id).cloned().collect()),
        )
        .await
    }

    async fn update_task_status(&self, task_id: &str, status: TaskStatus) -> Result<Task, ApiError> {
        self.write(task_id, Resource::TaskStatus(task_id.to_string()), |task| task.status = status)
            .await
    }

    async fn update_subtasks(&self, task_id: &str, subtasks: &[Subtask]) -> Result<Task, ApiError> {
        let subtasks = subtasks.to_vec();
        self.write(task_id, Resource::Subtasks(task_id.to_string()), |task| task.subtasks = subtasks)
            .await
    }
}
