//! Query identities and the data stored under them.
//!
//! Every read goes through the cache under a [`QueryKey`]. Keys form a
//! hierarchy through [`QueryKey::path`]; invalidation matches by path prefix,
//! so invalidating [`QueryKey::Tasks`] also invalidates every
//! [`QueryKey::ProjectTasks`] list.

use super::error::{ApiError, FailureReason, Resource};
use super::project::Project;
use super::task::Task;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// `["projects"]`
    Projects,
    /// `["project", id]`
    Project(String),
    /// `["tasks"]`
    Tasks,
    /// `["task", id]`
    Task(String),
    /// `["tasks", "project", id]`
    ProjectTasks(String),
}

impl QueryKey {
    pub fn path(&self) -> Vec<&str> {
        match self {
            QueryKey::Projects => vec!["projects"],
            QueryKey::Project(id) => vec!["project", id.as_str()],
            QueryKey::Tasks => vec!["tasks"],
            QueryKey::Task(id) => vec!["task", id.as_str()],
            QueryKey::ProjectTasks(id) => vec!["tasks", "project", id.as_str()],
        }
    }

    /// True when `prefix`'s path is a leading segment of this key's path.
    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        let path = self.path();
        let prefix = prefix.path();
        path.len() >= prefix.len() && path.iter().zip(prefix.iter()).all(|(a, b)| a == b)
    }

    /// Resource a failed fetch of this key reports.
    pub fn resource(&self) -> Resource {
        match self {
            QueryKey::Projects => Resource::Projects,
            QueryKey::Project(id) => Resource::Project(id.clone()),
            QueryKey::Tasks => Resource::Tasks,
            QueryKey::Task(id) => Resource::Task(id.clone()),
            QueryKey::ProjectTasks(id) => Resource::ProjectTasks(id.clone()),
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.path().join(", "))
    }
}

/// Successful result of a query.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryData {
    Projects(Vec<Project>),
    Project(Project),
    Tasks(Vec<Task>),
    Task(Task),
}

impl QueryData {
    fn kind(&self) -> &'static str {
        match self {
            QueryData::Projects(_) => "project list",
            QueryData::Project(_) => "project",
            QueryData::Tasks(_) => "task list",
            QueryData::Task(_) => "task",
        }
    }
}

impl From<Vec<Project>> for QueryData {
    fn from(projects: Vec<Project>) -> Self {
        QueryData::Projects(projects)
    }
}

impl From<Project> for QueryData {
    fn from(project: Project) -> Self {
        QueryData::Project(project)
    }
}

impl From<Vec<Task>> for QueryData {
    fn from(tasks: Vec<Task>) -> Self {
        QueryData::Tasks(tasks)
    }
}

impl From<Task> for QueryData {
    fn from(task: Task) -> Self {
        QueryData::Task(task)
    }
}

/// Typed extraction of cached data for a key.
pub trait FromQueryData: Sized {
    fn from_query_data(data: QueryData, key: &QueryKey) -> Result<Self, ApiError>;
}

fn mismatch(data: &QueryData, key: &QueryKey) -> ApiError {
    ApiError::fetch(key.resource(), FailureReason::Decode(format!("cache entry {} holds a {}", key, data.kind())))
}

impl FromQueryData for Vec<Project> {
    fn from_query_data(data: QueryData, key: &QueryKey) -> Result<Self, ApiError> {
        match data {
            QueryData::Projects(projects) => Ok(projects),
            other => Err(mismatch(&other, key)),
        }
    }
}

impl FromQueryData for Project {
    fn from_query_data(data: QueryData, key: &QueryKey) -> Result<Self, ApiError> {
        match data {
            QueryData::Project(project) => Ok(project),
            other => Err(mismatch(&other, key)),
        }
    }
}

impl FromQueryData for Vec<Task> {
    fn from_query_data(data: QueryData, key: &QueryKey) -> Result<Self, ApiError> {
        match data {
            QueryData::Tasks(tasks) => Ok(tasks),
            other => Err(mismatch(&other, key)),
        }
    }
}

impl FromQueryData for Task {
    fn from_query_data(data: QueryData, key: &QueryKey) -> Result<Self, ApiError> {
        match data {
            QueryData::Task(task) => Ok(task),
            other => Err(mismatch(&other, key)),
        }
    }
}
