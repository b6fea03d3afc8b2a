//! Failure taxonomy of the data access layer.
//!
//! Reads fail with [`ApiError::Fetch`], writes with [`ApiError::Write`]. Both
//! name the resource involved and why the call failed. Errors are `Clone`
//! because the query cache hands the same failure to every reader of a key.

use std::fmt;
use thiserror::Error;

/// The remote resource a request was addressing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    Projects,
    Project(String),
    Tasks,
    Task(String),
    ProjectTasks(String),
    TaskStatus(String),
    Subtasks(String),
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Projects => write!(f, "projects"),
            Resource::Project(id) => write!(f, "project '{}'", id),
            Resource::Tasks => write!(f, "tasks"),
            Resource::Task(id) => write!(f, "task '{}'", id),
            Resource::ProjectTasks(id) => write!(f, "tasks of project '{}'", id),
            Resource::TaskStatus(id) => write!(f, "status of task '{}'", id),
            Resource::Subtasks(id) => write!(f, "subtasks of task '{}'", id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The store answered with a non-2xx status.
    Status(u16),
    /// The request never got a response.
    Transport(String),
    /// The response body was not the expected JSON.
    Decode(String),
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Status(code) => write!(f, "server responded with status {}", code),
            FailureReason::Transport(e) => write!(f, "request failed: {}", e),
            FailureReason::Decode(e) => write!(f, "unexpected response body: {}", e),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Failed to fetch {resource}: {reason}")]
    Fetch { resource: Resource, reason: FailureReason },

    #[error("Failed to update {resource}: {reason}")]
    Write { resource: Resource, reason: FailureReason },
}

impl ApiError {
    pub fn fetch(resource: Resource, reason: FailureReason) -> Self {
        ApiError::Fetch { resource, reason }
    }

    pub fn write(resource: Resource, reason: FailureReason) -> Self {
        ApiError::Write { resource, reason }
    }

    pub fn resource(&self) -> &Resource {
        match self {
            ApiError::Fetch { resource, .. } | ApiError::Write { resource, .. } => resource,
        }
    }

    pub fn reason(&self) -> &FailureReason {
        match self {
            ApiError::Fetch { reason, .. } | ApiError::Write { reason, .. } => reason,
        }
    }

    pub fn is_fetch(&self) -> bool {
        matches!(self, ApiError::Fetch { .. })
    }

    pub fn is_write(&self) -> bool {
        matches!(self, ApiError::Write { .. })
    }
}
