//! HTTP client for the TaskFlow remote store.
//!
//! Wraps a [`reqwest::Client`] bound to the configured base URL. Each method
//! maps to exactly one request; responses outside the 2xx range, transport
//! errors and undecodable bodies all become typed [`ApiError`]s naming the
//! resource that was being read or written.
//!
//! Ids are pushed onto the base URL as percent-encoded path segments, so an
//! id such as `a?b` is requested as `/tasks/a%3Fb`.

use super::RemoteStore;
use crate::libs::config::ConfigModule;
use crate::libs::data_storage::APP_METADATA_DEFAULT_API_URL;
use crate::libs::error::{ApiError, FailureReason, Resource};
use crate::libs::messages::Message;
use crate::libs::project::Project;
use crate::libs::task::{Subtask, Task, TaskStatus};
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Remote store client.
///
/// Cheap to clone: the underlying `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct TaskFlowApi {
    client: Client,
    config: ApiConfig,
}

#[derive(Serialize)]
struct StatusPatch {
    status: TaskStatus,
}

#[derive(Serialize)]
struct SubtasksPatch<'a> {
    subtasks: &'a [Subtask],
}

impl TaskFlowApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        self.config.api_url.trim_end_matches('/')
    }

    /// Base URL with `segments` appended, each one percent-encoded.
    fn url(&self, segments: &[&str]) -> Result<Url, FailureReason> {
        let base = self.base_url();
        let mut url = Url::parse(base).map_err(|e| FailureReason::Transport(format!("invalid base URL '{}': {}", base, e)))?;
        url.path_segments_mut()
            .map_err(|_| FailureReason::Transport(format!("base URL '{}' cannot take a path", base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn read<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
        resource: Resource,
    ) -> Result<T, ApiError> {
        let url = self.url(segments).map_err(|reason| ApiError::fetch(resource.clone(), reason))?;
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::fetch(resource.clone(), FailureReason::Transport(e.to_string())))?;

        let status = response.status();
        debug!(%resource, status = status.as_u16(), "remote store read");
        if !status.is_success() {
            return Err(ApiError::fetch(resource, FailureReason::Status(status.as_u16())));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::fetch(resource, FailureReason::Decode(e.to_string())))
    }

    async fn write<B: Serialize + ?Sized>(&self, task_id: &str, body: &B, resource: Resource) -> Result<Task, ApiError> {
        let url = self
            .url(&["tasks", task_id])
            .map_err(|reason| ApiError::write(resource.clone(), reason))?;
        let response = self
            .client
            .patch(url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::write(resource.clone(), FailureReason::Transport(e.to_string())))?;

        let status = response.status();
        debug!(%resource, status = status.as_u16(), "remote store write");
        if !status.is_success() {
            return Err(ApiError::write(resource, FailureReason::Status(status.as_u16())));
        }

        response
            .json::<Task>()
            .await
            .map_err(|e| ApiError::write(resource, FailureReason::Decode(e.to_string())))
    }
}

impl RemoteStore for TaskFlowApi {
    fn endpoint(&self) -> &str {
        self.base_url()
    }

    async fn projects(&self) -> Result<Vec<Project>, ApiError> {
        self.read(&["projects"], &[], Resource::Projects).await
    }

    async fn project(&self, id: &str) -> Result<Project, ApiError> {
        self.read(&["projects", id], &[], Resource::Project(id.to_string())).await
    }

    async fn tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.read(&["tasks"], &[], Resource::Tasks).await
    }

    async fn task(&self, id: &str) -> Result<Task, ApiError> {
        self.read(&["tasks", id], &[], Resource::Task(id.to_string())).await
    }

    async fn tasks_by_project(&self, project_id: &str) -> Result<Vec<Task>, ApiError> {
        self.read(&["tasks"], &[("projectId", project_id)], Resource::ProjectTasks(project_id.to_string()))
            .await
    }

    async fn update_task_status(&self, task_id: &str, status: TaskStatus) -> Result<Task, ApiError> {
        self.write(task_id, &StatusPatch { status }, Resource::TaskStatus(task_id.to_string()))
            .await
    }

    async fn update_subtasks(&self, task_id: &str, subtasks: &[Subtask]) -> Result<Task, ApiError> {
        self.write(task_id, &SubtasksPatch { subtasks }, Resource::Subtasks(task_id.to_string()))
            .await
    }
}

/// Connection settings for the remote store.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the store, e.g. `http://localhost:3001`.
    ///
    /// Collection paths (`/projects`, `/tasks`) are appended to it.
    pub api_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_url: APP_METADATA_DEFAULT_API_URL.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "api".to_string(),
            name: "Remote store".to_string(),
        }
    }

    /// Interactive setup, pre-filled with the current value.
    pub fn init(config: &Option<ApiConfig>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();

        msg_print!(Message::ConfigModuleApi);

        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
        })
    }
}
