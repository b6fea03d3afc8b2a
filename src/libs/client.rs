//! Session-scoped query client.
//!
//! A [`QueryClient`] binds one [`RemoteStore`] to one [`QueryCache`]. Views
//! read through its typed methods and dispatch writes through the mutation
//! methods in [`crate::libs::mutation`]. There is no global instance: the
//! application builds one per session and tests build one per case.

use super::cache::{QueryCache, QueryState};
use super::error::ApiError;
use super::project::Project;
use super::query::QueryKey;
use super::task::Task;
use crate::api::RemoteStore;

pub struct QueryClient<S: RemoteStore> {
    store: S,
    cache: QueryCache,
}

impl<S: RemoteStore> QueryClient<S> {
    pub fn new(store: S, cache: QueryCache) -> Self {
        Self { store, cache }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// `["projects"]`
    pub async fn projects(&self) -> Result<Vec<Project>, ApiError> {
        self.cache.fetch(QueryKey::Projects, || self.store.projects()).await
    }

    /// `["project", id]`
    pub async fn project(&self, id: &str) -> Result<Project, ApiError> {
        self.cache.fetch(QueryKey::Project(id.to_string()), || self.store.project(id)).await
    }

    /// `["tasks"]`
    pub async fn tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.cache.fetch(QueryKey::Tasks, || self.store.tasks()).await
    }

    /// `["task", id]`
    pub async fn task(&self, id: &str) -> Result<Task, ApiError> {
        self.cache.fetch(QueryKey::Task(id.to_string()), || self.store.task(id)).await
    }

    /// `["tasks", "project", id]`
    pub async fn project_tasks(&self, project_id: &str) -> Result<Vec<Task>, ApiError> {
        self.cache
            .fetch(QueryKey::ProjectTasks(project_id.to_string()), || {
                self.store.tasks_by_project(project_id)
            })
            .await
    }

    pub fn invalidate(&self, key: &QueryKey) -> usize {
        self.cache.invalidate(key)
    }

    pub fn state(&self, key: &QueryKey) -> QueryState {
        self.cache.snapshot(key)
    }
}
