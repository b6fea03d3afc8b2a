//! Core library modules of taskflow.
//!
//! - **Entities**: [`task`], [`project`]
//! - **Synchronization**: [`query`] keys, the [`cache`], the session-scoped
//!   [`client`] and the [`mutation`] pipeline
//! - **Presentation**: [`summary`] aggregates, [`formatter`], [`view`], [`messages`]
//! - **Infrastructure**: [`config`], [`data_storage`], [`error`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskflow::api::{ApiConfig, TaskFlowApi};
//! use taskflow::libs::cache::QueryCache;
//! use taskflow::libs::client::QueryClient;
//!
//! # async fn run() -> Result<(), taskflow::libs::error::ApiError> {
//! let client = QueryClient::new(TaskFlowApi::new(&ApiConfig::default()), QueryCache::default());
//! let tasks = client.tasks().await?;
//! if let Some(task) = tasks.first() {
//!     client.toggle_task(&task.id, task.status).await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod client;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod formatter;
pub mod messages;
pub mod mutation;
pub mod project;
pub mod query;
pub mod summary;
pub mod task;
pub mod view;
