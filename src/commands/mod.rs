//! Command-line interface.
//!
//! Every screen is a subcommand. One-shot commands build a fresh
//! [`QueryClient`] from the saved configuration, render once and exit;
//! `browse` keeps a single client alive so reads are shared and invalidated
//! across screens exactly as the query cache describes.
//!
//! Screen modules expose a generic `render` over [`RemoteStore`], which is
//! what `browse` and the tests call.

pub mod browse;
pub mod dashboard;
pub mod init;
pub mod new;
pub mod project;
pub mod projects;
pub mod task;
pub mod tasks;

use crate::api::{RemoteStore, TaskFlowApi};
use crate::libs::cache::QueryCache;
use crate::libs::client::QueryClient;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::query::QueryKey;
use crate::{msg_debug, msg_info};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Task counters, recent tasks and project cards")]
    Dashboard,
    #[command(about = "List tasks, optionally filtered by status")]
    Tasks(tasks::TasksArgs),
    #[command(about = "Show one task with its subtasks and comments")]
    Task(task::TaskArgs),
    #[command(about = "Flip a task between done and todo")]
    Toggle(task::ToggleArgs),
    #[command(about = "Flip completion of one subtask")]
    Subtask(task::SubtaskArgs),
    #[command(about = "List projects")]
    Projects,
    #[command(about = "Show one project with live progress and its tasks")]
    Project(project::ProjectArgs),
    #[command(about = "Fill in the new task form (not saved)")]
    New,
    #[command(about = "Interactive session sharing one query cache")]
    Browse,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Dashboard => dashboard::render(&session()?).await,
            Commands::Tasks(args) => tasks::cmd(args).await,
            Commands::Task(args) => task::cmd(args).await,
            Commands::Toggle(args) => task::toggle_cmd(args).await,
            Commands::Subtask(args) => task::subtask_cmd(args).await,
            Commands::Projects => projects::render(&session()?).await,
            Commands::Project(args) => project::cmd(args).await,
            Commands::New => new::cmd().await,
            Commands::Browse => browse::cmd().await,
        }
    }
}

/// Client for the configured remote store with an empty cache.
pub fn session() -> Result<QueryClient<TaskFlowApi>> {
    let config = Config::load()?;
    let api = TaskFlowApi::new(&config.api_config());
    msg_debug!(format!("Remote store at {}, stale time {:?}", api.base_url(), config.stale_time()));
    Ok(QueryClient::new(api, QueryCache::new(config.stale_time())))
}

/// Prints `message` unless every key can be answered from fresh cache.
pub(crate) fn announce_loading<S: RemoteStore>(client: &QueryClient<S>, keys: &[QueryKey], message: Message) {
    if !will_load(client, keys) {
        return;
    }
    msg_info!(message);
}

/// True when reading `keys` would send at least one request.
pub fn will_load<S: RemoteStore>(client: &QueryClient<S>, keys: &[QueryKey]) -> bool {
    !keys.iter().all(|key| client.cache().is_fresh(key))
}

/// Hint shown under a failed list screen.
pub(crate) fn backend_hint<S: RemoteStore>(client: &QueryClient<S>) -> Message {
    Message::BackendHint(client.store().endpoint().to_string())
}
