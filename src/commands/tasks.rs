//! Task list screen with a status filter.

use super::{announce_loading, backend_hint, session};
use crate::api::RemoteStore;
use crate::libs::client::QueryClient;
use crate::libs::messages::Message;
use crate::libs::query::QueryKey;
use crate::libs::task::TaskFilter;
use crate::libs::view::View;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct TasksArgs {
    /// all, todo, in-progress or done
    #[arg(short, long, default_value = "all")]
    status: TaskFilter,
}

pub async fn cmd(args: TasksArgs) -> Result<()> {
    render(&session()?, args.status).await
}

/// Renders the tasks screen.
///
/// Only the tasks read decides between content and error panel; without
/// projects every row shows `Unknown` as its project.
pub async fn render<S: RemoteStore>(client: &QueryClient<S>, filter: TaskFilter) -> Result<()> {
    announce_loading(client, &[QueryKey::Tasks, QueryKey::Projects], Message::LoadingTasks);

    let (tasks, projects) = tokio::join!(client.tasks(), client.projects());
    match tasks {
        Ok(tasks) => View::print_tasks(&tasks, &projects.unwrap_or_default(), filter),
        Err(e) => View::error_panel("tasks", backend_hint(client), &e.to_string()),
    }

    Ok(())
}
