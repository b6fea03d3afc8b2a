//! Project detail screen.

use super::{announce_loading, backend_hint, session};
use crate::api::RemoteStore;
use crate::libs::client::QueryClient;
use crate::libs::messages::Message;
use crate::libs::query::QueryKey;
use crate::libs::view::View;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ProjectArgs {
    #[arg(required = true)]
    id: String,
}

pub async fn cmd(args: ProjectArgs) -> Result<()> {
    render(&session()?, &args.id).await
}

/// Reads `["project", id]` and `["tasks", "project", id]` in parallel.
///
/// Progress on this screen is computed from the fetched tasks, not from the
/// counters stored on the project.
pub async fn render<S: RemoteStore>(client: &QueryClient<S>, id: &str) -> Result<()> {
    announce_loading(
        client,
        &[QueryKey::Project(id.to_string()), QueryKey::ProjectTasks(id.to_string())],
        Message::LoadingProject,
    );

    let (project, tasks) = tokio::join!(client.project(id), client.project_tasks(id));
    match (project, tasks) {
        (Ok(project), Ok(tasks)) => View::print_project(&project, &tasks),
        (Err(e), _) => View::error_panel("project", Message::ProjectNotFoundHint, &e.to_string()),
        (Ok(_), Err(e)) => View::error_panel("tasks", backend_hint(client), &e.to_string()),
    }

    Ok(())
}
