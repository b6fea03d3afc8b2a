//! Task detail screen and the two task mutations.
//!
//! `toggle` and `subtask` read the task through the cache first so the write
//! is based on what the screen would show, then render the task again. The
//! second render refetches because a successful write invalidated it.

use super::{announce_loading, session};
use crate::api::RemoteStore;
use crate::libs::client::QueryClient;
use crate::libs::messages::Message;
use crate::libs::mutation::MutationState;
use crate::libs::query::QueryKey;
use crate::libs::task::Task;
use crate::libs::view::View;
use crate::{msg_error, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[arg(required = true)]
    id: String,
}

#[derive(Debug, Args)]
pub struct ToggleArgs {
    #[arg(required = true)]
    task_id: String,
}

#[derive(Debug, Args)]
pub struct SubtaskArgs {
    #[arg(required = true)]
    task_id: String,
    #[arg(required = true)]
    subtask_id: String,
}

pub async fn cmd(args: TaskArgs) -> Result<()> {
    render(&session()?, &args.id).await
}

pub async fn toggle_cmd(args: ToggleArgs) -> Result<()> {
    let client = session()?;
    toggle(&client, &args.task_id).await;
    render(&client, &args.task_id).await
}

pub async fn subtask_cmd(args: SubtaskArgs) -> Result<()> {
    let client = session()?;
    toggle_subtask(&client, &args.task_id, &args.subtask_id).await;
    render(&client, &args.task_id).await
}

/// Reads `["task", id]`, then `["project", task.projectId]`.
///
/// The project read depends on the task and its failure is not an error for
/// this screen: the project name stays `Loading...`.
pub async fn render<S: RemoteStore>(client: &QueryClient<S>, id: &str) -> Result<()> {
    let Some(task) = load(client, id).await else {
        return Ok(());
    };
    let project = client.project(&task.project_id).await.ok();
    View::print_task(&task, project.as_ref());
    Ok(())
}

/// Flips the task between done and todo and reports the outcome.
pub async fn toggle<S: RemoteStore>(client: &QueryClient<S>, task_id: &str) -> MutationState {
    let Some(task) = load(client, task_id).await else {
        return MutationState::Idle;
    };

    let state = MutationState::from(client.toggle_task(&task.id, task.status).await);
    match &state {
        MutationState::Success(updated) => msg_success!(Message::TaskToggled {
            title: updated.title.clone(),
            status: updated.status.label().to_string(),
        }),
        MutationState::Error(e) => msg_error!(Message::TaskUpdateFailed(e.to_string())),
        _ => {}
    }
    state
}

/// Flips one subtask and writes the task's whole subtask array back.
///
/// An id that is not on the task is reported without writing.
pub async fn toggle_subtask<S: RemoteStore>(client: &QueryClient<S>, task_id: &str, subtask_id: &str) -> MutationState {
    let Some(task) = load(client, task_id).await else {
        return MutationState::Idle;
    };
    let Some(subtask) = task.subtasks.iter().find(|s| s.id == subtask_id) else {
        msg_warning!(Message::SubtaskNotFound(subtask_id.to_string()));
        return MutationState::Idle;
    };
    let title = subtask.title.clone();
    let completed = !subtask.completed;

    let state = MutationState::from(client.toggle_subtask(&task, subtask_id).await);
    match &state {
        MutationState::Success(_) => msg_success!(Message::SubtaskToggled { title, completed }),
        MutationState::Error(e) => msg_error!(Message::TaskUpdateFailed(e.to_string())),
        _ => {}
    }
    state
}

async fn load<S: RemoteStore>(client: &QueryClient<S>, id: &str) -> Option<Task> {
    announce_loading(client, &[QueryKey::Task(id.to_string())], Message::LoadingTask);
    match client.task(id).await {
        Ok(task) => Some(task),
        Err(e) => {
            View::error_panel("task", Message::TaskNotFoundHint, &e.to_string());
            None
        }
    }
}
