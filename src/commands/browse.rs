//! Interactive session.
//!
//! Keeps one [`QueryClient`] for the whole session, so moving between
//! screens serves fresh reads from cache and a toggle on one screen makes
//! every screen showing that data refetch the next time it is opened.
//! Esc or `q` at the main prompt ends the session.

use super::{dashboard, new, project, projects, session, task, tasks};
use crate::api::RemoteStore;
use crate::libs::client::QueryClient;
use crate::libs::formatter::checkbox;
use crate::libs::messages::Message;
use crate::libs::task::{TaskFilter, TaskStatus};
use crate::{msg_info, msg_print, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Dashboard,
    Tasks,
    Task,
    ToggleTask,
    ToggleSubtask,
    Projects,
    Project,
    NewTask,
    Quit,
}

impl Action {
    const ALL: [Action; 9] = [
        Action::Dashboard,
        Action::Tasks,
        Action::Task,
        Action::ToggleTask,
        Action::ToggleSubtask,
        Action::Projects,
        Action::Project,
        Action::NewTask,
        Action::Quit,
    ];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Action::Dashboard => "Dashboard",
            Action::Tasks => "Tasks",
            Action::Task => "Open task",
            Action::ToggleTask => "Toggle task completion",
            Action::ToggleSubtask => "Toggle subtask",
            Action::Projects => "Projects",
            Action::Project => "Open project",
            Action::NewTask => "New task",
            Action::Quit => "Quit",
        };
        write!(f, "{}", label)
    }
}

pub async fn cmd() -> Result<()> {
    let client = session()?;
    msg_print!(Message::BrowseWelcome, true);

    loop {
        let selected = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptBrowseAction.to_string())
            .items(&Action::ALL)
            .default(0)
            .interact_opt()?;

        let action = match selected {
            Some(index) => Action::ALL[index],
            None => Action::Quit,
        };
        if action == Action::Quit {
            break;
        }
        step(&client, action).await?;
    }

    msg_print!(Message::BrowseGoodbye);
    Ok(())
}

async fn step<S: RemoteStore>(client: &QueryClient<S>, action: Action) -> Result<()> {
    match action {
        Action::Dashboard => dashboard::render(client).await,
        Action::Tasks => match pick_filter()? {
            Some(filter) => tasks::render(client, filter).await,
            None => Ok(()),
        },
        Action::Task => match pick_task(client).await? {
            Some(id) => task::render(client, &id).await,
            None => Ok(()),
        },
        Action::ToggleTask => {
            if let Some(id) = pick_task(client).await? {
                task::toggle(client, &id).await;
                tasks::render(client, TaskFilter::All).await?;
            }
            Ok(())
        }
        Action::ToggleSubtask => {
            if let Some((task_id, subtask_id)) = pick_subtask(client).await? {
                task::toggle_subtask(client, &task_id, &subtask_id).await;
                task::render(client, &task_id).await?;
            }
            Ok(())
        }
        Action::Projects => projects::render(client).await,
        Action::Project => match pick_project(client).await? {
            Some(id) => project::render(client, &id).await,
            None => Ok(()),
        },
        Action::NewTask => new::render(client).await,
        Action::Quit => Ok(()),
    }
}

fn pick_filter() -> Result<Option<TaskFilter>> {
    let filters: Vec<TaskFilter> = std::iter::once(TaskFilter::All)
        .chain(TaskStatus::ALL.iter().copied().map(TaskFilter::Status))
        .collect();
    let labels: Vec<&str> = filters.iter().map(|f| f.label()).collect();

    let selected = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectFilter.to_string())
        .items(&labels)
        .default(0)
        .interact_opt()?;
    Ok(selected.map(|index| filters[index]))
}

/// Lets the user pick from `["tasks"]`; a failed read is reported and picks nothing.
async fn pick_task<S: RemoteStore>(client: &QueryClient<S>) -> Result<Option<String>> {
    let tasks = match client.tasks().await {
        Ok(tasks) => tasks,
        Err(e) => {
            msg_warning!(e);
            return Ok(None);
        }
    };
    let labels: Vec<String> = tasks.iter().map(|t| format!("{} [{}]", t.title, t.status)).collect();
    Ok(choose(Message::PromptSelectTask, &labels)?.map(|index| tasks[index].id.clone()))
}

async fn pick_project<S: RemoteStore>(client: &QueryClient<S>) -> Result<Option<String>> {
    let projects = match client.projects().await {
        Ok(projects) => projects,
        Err(e) => {
            msg_warning!(e);
            return Ok(None);
        }
    };
    let labels: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
    Ok(choose(Message::PromptSelectProject, &labels)?.map(|index| projects[index].id.clone()))
}

async fn pick_subtask<S: RemoteStore>(client: &QueryClient<S>) -> Result<Option<(String, String)>> {
    let Some(task_id) = pick_task(client).await? else {
        return Ok(None);
    };
    let task = match client.task(&task_id).await {
        Ok(task) => task,
        Err(e) => {
            msg_warning!(e);
            return Ok(None);
        }
    };
    let labels: Vec<String> = task
        .subtasks
        .iter()
        .map(|s| format!("{} {}", checkbox(s.completed), s.title))
        .collect();
    Ok(choose(Message::PromptSelectSubtask, &labels)?.map(|index| (task_id, task.subtasks[index].id.clone())))
}

fn choose<T: ToString>(prompt: Message, items: &[T]) -> Result<Option<usize>> {
    if items.is_empty() {
        msg_info!(Message::NothingToSelect);
        return Ok(None);
    }
    Ok(Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .items(items)
        .default(0)
        .interact_opt()?)
}
