//! New task form.
//!
//! Collects title, description, priority, due date and project, then only
//! acknowledges the input. Nothing is sent to the remote store.

use super::{backend_hint, session};
use crate::api::RemoteStore;
use crate::libs::client::QueryClient;
use crate::libs::messages::Message;
use crate::libs::task::Priority;
use crate::libs::view::View;
use crate::{msg_print, msg_success, msg_warning};
use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Input, Select};

/// Values entered in the form.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTaskForm {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub project_id: String,
}

pub async fn cmd() -> Result<()> {
    render(&session()?).await
}

pub async fn render<S: RemoteStore>(client: &QueryClient<S>) -> Result<()> {
    let projects = match client.projects().await {
        Ok(projects) => projects,
        Err(e) => {
            View::error_panel("projects", backend_hint(client), &e.to_string());
            return Ok(());
        }
    };

    msg_print!(Message::NewTaskTitle, true);
    let theme = ColorfulTheme::default();

    let title: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskTitle.to_string())
        .validate_with(|input: &String| -> Result<(), String> {
            if input.trim().is_empty() {
                Err(Message::PromptTaskTitle.to_string())
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    let description: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskDescription.to_string())
        .allow_empty(true)
        .interact_text()?;

    let priorities = [Priority::Low, Priority::Medium, Priority::High];
    let priority = Select::with_theme(&theme)
        .with_prompt(Message::PromptTaskPriority.to_string())
        .items(&priorities)
        .default(1)
        .interact()?;

    let due_date: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskDueDate.to_string())
        .allow_empty(true)
        .validate_with(|input: &String| -> Result<(), String> {
            parse_due_date(input).map(|_| ())
        })
        .interact_text()?;

    let project_id = if projects.is_empty() {
        String::new()
    } else {
        let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
        let selected = Select::with_theme(&theme)
            .with_prompt(Message::PromptTaskProject.to_string())
            .items(&names)
            .default(0)
            .interact()?;
        projects[selected].id.clone()
    };

    let form = NewTaskForm {
        title: title.trim().to_string(),
        description,
        priority: priorities[priority],
        due_date: parse_due_date(&due_date).unwrap_or_default(),
        project_id,
    };

    submit(&form);
    Ok(())
}

/// Acknowledges a filled-in form.
pub fn submit(form: &NewTaskForm) {
    msg_success!(Message::TaskCreatedPlaceholder(form.title.clone()));
    msg_warning!(Message::NewTaskNotPersisted);
}

/// Empty input means no due date.
pub fn parse_due_date(input: &str) -> Result<Option<NaiveDate>, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| Message::InvalidDueDate(input.to_string()).to_string())
}
