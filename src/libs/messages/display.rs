//! Display implementation for taskflow messages.
//!
//! All user-facing text lives here, one match arm per [`Message`] variant, so
//! wording stays consistent across commands and the interactive session.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleApi => "Remote store settings".to_string(),
            Message::ConfigModuleCache => "Query cache settings".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptApiUrl => "Enter the TaskFlow API URL".to_string(),
            Message::PromptStaleTime => "Enter cache freshness window (seconds)".to_string(),
            Message::InvalidEnvValue(var, value) => format!("Ignoring {}='{}': not a valid value", var, value),

            // === LOADING MESSAGES ===
            Message::LoadingDashboard => "Loading dashboard...".to_string(),
            Message::LoadingTasks => "Loading tasks...".to_string(),
            Message::LoadingProjects => "Loading projects...".to_string(),
            Message::LoadingProject => "Loading project...".to_string(),
            Message::LoadingTask => "Loading task...".to_string(),
            Message::LoadingPlaceholder => "Loading...".to_string(),

            // === ERROR PANEL MESSAGES ===
            Message::ErrorLoading(what) => format!("Error loading {}", what),
            Message::BackendHint(url) => format!("Make sure the TaskFlow API is running at {}", url),
            Message::ProjectNotFoundHint => "Project not found or server error".to_string(),
            Message::TaskNotFoundHint => "Task not found or server error".to_string(),
            Message::ErrorDetail(detail) => format!("Details: {}", detail),

            // === DASHBOARD MESSAGES ===
            Message::DashboardTitle => "Dashboard".to_string(),
            Message::DashboardWelcome => "Welcome to TaskFlow!".to_string(),
            Message::RecentTasksHeader => "Recent Tasks".to_string(),
            Message::ProjectsHeader => "Projects".to_string(),
            Message::ProjectTasksCompleted(completed, total) => format!("{}/{} tasks completed", completed, total),

            // === TASK MESSAGES ===
            Message::TasksHeader => "Tasks".to_string(),
            Message::TotalTasks(count) => format!("{} total tasks", count),
            Message::FilterApplied(filter) => format!("Filter: {}", filter),
            Message::NoTasksMatchFilter => "No tasks match this filter".to_string(),
            Message::NoTasksInProject => "No tasks in this project yet".to_string(),
            Message::ProgressSummary(done, total) => format!("{} of {} tasks completed", done, total),
            Message::SubtasksHeader(completed, total) => format!("Subtasks ({}/{})", completed, total),
            Message::CommentsHeader(count) => format!("Comments ({})", count),
            Message::NoComments => "No comments yet".to_string(),
            Message::DescriptionHeader => "Description".to_string(),
            Message::DetailsHeader => "Details".to_string(),
            Message::TaskToggled { title, status } => format!("'{}' is now {}", title, status),
            Message::SubtaskToggled { title, completed } => {
                if *completed {
                    format!("Subtask '{}' completed", title)
                } else {
                    format!("Subtask '{}' reopened", title)
                }
            }
            Message::SubtaskNotFound(id) => format!("Subtask '{}' not found on this task", id),
            Message::TaskUpdateFailed(error) => format!("Task was not updated: {}", error),

            // === NEW TASK FORM ===
            Message::NewTaskTitle => "Create New Task".to_string(),
            Message::PromptTaskTitle => "Enter task title".to_string(),
            Message::PromptTaskDescription => "Enter task description".to_string(),
            Message::PromptTaskPriority => "Priority".to_string(),
            Message::PromptTaskDueDate => "Due date (YYYY-MM-DD)".to_string(),
            Message::InvalidDueDate(raw) => format!("'{}' is not a date (expected YYYY-MM-DD)", raw),
            Message::PromptTaskProject => "Project".to_string(),
            Message::TaskCreatedPlaceholder(title) => format!("Task created: {}", title),
            Message::NewTaskNotPersisted => "Task creation is not connected to the API yet; nothing was saved.".to_string(),

            // === BROWSE SESSION ===
            Message::BrowseWelcome => "TaskFlow interactive session (cached reads are shared between screens)".to_string(),
            Message::PromptBrowseAction => "Where to?".to_string(),
            Message::PromptSelectTask => "Select a task".to_string(),
            Message::PromptSelectProject => "Select a project".to_string(),
            Message::PromptSelectFilter => "Show tasks".to_string(),
            Message::PromptSelectSubtask => "Toggle which subtask?".to_string(),
            Message::BrowseGoodbye => "Bye!".to_string(),
            Message::NothingToSelect => "Nothing to select".to_string(),
        };

        write!(f, "{}", text)
    }
}
