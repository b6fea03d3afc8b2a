//! Terminal rendering of cache snapshots.
//!
//! Table builders are pure functions of the data they are given and return a
//! [`Table`]; the `print_*` functions compose them into screens. Nothing here
//! fetches or caches: callers pass in whatever the query cache currently
//! holds, and aggregates are recomputed on every call.

use super::formatter::{checkbox, excerpt, format_date, format_percent, progress_bar, task_title};
use super::messages::Message;
use super::project::{project_name, Project};
use super::summary::{subtask_progress, ProjectProgress, StatusCounts, TaskSummary, RECENT_TASKS};
use super::task::{Task, TaskFilter};
use crate::{msg_error, msg_print};
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Counter cards: total, to do, in progress and done.
    ///
    /// `done_label` is "Done" on the dashboard and "Completed" on a project.
    pub fn status_counts(counts: &StatusCounts, done_label: &str) -> Table {
        let mut table = Table::new();
        table.add_row(row!["Total Tasks", "To Do", "In Progress", done_label]);
        table.add_row(row![counts.total, counts.todo, counts.in_progress, counts.done]);
        table
    }

    pub fn recent_tasks(tasks: &[Task]) -> Table {
        let mut table = Table::new();
        table.add_row(row!["ID", "TITLE", "DESCRIPTION", "STATUS"]);
        for task in tasks {
            table.add_row(row![task.id, task.title, excerpt(&task.description, 50), task.status]);
        }
        table
    }

    pub fn project_cards(projects: &[Project]) -> Table {
        let mut table = Table::new();
        table.add_row(row!["ID", "NAME", "COLOR", "DESCRIPTION", "PROGRESS"]);
        for project in projects {
            let progress = ProjectProgress::stored(project);
            table.add_row(row![
                project.id,
                project.name,
                project.color,
                excerpt(&project.description, 60),
                Message::ProjectTasksCompleted(progress.completed as u32, progress.total as u32)
            ]);
        }
        table
    }

    /// Rows of the tasks screen. Project names resolve to `Unknown` when missing.
    pub fn task_rows(tasks: &[&Task], projects: &[Project]) -> Table {
        let mut table = Table::new();
        table.add_row(row!["", "ID", "TITLE", "PROJECT", "PRIORITY", "STATUS"]);
        for task in tasks {
            let done = task.status.is_done();
            table.add_row(row![
                checkbox(done),
                task.id,
                task_title(&task.title, done),
                project_name(projects, &task.project_id),
                task.priority,
                task.status
            ]);
        }
        table
    }

    /// Rows of a project's task list, with due dates instead of project names.
    pub fn project_task_rows(tasks: &[Task]) -> Table {
        let mut table = Table::new();
        table.add_row(row!["", "ID", "TITLE", "DUE", "STATUS"]);
        for task in tasks {
            let done = task.status.is_done();
            table.add_row(row![
                checkbox(done),
                task.id,
                task_title(&task.title, done),
                format_date(&task.due_date),
                task.status
            ]);
        }
        table
    }

    pub fn subtasks(task: &Task) -> Table {
        let mut table = Table::new();
        table.add_row(row!["", "ID", "SUBTASK"]);
        for subtask in &task.subtasks {
            table.add_row(row![
                checkbox(subtask.completed),
                subtask.id,
                task_title(&subtask.title, subtask.completed)
            ]);
        }
        table
    }

    pub fn comments(task: &Task) -> Table {
        let mut table = Table::new();
        table.add_row(row!["AUTHOR", "DATE", "COMMENT"]);
        for comment in &task.comments {
            table.add_row(row![comment.author, format_date(&comment.created_at), comment.content]);
        }
        table
    }

    /// Side panel of the task screen. `project` is `None` while it is still loading.
    pub fn task_details(task: &Task, project: Option<&Project>) -> Table {
        let project = project.map(|p| p.name.clone()).unwrap_or_else(|| Message::LoadingPlaceholder.to_string());
        let mut table = Table::new();
        table.add_row(row!["Project", project]);
        table.add_row(row!["Status", task.status]);
        table.add_row(row!["Priority", format!("{} priority", task.priority)]);
        table.add_row(row!["Due Date", format_date(&task.due_date)]);
        table.add_row(row!["Tags", task.tags.join(", ")]);
        table
    }

    /// Generic error panel shown in place of a screen's content.
    pub fn error_panel(what: &str, hint: Message, detail: &str) {
        msg_error!(Message::ErrorLoading(what.to_string()), true);
        msg_print!(hint);
        msg_print!(Message::ErrorDetail(detail.to_string()));
    }

    pub fn print_dashboard(tasks: &[Task], projects: &[Project]) {
        msg_print!(Message::DashboardTitle, true);
        msg_print!(Message::DashboardWelcome);
        View::status_counts(&tasks.status_counts(), "Done").printstd();

        msg_print!(Message::RecentTasksHeader, true);
        View::recent_tasks(tasks.recent(RECENT_TASKS)).printstd();

        msg_print!(Message::ProjectsHeader, true);
        View::project_cards(projects).printstd();
    }

    pub fn print_tasks(tasks: &[Task], projects: &[Project], filter: TaskFilter) {
        msg_print!(Message::TasksHeader, true);
        msg_print!(Message::TotalTasks(tasks.len()));
        msg_print!(Message::FilterApplied(filter.label().to_string()));

        let filtered = tasks.filtered(filter);
        if filtered.is_empty() {
            msg_print!(Message::NoTasksMatchFilter);
        } else {
            View::task_rows(&filtered, projects).printstd();
        }
    }

    pub fn print_projects(projects: &[Project]) {
        msg_print!(Message::ProjectsHeader, true);
        View::project_cards(projects).printstd();
    }

    pub fn print_project(project: &Project, tasks: &[Task]) {
        msg_print!(format!("{} ({})", project.name, project.color), true);
        msg_print!(project.description);
        View::status_counts(&tasks.status_counts(), "Completed").printstd();

        let progress = ProjectProgress::live(tasks);
        msg_print!(format!("{} {}", progress_bar(progress.percent()), format_percent(progress.percent())));
        msg_print!(Message::ProgressSummary(progress.completed, progress.total));

        msg_print!(Message::TasksHeader, true);
        if tasks.is_empty() {
            msg_print!(Message::NoTasksInProject);
        } else {
            View::project_task_rows(tasks).printstd();
        }
    }

    pub fn print_task(task: &Task, project: Option<&Project>) {
        msg_print!(task.title, true);
        msg_print!(Message::DetailsHeader);
        View::task_details(task, project).printstd();

        msg_print!(Message::DescriptionHeader, true);
        msg_print!(task.description);

        let (completed, total) = subtask_progress(task);
        msg_print!(Message::SubtasksHeader(completed, total), true);
        if total > 0 {
            View::subtasks(task).printstd();
        }

        msg_print!(Message::CommentsHeader(task.comments.len()), true);
        if task.comments.is_empty() {
            msg_print!(Message::NoComments);
        } else {
            View::comments(task).printstd();
        }
    }
}
