//! Derived aggregates over a task snapshot.
//!
//! All of these are recomputed from the current cache snapshot on every
//! render. They are pure: no state, no I/O.

use super::project::Project;
use super::task::{Task, TaskFilter, TaskStatus};

/// Number of tasks shown in the dashboard's "Recent Tasks" section.
pub const RECENT_TASKS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub total: usize,
    pub todo: usize,
    pub in_progress: usize,
    pub done: usize,
}

impl StatusCounts {
    pub fn get(&self, status: TaskStatus) -> usize {
        match status {
            TaskStatus::Todo => self.todo,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Done => self.done,
        }
    }
}

/// The three status buckets of a task list, each keeping list order.
#[derive(Debug, Default)]
pub struct StatusPartition<'a> {
    pub todo: Vec<&'a Task>,
    pub in_progress: Vec<&'a Task>,
    pub done: Vec<&'a Task>,
}

pub trait TaskSummary {
    fn with_status(&self, status: TaskStatus) -> Vec<&Task>;
    fn filtered(&self, filter: TaskFilter) -> Vec<&Task>;
    fn partition_by_status(&self) -> StatusPartition<'_>;
    fn status_counts(&self) -> StatusCounts;
    fn recent(&self, limit: usize) -> &[Task];
}

impl TaskSummary for [Task] {
    fn with_status(&self, status: TaskStatus) -> Vec<&Task> {
        self.iter().filter(|t| t.status == status).collect()
    }

    fn filtered(&self, filter: TaskFilter) -> Vec<&Task> {
        self.iter().filter(|t| filter.matches(t)).collect()
    }

    fn partition_by_status(&self) -> StatusPartition<'_> {
        let mut partition = StatusPartition::default();
        for task in self {
            match task.status {
                TaskStatus::Todo => partition.todo.push(task),
                TaskStatus::InProgress => partition.in_progress.push(task),
                TaskStatus::Done => partition.done.push(task),
            }
        }
        partition
    }

    fn status_counts(&self) -> StatusCounts {
        let partition = self.partition_by_status();
        StatusCounts {
            total: self.len(),
            todo: partition.todo.len(),
            in_progress: partition.in_progress.len(),
            done: partition.done.len(),
        }
    }

    fn recent(&self, limit: usize) -> &[Task] {
        &self[..self.len().min(limit)]
    }
}

/// Completed-out-of-total progress for a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectProgress {
    pub completed: usize,
    pub total: usize,
}

impl ProjectProgress {
    /// Counted from the project's actual task list.
    pub fn live(tasks: &[Task]) -> Self {
        Self {
            completed: tasks.with_status(TaskStatus::Done).len(),
            total: tasks.len(),
        }
    }

    /// The store's denormalized counters, taken as-is.
    pub fn stored(project: &Project) -> Self {
        Self {
            completed: project.tasks_completed as usize,
            total: project.tasks_total as usize,
        }
    }

    /// Percentage complete; 0 for an empty project.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64 * 100.0
        }
    }
}

/// Completed-out-of-total for a task's checklist.
pub fn subtask_progress(task: &Task) -> (usize, usize) {
    (task.completed_subtasks(), task.subtasks.len())
}
