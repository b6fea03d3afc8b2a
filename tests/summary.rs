#[cfg(test)]
mod tests {
    use taskflow::libs::project::{project_name, Project};
    use taskflow::libs::summary::{subtask_progress, ProjectProgress, StatusCounts, TaskSummary, RECENT_TASKS};
    use taskflow::libs::task::{Subtask, Task, TaskFilter, TaskStatus};

    fn tasks() -> Vec<Task> {
        vec![
            Task::new("t1", "Design homepage", "p1", TaskStatus::Todo),
            Task::new("t2", "Write copy", "p1", TaskStatus::InProgress),
            Task::new("t3", "Release build", "p2", TaskStatus::Done),
            Task::new("t4", "Fix login", "p2", TaskStatus::Todo),
            Task::new("t5", "Deploy", "p2", TaskStatus::Done),
            Task::new("t6", "Retrospective", "p3", TaskStatus::Todo),
        ]
    }

    fn ids(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn test_status_counts() {
        let counts = tasks().status_counts();
        assert_eq!(
            counts,
            StatusCounts {
                total: 6,
                todo: 3,
                in_progress: 1,
                done: 2
            }
        );
        assert_eq!(counts.get(TaskStatus::Done), 2);
    }

    #[test]
    fn test_status_counts_of_empty_list() {
        let empty: Vec<Task> = Vec::new();
        assert_eq!(empty.status_counts(), StatusCounts::default());
    }

    #[test]
    fn test_partition_covers_every_task_once_in_order() {
        let tasks = tasks();
        let partition = tasks.partition_by_status();

        assert_eq!(ids(&partition.todo), vec!["t1", "t4", "t6"]);
        assert_eq!(ids(&partition.in_progress), vec!["t2"]);
        assert_eq!(ids(&partition.done), vec!["t3", "t5"]);
        assert_eq!(
            partition.todo.len() + partition.in_progress.len() + partition.done.len(),
            tasks.len()
        );
    }

    #[test]
    fn test_filter_all_is_identity() {
        let tasks = tasks();
        assert_eq!(tasks.filtered(TaskFilter::All).len(), tasks.len());
    }

    #[test]
    fn test_filter_by_status() {
        let tasks = tasks();
        let done = tasks.filtered(TaskFilter::Status(TaskStatus::Done));
        assert_eq!(ids(&done), vec!["t3", "t5"]);
        assert_eq!(ids(&done), ids(&tasks.with_status(TaskStatus::Done)));
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!("all".parse::<TaskFilter>().unwrap(), TaskFilter::All);
        assert_eq!(
            "in-progress".parse::<TaskFilter>().unwrap(),
            TaskFilter::Status(TaskStatus::InProgress)
        );
        assert!("later".parse::<TaskFilter>().is_err());
        assert_eq!(TaskFilter::Status(TaskStatus::Todo).label(), "To Do");
    }

    #[test]
    fn test_recent_takes_first_five_in_list_order() {
        let tasks = tasks();
        let recent = tasks.recent(RECENT_TASKS);
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].id, "t1");
        assert_eq!(recent[4].id, "t5");

        assert_eq!(tasks[..2].recent(RECENT_TASKS).len(), 2);
    }

    #[test]
    fn test_live_progress_counts_done_tasks() {
        let tasks = tasks();
        let progress = ProjectProgress::live(&tasks);
        assert_eq!(progress, ProjectProgress { completed: 2, total: 6 });
        assert!((progress.percent() - 33.333).abs() < 0.01);
    }

    #[test]
    fn test_empty_project_progress_is_zero() {
        let progress = ProjectProgress::live(&[]);
        assert_eq!(progress.percent(), 0.0);
    }

    #[test]
    fn test_stored_progress_uses_counters_as_is() {
        let mut project = Project::new("p1", "Website");
        project.tasks_total = 8;
        project.tasks_completed = 3;

        let progress = ProjectProgress::stored(&project);
        assert_eq!(progress, ProjectProgress { completed: 3, total: 8 });
        assert_eq!(progress.percent(), 37.5);
    }

    #[test]
    fn test_subtask_progress() {
        let mut task = Task::new("t1", "Design homepage", "p1", TaskStatus::Todo);
        assert_eq!(subtask_progress(&task), (0, 0));

        task.subtasks = vec![
            Subtask {
                id: "s1".to_string(),
                title: "Wireframe".to_string(),
                completed: true,
            },
            Subtask {
                id: "s2".to_string(),
                title: "Mockup".to_string(),
                completed: false,
            },
        ];
        assert_eq!(subtask_progress(&task), (1, 2));
    }

    #[test]
    fn test_project_name_falls_back_to_unknown() {
        let projects = vec![Project::new("p1", "Website")];
        assert_eq!(project_name(&projects, "p1"), "Website");
        assert_eq!(project_name(&projects, "p9"), "Unknown");
        assert_eq!(project_name(&[], "p1"), "Unknown");
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(serde_json::to_string(&TaskStatus::InProgress).unwrap(), "\"in-progress\"");
        assert_eq!(TaskStatus::Done.label(), "Done");
        assert_eq!(TaskStatus::Todo.toggled(), TaskStatus::Done);
        assert!("blocked".parse::<TaskStatus>().is_err());
    }
}
