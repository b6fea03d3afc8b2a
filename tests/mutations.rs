#[cfg(test)]
mod tests {
    use taskflow::api::MemoryStore;
    use taskflow::commands::task;
    use taskflow::libs::cache::QueryCache;
    use taskflow::libs::client::QueryClient;
    use taskflow::libs::error::{FailureReason, Resource};
    use taskflow::libs::mutation::{
        status_write_keys, subtask_write_keys, toggle_subtask, toggled_status, MutationState,
    };
    use taskflow::libs::project::Project;
    use taskflow::libs::query::QueryKey;
    use taskflow::libs::task::{Subtask, Task, TaskStatus};

    fn subtask(id: &str, title: &str, completed: bool) -> Subtask {
        Subtask {
            id: id.to_string(),
            title: title.to_string(),
            completed,
        }
    }

    fn client() -> QueryClient<MemoryStore> {
        let mut t1 = Task::new("t1", "Design homepage", "p1", TaskStatus::Todo);
        t1.subtasks = vec![
            subtask("s1", "Wireframe", true),
            subtask("s2", "Mockup", false),
            subtask("s3", "Review", false),
        ];
        let store = MemoryStore::new(
            vec![Project::new("p1", "Website")],
            vec![
                t1,
                Task::new("t2", "Write copy", "p1", TaskStatus::InProgress),
                Task::new("t3", "Release build", "p1", TaskStatus::Done),
            ],
        );
        QueryClient::new(store, QueryCache::default())
    }

    /// Loads every key a session would typically have open.
    async fn warm(client: &QueryClient<MemoryStore>) {
        client.tasks().await.unwrap();
        client.projects().await.unwrap();
        client.project("p1").await.unwrap();
        client.project_tasks("p1").await.unwrap();
        client.task("t1").await.unwrap();
    }

    fn stored(client: &QueryClient<MemoryStore>, id: &str) -> Task {
        client.store().tasks_snapshot().into_iter().find(|t| t.id == id).unwrap()
    }

    #[test]
    fn test_toggled_status_only_flips_done() {
        assert_eq!(toggled_status(TaskStatus::Todo), TaskStatus::Done);
        assert_eq!(toggled_status(TaskStatus::InProgress), TaskStatus::Done);
        assert_eq!(toggled_status(TaskStatus::Done), TaskStatus::Todo);
    }

    #[test]
    fn test_toggle_subtask_flips_one_and_keeps_order() {
        let subtasks = vec![subtask("s1", "A", true), subtask("s2", "B", false), subtask("s3", "C", false)];

        let toggled = toggle_subtask(&subtasks, "s2");

        assert_eq!(toggled, vec![subtask("s1", "A", true), subtask("s2", "B", true), subtask("s3", "C", false)]);
        assert_eq!(toggle_subtask(&toggled, "s2"), subtasks);
    }

    #[test]
    fn test_toggle_unknown_subtask_is_unchanged_copy() {
        let subtasks = vec![subtask("s1", "A", true)];
        assert_eq!(toggle_subtask(&subtasks, "zz"), subtasks);
        assert!(toggle_subtask(&[], "s1").is_empty());
    }

    #[test]
    fn test_write_keys() {
        assert_eq!(status_write_keys("t1"), vec![QueryKey::Tasks, QueryKey::Task("t1".to_string())]);
        assert!(subtask_write_keys("t1").contains(&QueryKey::Task("t1".to_string())));
    }

    #[tokio::test]
    async fn test_toggle_todo_task_writes_done_and_invalidates_task_lists() {
        let client = client();
        warm(&client).await;

        let updated = client.toggle_task("t1", TaskStatus::Todo).await.unwrap();

        assert_eq!(updated.status, TaskStatus::Done);
        assert_eq!(client.store().call_count("PATCH /tasks/t1"), 1);
        assert_eq!(stored(&client, "t1").status, TaskStatus::Done);

        let cache = client.cache();
        assert!(cache.is_stale(&QueryKey::Tasks));
        assert!(cache.is_stale(&QueryKey::ProjectTasks("p1".to_string())));
        assert!(cache.is_stale(&QueryKey::Task("t1".to_string())));
        assert!(!cache.is_stale(&QueryKey::Projects));
        assert!(!cache.is_stale(&QueryKey::Project("p1".to_string())));
    }

    #[tokio::test]
    async fn test_screens_refetch_after_toggle() {
        let client = client();
        warm(&client).await;

        client.toggle_task("t2", TaskStatus::InProgress).await.unwrap();

        let tasks = client.tasks().await.unwrap();
        let project_tasks = client.project_tasks("p1").await.unwrap();
        assert_eq!(tasks.iter().find(|t| t.id == "t2").unwrap().status, TaskStatus::Done);
        assert_eq!(project_tasks.iter().filter(|t| t.status == TaskStatus::Done).count(), 2);
        assert_eq!(client.store().call_count("GET /tasks"), 2);
        assert_eq!(client.store().call_count("GET /tasks?projectId=p1"), 2);
        assert_eq!(client.store().call_count("GET /projects"), 1);
    }

    #[tokio::test]
    async fn test_double_toggle_returns_to_todo() {
        let client = client();

        client.toggle_task("t1", TaskStatus::Todo).await.unwrap();
        let current = client.task("t1").await.unwrap().status;
        client.toggle_task("t1", current).await.unwrap();

        assert_eq!(stored(&client, "t1").status, TaskStatus::Todo);
        assert_eq!(client.store().call_count("PATCH /tasks/t1"), 2);
    }

    #[tokio::test]
    async fn test_subtask_toggle_writes_whole_array() {
        let client = client();
        warm(&client).await;
        let task = client.task("t1").await.unwrap();

        client.toggle_subtask(&task, "s2").await.unwrap();

        assert_eq!(
            stored(&client, "t1").subtasks,
            vec![
                subtask("s1", "Wireframe", true),
                subtask("s2", "Mockup", true),
                subtask("s3", "Review", false)
            ]
        );
        assert!(client.cache().is_stale(&QueryKey::Task("t1".to_string())));

        let refetched = client.task("t1").await.unwrap();
        assert_eq!(refetched.completed_subtasks(), 2);
        assert_eq!(client.store().call_count("GET /tasks/t1"), 2);
    }

    #[tokio::test]
    async fn test_failed_write_invalidates_nothing() {
        let client = client();
        warm(&client).await;
        client.store().fail_writes(Some(500));

        let err = client.toggle_task("t1", TaskStatus::Todo).await.unwrap_err();

        assert!(err.is_write());
        assert_eq!(err.resource(), &Resource::TaskStatus("t1".to_string()));
        assert_eq!(err.reason(), &FailureReason::Status(500));
        assert!(!client.cache().is_stale(&QueryKey::Tasks));
        assert!(!client.cache().is_stale(&QueryKey::Task("t1".to_string())));

        let tasks = client.tasks().await.unwrap();
        assert_eq!(tasks[0].status, TaskStatus::Todo);
        assert_eq!(client.store().call_count("GET /tasks"), 1);
    }

    #[tokio::test]
    async fn test_mutation_state_from_result() {
        let client = client();

        let state = MutationState::from(client.toggle_task("t1", TaskStatus::Todo).await);
        assert!(matches!(state, MutationState::Success(ref task) if task.status == TaskStatus::Done));

        client.store().fail_writes(Some(503));
        let state = MutationState::from(client.toggle_task("t1", TaskStatus::Done).await);
        assert!(state.is_error());
        assert_eq!(MutationState::default(), MutationState::Idle);
    }

    #[tokio::test]
    async fn test_toggle_command_reads_current_status_first() {
        let client = client();

        let state = task::toggle(&client, "t3").await;

        assert!(matches!(state, MutationState::Success(ref t) if t.status == TaskStatus::Todo));
        assert_eq!(client.store().calls(), vec!["GET /tasks/t3", "PATCH /tasks/t3"]);
    }

    #[tokio::test]
    async fn test_toggle_command_on_missing_task_does_not_write() {
        let client = client();

        let state = task::toggle(&client, "nope").await;

        assert_eq!(state, MutationState::Idle);
        assert_eq!(client.store().call_count("PATCH /tasks/nope"), 0);
    }

    #[tokio::test]
    async fn test_subtask_command_rejects_unknown_subtask() {
        let client = client();

        let state = task::toggle_subtask(&client, "t1", "s9").await;

        assert_eq!(state, MutationState::Idle);
        assert_eq!(client.store().call_count("PATCH /tasks/t1"), 0);
    }

    #[tokio::test]
    async fn test_task_screen_renders_after_subtask_command() {
        let client = client();

        let state = task::toggle_subtask(&client, "t1", "s3").await;
        task::render(&client, "t1").await.unwrap();

        assert!(matches!(state, MutationState::Success(_)));
        assert_eq!(stored(&client, "t1").completed_subtasks(), 2);
        assert_eq!(client.store().call_count("GET /tasks/t1"), 2);
        assert_eq!(client.store().call_count("GET /projects/p1"), 1);
    }
}
