#[cfg(test)]
mod tests {
    use taskflow::api::MemoryStore;
    use taskflow::commands::{dashboard, project, projects, task, tasks};
    use taskflow::libs::cache::{QueryCache, QueryStatus};
    use taskflow::libs::client::QueryClient;
    use taskflow::libs::project::Project;
    use taskflow::libs::query::QueryKey;
    use taskflow::libs::task::{Task, TaskFilter, TaskStatus};
    use taskflow::libs::view::View;

    fn client() -> QueryClient<MemoryStore> {
        let mut website = Project::new("p1", "Website");
        website.tasks_total = 8;
        website.tasks_completed = 3;
        let store = MemoryStore::new(
            vec![website, Project::new("p2", "Mobile App")],
            vec![
                Task::new("t1", "Design homepage", "p1", TaskStatus::Todo),
                Task::new("t2", "Write copy", "p1", TaskStatus::InProgress),
                Task::new("t3", "Release build", "p2", TaskStatus::Done),
                Task::new("t4", "Orphan", "p9", TaskStatus::Todo),
            ],
        );
        QueryClient::new(store, QueryCache::default())
    }

    #[tokio::test]
    async fn test_dashboard_reads_tasks_and_projects() {
        let client = client();
        dashboard::render(&client).await.unwrap();

        assert_eq!(client.store().call_count("GET /tasks"), 1);
        assert_eq!(client.store().call_count("GET /projects"), 1);
    }

    #[tokio::test]
    async fn test_screens_share_cached_reads() {
        let client = client();

        dashboard::render(&client).await.unwrap();
        tasks::render(&client, TaskFilter::Status(TaskStatus::Done)).await.unwrap();
        projects::render(&client).await.unwrap();

        assert_eq!(client.store().calls().len(), 2);
    }

    #[tokio::test]
    async fn test_project_screen_reads_project_and_its_tasks() {
        let client = client();
        project::render(&client, "p1").await.unwrap();

        assert_eq!(client.store().calls(), vec!["GET /projects/p1", "GET /tasks?projectId=p1"]);
    }

    #[tokio::test]
    async fn test_task_screen_reads_project_after_task() {
        let client = client();
        task::render(&client, "t1").await.unwrap();

        assert_eq!(client.store().calls(), vec!["GET /tasks/t1", "GET /projects/p1"]);
    }

    #[tokio::test]
    async fn test_task_screen_tolerates_missing_project() {
        let client = client();
        task::render(&client, "t4").await.unwrap();

        assert_eq!(client.state(&QueryKey::Project("p9".to_string())).status, QueryStatus::Error);
        assert_eq!(client.state(&QueryKey::Task("t4".to_string())).status, QueryStatus::Success);
    }

    #[tokio::test]
    async fn test_failed_reads_render_error_panel() {
        let client = client();
        client.store().fail_reads(Some(500));

        dashboard::render(&client).await.unwrap();
        tasks::render(&client, TaskFilter::All).await.unwrap();
        project::render(&client, "p1").await.unwrap();
        task::render(&client, "t1").await.unwrap();

        assert_eq!(client.state(&QueryKey::Tasks).status, QueryStatus::Error);
        // Error entries refetch on the next screen that needs them.
        assert_eq!(client.store().call_count("GET /tasks"), 2);
    }

    #[test]
    fn test_tables_have_a_row_per_item() {
        let tasks = vec![
            Task::new("t1", "Design homepage", "p1", TaskStatus::Todo),
            Task::new("t2", "Write copy", "p9", TaskStatus::Done),
        ];
        let projects = vec![Project::new("p1", "Website")];
        let refs: Vec<&Task> = tasks.iter().collect();

        assert_eq!(View::task_rows(&refs, &projects).len(), 3);
        assert_eq!(View::recent_tasks(&tasks).len(), 3);
        assert_eq!(View::project_cards(&projects).len(), 2);
        assert_eq!(View::project_task_rows(&[]).len(), 1);
    }

    #[test]
    fn test_task_details_show_placeholder_until_project_loads() {
        let task = Task::new("t1", "Design homepage", "p1", TaskStatus::Todo);

        let pending = View::task_details(&task, None);
        let loaded = View::task_details(&task, Some(&Project::new("p1", "Website")));

        assert_eq!(pending.get_row(0).unwrap().get_cell(1).unwrap().get_content(), "Loading...");
        assert_eq!(loaded.get_row(0).unwrap().get_cell(1).unwrap().get_content(), "Website");
    }
}
