use serde::{Deserialize, Serialize};

/// Project record as served by the remote store.
///
/// `tasks_total` and `tasks_completed` are denormalized counters owned by the
/// store. Nothing here keeps them in sync with the actual task records; the
/// project detail screen computes its own live counts instead (see
/// [`crate::libs::summary::ProjectProgress`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    #[serde(default)]
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Display token such as `bg-blue-500`.
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub tasks_total: u32,
    #[serde(default)]
    pub tasks_completed: u32,
    #[serde(default)]
    pub due_date: String,
}

impl Project {
    pub fn new(id: &str, name: &str) -> Self {
        Project {
            id: id.to_string(),
            slug: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            color: String::new(),
            status: String::new(),
            tasks_total: 0,
            tasks_completed: 0,
            due_date: String::new(),
        }
    }
}

/// Looks up a project name by id, falling back to `Unknown`.
pub fn project_name<'a>(projects: &'a [Project], project_id: &str) -> &'a str {
    projects.iter().find(|p| p.id == project_id).map(|p| p.name.as_str()).unwrap_or("Unknown")
}
