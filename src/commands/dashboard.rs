//! Dashboard screen: status counters, the most recent tasks and project cards.

use super::{announce_loading, backend_hint};
use crate::api::RemoteStore;
use crate::libs::client::QueryClient;
use crate::libs::messages::Message;
use crate::libs::query::QueryKey;
use crate::libs::view::View;
use anyhow::Result;

/// Reads `["tasks"]` and `["projects"]` together and renders once both settle.
///
/// Either read failing replaces the whole screen with the error panel.
pub async fn render<S: RemoteStore>(client: &QueryClient<S>) -> Result<()> {
    announce_loading(client, &[QueryKey::Tasks, QueryKey::Projects], Message::LoadingDashboard);

    let (tasks, projects) = tokio::join!(client.tasks(), client.projects());
    match (tasks, projects) {
        (Ok(tasks), Ok(projects)) => View::print_dashboard(&tasks, &projects),
        (Err(e), _) | (_, Err(e)) => View::error_panel("data", backend_hint(client), &e.to_string()),
    }

    Ok(())
}
