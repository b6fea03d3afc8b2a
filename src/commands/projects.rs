//! Project list screen.

use super::{announce_loading, backend_hint};
use crate::api::RemoteStore;
use crate::libs::client::QueryClient;
use crate::libs::messages::Message;
use crate::libs::query::QueryKey;
use crate::libs::view::View;
use anyhow::Result;

pub async fn render<S: RemoteStore>(client: &QueryClient<S>) -> Result<()> {
    announce_loading(client, &[QueryKey::Projects], Message::LoadingProjects);

    match client.projects().await {
        Ok(projects) => View::print_projects(&projects),
        Err(e) => View::error_panel("projects", backend_hint(client), &e.to_string()),
    }

    Ok(())
}
