//! Project queries

use common::models::{Project, ProjectStatus};
use tracing::debug;

use crate::Store;

/// All projects, in seed order
pub async fn list(store: &Store) -> Vec<Project> {
    store.round_trip().await;
    store.inner.projects.clone()
}

/// Projects in the given state
pub async fn list_by_status(store: &Store, status: ProjectStatus) -> Vec<Project> {
    store.round_trip().await;
    store
        .inner
        .projects
        .iter()
        .filter(|p| p.status == status)
        .cloned()
        .collect()
}

/// Get project by ID
pub async fn get(store: &Store, id: &str) -> Option<Project> {
    store.round_trip().await;
    let project = store.inner.projects.iter().find(|p| p.id == id).cloned();
    if project.is_none() {
        debug!("Project {} not found", id);
    }
    project
}
