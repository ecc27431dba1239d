//! Project routes

use axum::{
    extract::{Path, Query, State},
    Json,
};
use common::models::{Project, ProjectStatus};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::{ApiResult, OptionExt};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ProjectsQuery {
    /// Only projects in this state
    pub status: Option<ProjectStatus>,
}

pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ProjectsQuery>,
) -> Json<Vec<Project>> {
    let projects = match query.status {
        Some(status) => state.marketplace.fetch_projects_by_status(status).await,
        None => state.marketplace.fetch_all_projects().await,
    };
    Json(projects)
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Project>> {
    let project = state
        .marketplace
        .fetch_project_details(&id)
        .await
        .not_found(format!("Project '{}' not found", id))?;

    Ok(Json(project))
}
