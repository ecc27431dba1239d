//! Profile routes

use axum::{
    extract::{Path, State},
    Json,
};
use common::models::{Profile, ProfileInput, ProfileUpdate, Project};
use processor::ProfileProgress;
use std::sync::Arc;

use crate::error::{ApiResult, OptionExt};
use crate::state::AppState;

pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Profile>> {
    let profile = state
        .marketplace
        .fetch_user_profile(&id)
        .await
        .not_found(format!("Profile '{}' not found", id))?;

    Ok(Json(profile))
}

pub async fn save(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(input): Json<ProfileInput>,
) -> ApiResult<Json<Profile>> {
    let profile = state.marketplace.save_profile(&id, input).await?;
    Ok(Json(profile))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(update): Json<ProfileUpdate>,
) -> ApiResult<Json<Profile>> {
    let profile = state.marketplace.update_profile(&id, update).await?;
    Ok(Json(profile))
}

pub async fn progress(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProfileProgress>> {
    let progress = state.marketplace.fetch_profile_progress(&id).await?;
    Ok(Json(progress))
}

/// AI-ranked open projects for this freelancer
pub async fn matches(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<Project>>> {
    let model = state.model()?;
    let projects = state.marketplace.recommend_projects(model, &id).await?;
    Ok(Json(projects))
}
