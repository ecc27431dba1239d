//! Feedback routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use common::models::{Feedback, FeedbackInput, FeedbackSummary};
use std::sync::Arc;

use crate::error::ApiResult;
use crate::state::AppState;

pub async fn for_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<FeedbackSummary> {
    Json(state.marketplace.fetch_user_feedback(&id).await)
}

pub async fn for_client(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<FeedbackSummary> {
    Json(state.marketplace.fetch_client_feedback(&id).await)
}

pub async fn submit(
    State(state): State<Arc<AppState>>,
    Json(input): Json<FeedbackInput>,
) -> ApiResult<(StatusCode, Json<Feedback>)> {
    let feedback = state.marketplace.submit_feedback(input).await?;
    Ok((StatusCode::CREATED, Json(feedback)))
}
