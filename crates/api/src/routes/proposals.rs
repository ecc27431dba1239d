//! Proposal routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use common::models::{ProposalInput, ProposalReceipt};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitProposalRequest {
    pub freelancer_id: String,
    #[serde(flatten)]
    pub proposal: ProposalInput,
}

pub async fn submit(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<String>,
    Json(req): Json<SubmitProposalRequest>,
) -> ApiResult<(StatusCode, Json<ProposalReceipt>)> {
    let receipt = state
        .marketplace
        .submit_proposal(&project_id, &req.freelancer_id, req.proposal)
        .await?;

    Ok((StatusCode::CREATED, Json(receipt)))
}
