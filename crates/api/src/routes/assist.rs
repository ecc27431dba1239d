//! AI assistance routes

use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::info;

use crate::error::ApiResult;
use crate::state::AppState;
use ai::{EnhanceProposalInput, EnhanceProposalOutput};

/// Rewrite a draft proposal against the project requirements
pub async fn enhance_proposal(
    State(state): State<Arc<AppState>>,
    Json(input): Json<EnhanceProposalInput>,
) -> ApiResult<Json<EnhanceProposalOutput>> {
    let model = state.model()?;
    info!("Proposal enhancement requested");
    let output = ai::enhance_proposal(model, input).await?;
    Ok(Json(output))
}
