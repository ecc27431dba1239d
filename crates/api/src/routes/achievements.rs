//! Badge and level catalog routes

use axum::Json;
use common::models::{Badge, Level};

/// List all badges (catalog)
pub async fn badges() -> Json<Vec<Badge>> {
    Json(processor::badges::catalog().to_vec())
}

/// The level table
pub async fn levels() -> Json<Vec<Level>> {
    Json(processor::levels::all().to_vec())
}
