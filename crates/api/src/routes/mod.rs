//! API routes

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::state::AppState;

pub mod achievements;
pub mod assist;
pub mod feedback;
pub mod health;
pub mod profiles;
pub mod projects;
pub mod proposals;

#[cfg(test)]
mod routes_test;

/// Build the API router with state
pub fn api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/projects", get(projects::list))
        .route("/api/projects/:id", get(projects::get))
        .route("/api/projects/:id/proposals", post(proposals::submit))
        .route(
            "/api/profiles/:id",
            get(profiles::get)
                .put(profiles::save)
                .patch(profiles::update),
        )
        .route("/api/profiles/:id/progress", get(profiles::progress))
        .route("/api/profiles/:id/matches", get(profiles::matches))
        .route("/api/users/:id/feedback", get(feedback::for_user))
        .route("/api/clients/:id/feedback", get(feedback::for_client))
        .route("/api/feedback", post(feedback::submit))
        .route("/api/badges", get(achievements::badges))
        .route("/api/levels", get(achievements::levels))
        .route("/api/ai/enhance-proposal", post(assist::enhance_proposal))
        .with_state(state)
}
