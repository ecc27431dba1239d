//! In-memory data layer for BidCraft
//!
//! Stands in for a remote persistence API: every call waits a fixed,
//! configurable latency and then reads or writes process memory. Nothing
//! survives a restart.

use common::models::{Feedback, Profile, Project};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::info;

pub mod feedback;
pub mod profiles;
pub mod projects;
pub mod seed;


struct Inner {
    projects: Vec<Project>,
    profiles: RwLock<HashMap<String, Profile>>,
    feedback: RwLock<Vec<Feedback>>,
    latency: Duration,
}

/// Shared handle to the in-memory collections
#[derive(Clone)]
pub struct Store {
    inner: Arc<Inner>,
}

impl Store {
    /// A store with the seed projects but no profiles or feedback
    pub fn empty(latency: Duration) -> Self {
        Self::with_data(latency, seed::projects(), Vec::new(), Vec::new())
    }

    pub fn with_data(
        latency: Duration,
        projects: Vec<Project>,
        profiles: Vec<Profile>,
        feedback: Vec<Feedback>,
    ) -> Self {
        info!(
            "Loading store with {} projects, {} profiles, {} feedback entries",
            projects.len(),
            profiles.len(),
            feedback.len()
        );
        let profiles = profiles.into_iter().map(|p| (p.id.clone(), p)).collect();
        Self {
            inner: Arc::new(Inner {
                projects,
                profiles: RwLock::new(profiles),
                feedback: RwLock::new(feedback),
                latency,
            }),
        }
    }

    /// Simulated round trip to the backend
    async fn round_trip(&self) {
        if !self.inner.latency.is_zero() {
            tokio::time::sleep(self.inner.latency).await;
        }
    }
}
