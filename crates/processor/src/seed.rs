//! Seed store with badges applied
//!
//! `db::seed` profiles carry no awards. Milestones that no trigger covers yet
//! are granted directly, then every seed profile and seed review goes through
//! the same triggers live writes use, so seeded badges agree with seeded
//! feedback.

use common::models::Profile;
use db::Store;
use std::time::Duration;
use tracing::info;

use crate::achievements;
use crate::badges::defs;
use crate::gamification::award_badge;

/// Project history badges for the seeded completed work
const MILESTONES: &[(&str, &str)] = &[
    ("freelancer1", defs::FIRST_WIN),
    ("freelancer1", defs::PROJECT_COMPLETED_FREELANCER),
    ("client-ghi", defs::FIRST_HIRE),
    ("client-ghi", defs::PROJECT_COMPLETED_CLIENT),
];

fn find_mut<'a>(profiles: &'a mut [Profile], id: &str) -> Option<&'a mut Profile> {
    profiles.iter_mut().find(|p| p.id == id)
}

/// Seed profiles with their points, levels and badges
pub fn profiles() -> Vec<Profile> {
    let mut profiles = db::seed::profiles();

    for profile in profiles.iter_mut() {
        achievements::on_profile_saved(profile);
    }

    for &(id, badge_id) in MILESTONES {
        if let Some(profile) = find_mut(&mut profiles, id) {
            *profile = award_badge(profile.clone(), badge_id);
        }
    }

    for review in db::seed::feedback() {
        if let Some(author) = find_mut(&mut profiles, &review.author_id) {
            achievements::on_feedback_given(author, review.author_role);
        }
        if let Some(recipient) = find_mut(&mut profiles, &review.recipient_id) {
            achievements::on_feedback_received(recipient, review.rating);
        }
    }

    profiles
}

/// A store loaded with the built-in seed data
pub fn store(latency: Duration) -> Store {
    let profiles = profiles();
    let badges: usize = profiles.iter().map(|p| p.earned_badge_ids.len()).sum();
    info!(
        "Seeded {} badges across {} profiles",
        badges,
        profiles.len()
    );
    Store::with_data(
        latency,
        db::seed::projects(),
        profiles,
        db::seed::feedback(),
    )
}
