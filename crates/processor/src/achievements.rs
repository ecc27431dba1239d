//! Badge triggers
//!
//! Each hook inspects a profile, grants whatever the event earns and returns
//! the ids that were newly unlocked. Hooks run inside
//! [`db::profiles::modify`] so the read and the write happen under one lock.

use common::models::{Profile, Role};
use tracing::info;

use crate::badges::{defs, POSITIVE_RATING};
use crate::gamification::award_badge;

/// Profile was created or edited
pub fn on_profile_saved(profile: &mut Profile) -> Vec<String> {
    let mut unlocked = Vec::new();
    if profile.is_complete() && try_unlock(profile, defs::PROFILE_COMPLETE) {
        unlocked.push(defs::PROFILE_COMPLETE.to_string());
    }
    unlocked
}

/// Freelancer submitted a proposal
pub fn on_proposal_submitted(profile: &mut Profile) -> Vec<String> {
    let mut unlocked = Vec::new();
    if try_unlock(profile, defs::FIRST_PROPOSAL) {
        unlocked.push(defs::FIRST_PROPOSAL.to_string());
    }
    unlocked
}

/// User left feedback for someone else
///
/// Only clients reviewing a freelancer earn a badge for it.
pub fn on_feedback_given(profile: &mut Profile, author_role: Role) -> Vec<String> {
    let mut unlocked = Vec::new();
    if author_role == Role::Client && try_unlock(profile, defs::FEEDBACK_GIVEN) {
        unlocked.push(defs::FEEDBACK_GIVEN.to_string());
    }
    unlocked
}

/// User received feedback with the given rating
pub fn on_feedback_received(profile: &mut Profile, rating: u8) -> Vec<String> {
    let mut unlocked = Vec::new();
    if rating == POSITIVE_RATING && try_unlock(profile, defs::FEEDBACK_RECEIVED_POSITIVE) {
        unlocked.push(defs::FEEDBACK_RECEIVED_POSITIVE.to_string());
    }
    unlocked
}

/// Try to unlock a badge, returns true if newly unlocked
fn try_unlock(profile: &mut Profile, badge_id: &str) -> bool {
    if profile.has_badge(badge_id) {
        return false;
    }

    let updated = award_badge(profile.clone(), badge_id);
    if !updated.has_badge(badge_id) {
        return false;
    }

    info!(
        "🏆 Badge unlocked: {} for {} ({} -> {} points, level {})",
        badge_id, profile.id, profile.points, updated.points, updated.level
    );
    *profile = updated;
    true
}
