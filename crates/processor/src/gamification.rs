//! Point and badge awards
//!
//! Pure functions over profile values: callers get back a new profile and
//! decide where to store it.

use common::models::Profile;

use crate::{badges, levels};

/// Add points and recompute the level
pub fn award_points(mut profile: Profile, delta: u64) -> Profile {
    profile.points = profile.points.saturating_add(delta);
    profile.level = levels::calculate_level(profile.points).level;
    profile
}

/// Grant a badge and its points together
///
/// Unknown or already earned badges leave the profile untouched.
pub fn award_badge(mut profile: Profile, badge_id: &str) -> Profile {
    let Some(badge) = badges::find(badge_id) else {
        return profile;
    };
    if profile.has_badge(badge_id) {
        return profile;
    }

    profile.earned_badge_ids.push(badge.id.clone());
    match badge.points_awarded {
        Some(points) if points > 0 => award_points(profile, points),
        _ => profile,
    }
}
