//! Badge catalog

use common::models::{Badge, Profile};
use std::sync::OnceLock;

/// Badge identifiers
pub mod defs {
    // profile
    pub const PROFILE_COMPLETE: &str = "profile-complete";
    pub const FIRST_LOGIN: &str = "first-login";

    // freelancer
    pub const FIRST_PROPOSAL: &str = "first-proposal";
    pub const FIRST_WIN: &str = "first-win";
    pub const PROJECT_COMPLETED_FREELANCER: &str = "project-completed-freelancer";
    pub const FEEDBACK_RECEIVED_POSITIVE: &str = "feedback-received-positive";
    pub const EARNINGS_MILESTONE_1: &str = "earnings-milestone-1";

    // client
    pub const FIRST_PROJECT_POSTED: &str = "first-project-posted";
    pub const FIRST_HIRE: &str = "first-hire";
    pub const PROJECT_COMPLETED_CLIENT: &str = "project-completed-client";
    pub const FEEDBACK_GIVEN: &str = "feedback-given";
    pub const SPENDING_MILESTONE_1: &str = "spending-milestone-1";

    // no trigger and no points yet
    pub const STREAK_LOGIN_3: &str = "streak-login-3";
    pub const STREAK_PROPOSAL_5: &str = "streak-proposal-5";
}

/// Only a perfect score counts as positive feedback
pub const POSITIVE_RATING: u8 = 5;

/// Every badge that can be earned
pub fn catalog() -> &'static [Badge] {
    static CATALOG: OnceLock<Vec<Badge>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        vec![
            badge(
                defs::PROFILE_COMPLETE,
                "Profile Polished",
                "Complete your profile information (name, bio, skills).",
                "Edit3",
                Some(50),
            ),
            badge(
                defs::FIRST_LOGIN,
                "Welcome Aboard!",
                "Log in for the first time.",
                "UserPlus",
                Some(10),
            ),
            badge(
                defs::FIRST_PROPOSAL,
                "Bidder Beginner",
                "Submit your first project proposal.",
                "Send",
                Some(20),
            ),
            badge(
                defs::FIRST_WIN,
                "Project Winner",
                "Win your first project bid.",
                "Award",
                Some(100),
            ),
            badge(
                defs::PROJECT_COMPLETED_FREELANCER,
                "Task Master",
                "Successfully complete your first project as a freelancer.",
                "CheckCircle",
                Some(75),
            ),
            badge(
                defs::FEEDBACK_RECEIVED_POSITIVE,
                "Top Rated",
                "Receive your first 5-star rating.",
                "Star",
                Some(50),
            ),
            badge(
                defs::EARNINGS_MILESTONE_1,
                "Money Maker",
                "Earn your first $100.",
                "DollarSign",
                Some(50),
            ),
            badge(
                defs::FIRST_PROJECT_POSTED,
                "Project Pioneer",
                "Post your first project.",
                "Briefcase",
                Some(30),
            ),
            badge(
                defs::FIRST_HIRE,
                "Talent Scout",
                "Hire a freelancer for the first time.",
                "UserPlus",
                Some(50),
            ),
            badge(
                defs::PROJECT_COMPLETED_CLIENT,
                "Completionist",
                "Have your first project completed by a freelancer.",
                "CheckCircle",
                Some(75),
            ),
            badge(
                defs::FEEDBACK_GIVEN,
                "Feedback Champion",
                "Leave feedback for a freelancer.",
                "MessageSquare",
                Some(20),
            ),
            badge(
                defs::SPENDING_MILESTONE_1,
                "Big Spender",
                "Spend your first $100 on projects.",
                "TrendingUp",
                Some(50),
            ),
            badge(
                defs::STREAK_LOGIN_3,
                "Consistent Contributor",
                "Log in 3 days in a row.",
                "TrendingUp",
                None,
            ),
            badge(
                defs::STREAK_PROPOSAL_5,
                "Bidding Machine",
                "Submit 5 proposals in a week.",
                "Send",
                None,
            ),
        ]
    })
}

fn badge(id: &str, name: &str, description: &str, icon: &str, points: Option<u64>) -> Badge {
    Badge {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        points_awarded: points,
    }
}

/// Look up a badge definition
pub fn find(badge_id: &str) -> Option<&'static Badge> {
    catalog().iter().find(|b| b.id == badge_id)
}

/// Definitions of the badges a profile holds, in the order they were earned
///
/// Ids missing from the catalog are skipped.
pub fn earned(profile: &Profile) -> Vec<Badge> {
    profile
        .earned_badge_ids
        .iter()
        .filter_map(|id| find(id))
        .cloned()
        .collect()
}

/// Catalog entries the profile has not earned yet, in catalog order
pub fn unearned(profile: &Profile) -> Vec<Badge> {
    catalog()
        .iter()
        .filter(|b| !profile.has_badge(&b.id))
        .cloned()
        .collect()
}
