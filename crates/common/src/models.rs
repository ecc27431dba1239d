//! Domain models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn default_level() -> u32 {
    1
}

/// A user's account record, freelancer or client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub points: u64,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub earned_badge_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// A fresh profile with default gamification state
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            bio: None,
            skills: Vec::new(),
            avatar_url: None,
            points: 0,
            level: 1,
            earned_badge_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn has_badge(&self, badge_id: &str) -> bool {
        self.earned_badge_ids.iter().any(|b| b == badge_id)
    }

    /// Name, bio and at least one skill
    pub fn is_complete(&self) -> bool {
        let has_bio = self.bio.as_deref().is_some_and(|b| !b.trim().is_empty());
        !self.name.trim().is_empty() && has_bio && !self.skills.is_empty()
    }
}

/// Project lifecycle state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Open,
    InProgress,
    Completed,
    Cancelled,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Whether a freelancer may be assigned in this state
    pub fn allows_assignment(&self) -> bool {
        matches!(self, Self::InProgress | Self::Completed)
    }
}

/// A project posted by a client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub budget: f64,
    pub deadline: DateTime<Utc>,
    pub category_icon: String,
    pub client_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_avatar_url: Option<String>,
    pub status: ProjectStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freelancer_id: Option<String>,
}

impl Project {
    /// Positive budget, and a freelancer only once work has started
    pub fn is_consistent(&self) -> bool {
        let assignment_ok = self.freelancer_id.is_none() || self.status.allows_assignment();
        self.budget > 0.0 && assignment_ok
    }
}

/// Role of the author of a piece of feedback
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Freelancer,
}

/// A rating and comment one user leaves for another
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: String,
    pub project_id: String,
    pub author_id: String,
    pub recipient_id: String,
    pub rating: u8,
    pub comment: String,
    pub submitted_at: DateTime<Utc>,
    pub author_role: Role,
}

/// Aggregate over a user's received feedback
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RatingStats {
    pub average_rating: f64,
    pub total_ratings: usize,
}

/// Feedback received by a user together with its stats
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSummary {
    pub feedback: Vec<Feedback>,
    pub stats: RatingStats,
}

/// An achievement definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points_awarded: Option<u64>,
}

/// A tier in the level table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pub level: u32,
    pub name: String,
    pub min_points: u64,
    /// Gap to the next threshold, absent at the top level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points_to_next_level: Option<u64>,
}

/// Where a point total sits in the level table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LevelProgress {
    pub level: u32,
    pub name: String,
    pub min_points: u64,
    pub points: u64,
    /// Threshold of the next level, `None` at the top
    pub next_level_at: Option<u64>,
    pub points_to_next_level: Option<u64>,
}

/// Skills as submitted by a form: either a list or a comma-separated string
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SkillsInput {
    List(Vec<String>),
    Text(String),
}

impl SkillsInput {
    /// Trimmed, non-empty entries in submission order
    pub fn normalize(&self) -> Vec<String> {
        let raw: Vec<&str> = match self {
            Self::List(items) => items.iter().map(String::as_str).collect(),
            Self::Text(text) => text.split(',').collect(),
        };
        raw.into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Full profile form, used when saving
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInput {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub skills: Option<SkillsInput>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Partial profile edit; absent fields are left untouched
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub skills: Option<SkillsInput>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// A freelancer's bid on a project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProposalInput {
    pub cover_letter: String,
    pub proposed_rate: f64,
}

/// Acknowledgement of a submitted proposal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProposalReceipt {
    pub id: String,
    pub project_id: String,
    pub freelancer_id: String,
    pub proposed_rate: f64,
    pub submitted_at: DateTime<Utc>,
    /// Badges unlocked by this submission
    pub badges_earned: Vec<String>,
}

/// Feedback form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackInput {
    pub project_id: String,
    pub author_id: String,
    pub recipient_id: String,
    pub rating: u8,
    pub comment: String,
    pub author_role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_defaults_missing_gamification_fields() {
        let json = r#"{
            "id": "user-1",
            "name": "Ada",
            "email": "ada@example.com",
            "skills": ["Rust"],
            "createdAt": "2026-01-01T10:00:00Z",
            "updatedAt": "2026-01-01T10:00:00Z"
        }"#;

        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.points, 0);
        assert_eq!(profile.level, 1);
        assert!(profile.earned_badge_ids.is_empty());
    }

    #[test]
    fn test_skills_from_comma_separated_text() {
        let skills = SkillsInput::Text(" Rust, , TypeScript ,SQL,".to_string());
        assert_eq!(skills.normalize(), vec!["Rust", "TypeScript", "SQL"]);
    }

    #[test]
    fn test_skills_from_list_drops_blanks() {
        let skills = SkillsInput::List(vec![" Go ".into(), "".into(), "  ".into(), "Docker".into()]);
        assert_eq!(skills.normalize(), vec!["Go", "Docker"]);
    }

    #[test]
    fn test_skills_input_accepts_both_shapes() {
        let list: SkillsInput = serde_json::from_str(r#"["a", "b"]"#).unwrap();
        let text: SkillsInput = serde_json::from_str(r#""a, b""#).unwrap();
        assert_eq!(list.normalize(), text.normalize());
    }

    #[test]
    fn test_proposal_input_uses_proposed_rate() {
        let input: ProposalInput =
            serde_json::from_str(r#"{"coverLetter": "Hi", "proposedRate": 450.5}"#).unwrap();
        assert_eq!(input.proposed_rate, 450.5);
    }

    #[test]
    fn test_project_without_client_details() {
        let json = r#"{
            "id": "projA",
            "title": "Project A",
            "description": "...",
            "budget": 100,
            "deadline": "2026-01-01T10:00:00Z",
            "categoryIcon": "Briefcase",
            "clientId": "client1",
            "status": "completed",
            "freelancerId": "mock-user-id"
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();
        assert!(project.client_name.is_none());
        assert!(project.is_consistent());
    }

    #[test]
    fn test_project_status_wire_names() {
        let json = serde_json::to_string(&ProjectStatus::InProgress).unwrap();
        assert_eq!(json, r#""in_progress""#);
        assert_eq!(ProjectStatus::Cancelled.as_str(), "cancelled");
    }

    #[test]
    fn test_profile_completeness() {
        let mut profile = Profile::new("user-1", "Ada", "ada@example.com");
        assert!(!profile.is_complete());

        profile.bio = Some("Systems programmer".into());
        assert!(!profile.is_complete());

        // no avatar needed
        profile.skills = vec!["Rust".into()];
        assert!(profile.is_complete());

        profile.bio = Some("   ".into());
        assert!(!profile.is_complete());

        profile.bio = Some("Systems programmer".into());
        profile.name = " ".into();
        assert!(!profile.is_complete());
    }
}
