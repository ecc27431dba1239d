//! Marketplace service
//!
//! The operations the frontend calls: project browsing, profile writes,
//! proposals and feedback. Writes fire the badge triggers as a side effect.

use ai::{CandidateProject, LanguageModel, MatchProjectsInput};
use chrono::Utc;
use common::models::{
    Badge, Feedback, FeedbackInput, FeedbackSummary, LevelProgress, Profile, ProfileInput,
    ProfileUpdate, Project, ProjectStatus, ProposalInput, ProposalReceipt, SkillsInput,
};
use common::{Error, Result};
use db::Store;
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::achievements;
use crate::{badges, levels, ratings};

/// Longest accepted feedback comment, in characters
pub const MAX_COMMENT_LEN: usize = 1000;

/// Gamification view of a profile
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileProgress {
    pub profile_id: String,
    pub progress: LevelProgress,
    pub badges: Vec<Badge>,
    /// Catalog entries still locked for this profile
    pub unearned_badges: Vec<Badge>,
}

/// Handles marketplace operations against the data layer
#[derive(Clone)]
pub struct Marketplace {
    store: Store,
}

impl Marketplace {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub async fn fetch_all_projects(&self) -> Vec<Project> {
        db::projects::list(&self.store).await
    }

    pub async fn fetch_projects_by_status(&self, status: ProjectStatus) -> Vec<Project> {
        db::projects::list_by_status(&self.store, status).await
    }

    pub async fn fetch_project_details(&self, id: &str) -> Option<Project> {
        db::projects::get(&self.store, id).await
    }

    pub async fn fetch_user_profile(&self, id: &str) -> Option<Profile> {
        db::profiles::get(&self.store, id).await
    }

    /// Create a profile, or replace the editable fields of an existing one
    ///
    /// Points, level and badges of an existing profile are preserved.
    pub async fn save_profile(&self, id: &str, input: ProfileInput) -> Result<Profile> {
        require_text("name", &input.name)?;
        require_text("email", &input.email)?;

        let skills = input
            .skills
            .as_ref()
            .map(SkillsInput::normalize)
            .unwrap_or_default();
        let mut unlocked = Vec::new();

        let profile = db::profiles::upsert(&self.store, id, |existing| {
            let mut profile = match existing {
                Some(p) => p.clone(),
                None => Profile::new(id, "", ""),
            };
            profile.name = input.name.trim().to_string();
            profile.email = input.email.trim().to_string();
            profile.bio = optional_text(input.bio.as_deref());
            profile.skills = skills;
            profile.avatar_url = optional_text(input.avatar_url.as_deref());
            profile.updated_at = Utc::now();
            unlocked = achievements::on_profile_saved(&mut profile);
            profile
        })
        .await;

        info!(
            "Saved profile {} ({} skills, {} badges unlocked)",
            id,
            profile.skills.len(),
            unlocked.len()
        );
        Ok(profile)
    }

    /// Merge a partial edit into an existing profile
    pub async fn update_profile(&self, id: &str, update: ProfileUpdate) -> Result<Profile> {
        if let Some(name) = &update.name {
            require_text("name", name)?;
        }
        if let Some(email) = &update.email {
            require_text("email", email)?;
        }

        let (profile, unlocked) = db::profiles::modify(&self.store, id, |profile| {
            if let Some(name) = &update.name {
                profile.name = name.trim().to_string();
            }
            if let Some(email) = &update.email {
                profile.email = email.trim().to_string();
            }
            if let Some(bio) = &update.bio {
                profile.bio = optional_text(Some(bio));
            }
            if let Some(skills) = &update.skills {
                profile.skills = skills.normalize();
            }
            if let Some(avatar) = &update.avatar_url {
                profile.avatar_url = optional_text(Some(avatar));
            }
            profile.updated_at = Utc::now();
            achievements::on_profile_saved(profile)
        })
        .await
        .ok_or_else(|| Error::NotFound(format!("Profile '{}' not found", id)))?;

        info!("Updated profile {} ({} badges unlocked)", id, unlocked.len());
        Ok(profile)
    }

    /// Accept a proposal on an open project
    ///
    /// Proposals are not stored; the freelancer's first one earns a badge.
    pub async fn submit_proposal(
        &self,
        project_id: &str,
        freelancer_id: &str,
        input: ProposalInput,
    ) -> Result<ProposalReceipt> {
        let project = db::projects::get(&self.store, project_id)
            .await
            .ok_or_else(|| Error::NotFound(format!("Project '{}' not found", project_id)))?;

        if project.status != ProjectStatus::Open {
            return Err(Error::Validation(format!(
                "Project '{}' is {} and not accepting proposals",
                project_id,
                project.status.as_str()
            )));
        }
        if project.client_id == freelancer_id {
            return Err(Error::Validation(
                "Clients cannot bid on their own projects".to_string(),
            ));
        }
        require_text("coverLetter", &input.cover_letter)?;
        if !input.proposed_rate.is_finite() || input.proposed_rate <= 0.0 {
            return Err(Error::Validation("proposedRate must be positive".to_string()));
        }

        let badges_earned = match db::profiles::modify(
            &self.store,
            freelancer_id,
            achievements::on_proposal_submitted,
        )
        .await
        {
            Some((_, unlocked)) => unlocked,
            None => {
                debug!("No profile for {}, skipping proposal badges", freelancer_id);
                Vec::new()
            }
        };

        info!(
            "Proposal from {} on {} for {:.2}",
            freelancer_id, project_id, input.proposed_rate
        );

        Ok(ProposalReceipt {
            id: Uuid::new_v4().to_string(),
            project_id: project_id.to_string(),
            freelancer_id: freelancer_id.to_string(),
            proposed_rate: input.proposed_rate,
            submitted_at: Utc::now(),
            badges_earned,
        })
    }

    /// All feedback a user has received, newest first
    pub async fn fetch_user_feedback(&self, user_id: &str) -> FeedbackSummary {
        let feedback = db::feedback::list_for_recipient(&self.store, user_id).await;
        summarize(feedback)
    }

    /// Feedback a client has received, newest first
    ///
    /// Same filter as [`Self::fetch_user_feedback`]; kept separate for the
    /// client-facing pages.
    pub async fn fetch_client_feedback(&self, client_id: &str) -> FeedbackSummary {
        let feedback = db::feedback::list_for_recipient(&self.store, client_id).await;
        summarize(feedback)
    }

    /// Record feedback and fire the giver/receiver triggers
    pub async fn submit_feedback(&self, input: FeedbackInput) -> Result<Feedback> {
        validate_feedback(&input)?;

        if db::projects::get(&self.store, &input.project_id).await.is_none() {
            return Err(Error::NotFound(format!(
                "Project '{}' not found",
                input.project_id
            )));
        }

        let feedback = db::feedback::insert(
            &self.store,
            Feedback {
                id: Uuid::new_v4().to_string(),
                project_id: input.project_id,
                author_id: input.author_id,
                recipient_id: input.recipient_id,
                rating: input.rating,
                comment: input.comment.trim().to_string(),
                submitted_at: Utc::now(),
                author_role: input.author_role,
            },
        )
        .await;

        info!(
            "Feedback {} from {} to {} ({} stars)",
            feedback.id, feedback.author_id, feedback.recipient_id, feedback.rating
        );

        let role = feedback.author_role;
        if db::profiles::modify(&self.store, &feedback.author_id, |p| {
            achievements::on_feedback_given(p, role)
        })
        .await
        .is_none()
        {
            debug!("No profile for author {}", feedback.author_id);
        }

        let rating = feedback.rating;
        if db::profiles::modify(&self.store, &feedback.recipient_id, |p| {
            achievements::on_feedback_received(p, rating)
        })
        .await
        .is_none()
        {
            debug!("No profile for recipient {}", feedback.recipient_id);
        }

        Ok(feedback)
    }

    /// Level progress with earned and still locked badges for a profile
    pub async fn fetch_profile_progress(&self, id: &str) -> Result<ProfileProgress> {
        let profile = self
            .fetch_user_profile(id)
            .await
            .ok_or_else(|| Error::NotFound(format!("Profile '{}' not found", id)))?;

        Ok(ProfileProgress {
            progress: levels::level_progress(profile.points),
            badges: badges::earned(&profile),
            unearned_badges: badges::unearned(&profile),
            profile_id: profile.id,
        })
    }

    /// Open projects ranked for a freelancer by the language model
    pub async fn recommend_projects(
        &self,
        model: &dyn LanguageModel,
        freelancer_id: &str,
    ) -> Result<Vec<Project>> {
        let profile = self
            .fetch_user_profile(freelancer_id)
            .await
            .ok_or_else(|| Error::NotFound(format!("Profile '{}' not found", freelancer_id)))?;

        let open = self.fetch_projects_by_status(ProjectStatus::Open).await;
        let input = MatchProjectsInput {
            freelancer_skills: profile.skills.clone(),
            freelancer_bio: profile.bio.clone(),
            available_projects: open.iter().map(CandidateProject::from).collect(),
        };

        let matched = ai::match_projects(model, input).await?;

        Ok(matched
            .matched_project_ids
            .iter()
            .filter_map(|id| open.iter().find(|p| &p.id == id).cloned())
            .collect())
    }
}

fn summarize(feedback: Vec<Feedback>) -> FeedbackSummary {
    let stats = ratings::rating_stats(&feedback);
    FeedbackSummary { feedback, stats }
}

fn validate_feedback(input: &FeedbackInput) -> Result<()> {
    if !(1..=5).contains(&input.rating) {
        return Err(Error::Validation(format!(
            "rating must be between 1 and 5, got {}",
            input.rating
        )));
    }
    require_text("comment", &input.comment)?;
    if input.comment.trim().chars().count() > MAX_COMMENT_LEN {
        return Err(Error::Validation(format!(
            "comment must be at most {} characters",
            MAX_COMMENT_LEN
        )));
    }
    if input.author_id == input.recipient_id {
        return Err(Error::Validation(
            "feedback cannot be addressed to its author".to_string(),
        ));
    }
    Ok(())
}

fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::Validation(format!("{} must not be empty", field)));
    }
    Ok(())
}

fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
