//! Project matching
//!
//! Ranks open projects for a freelancer by relevance to their skills and bio.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info, warn};

use crate::{AiError, LanguageModel};

/// Upper bound on returned matches
pub const MAX_MATCHES: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProject {
    pub id: String,
    pub title: String,
    pub description: String,
    pub budget: f64,
}

impl From<&common::models::Project> for CandidateProject {
    fn from(p: &common::models::Project) -> Self {
        Self {
            id: p.id.clone(),
            title: p.title.clone(),
            description: p.description.clone(),
            budget: p.budget,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchProjectsInput {
    pub freelancer_skills: Vec<String>,
    #[serde(default)]
    pub freelancer_bio: Option<String>,
    pub available_projects: Vec<CandidateProject>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MatchProjectsOutput {
    pub matched_project_ids: Vec<String>,
}

const SYSTEM_PROMPT: &str = r#"You match freelancers to projects on a freelance marketplace.
Given the freelancer's skills and bio and a list of available projects, pick the projects
the freelancer is best suited for, most relevant first. Return at most 5 project ids and
only ids from the list you were given. Return an empty list if nothing fits.

Respond with valid JSON only. Format:
{"matchedProjectIds": ["5", "1"]}
"#;

impl MatchProjectsInput {
    fn bio(&self) -> Option<&str> {
        self.freelancer_bio
            .as_deref()
            .map(str::trim)
            .filter(|b| !b.is_empty())
    }

    fn has_profile_signal(&self) -> bool {
        self.freelancer_skills.iter().any(|s| !s.trim().is_empty()) || self.bio().is_some()
    }

    fn validate(&self) -> Result<(), AiError> {
        for p in &self.available_projects {
            if p.id.trim().is_empty() {
                return Err(AiError::Validation("project id must not be empty".to_string()));
            }
        }
        Ok(())
    }

    fn render(&self) -> String {
        let mut out = String::from("Freelancer profile:\n");
        out.push_str(&format!("Skills: {}\n", self.freelancer_skills.join(", ")));
        out.push_str(&format!("Bio: {}\n\n", self.bio().unwrap_or("(none)")));
        out.push_str("Available projects:\n");
        for p in &self.available_projects {
            out.push_str(&format!(
                "- id: {}\n  title: {}\n  description: {}\n  budget: {:.2}\n",
                p.id, p.title, p.description, p.budget
            ));
        }
        out
    }
}

/// Pick up to [`MAX_MATCHES`] projects for a freelancer, best first
pub async fn match_projects(
    model: &dyn LanguageModel,
    input: MatchProjectsInput,
) -> Result<MatchProjectsOutput, AiError> {
    if input.available_projects.is_empty() || !input.has_profile_signal() {
        debug!("Nothing to match, skipping model call");
        return Ok(MatchProjectsOutput::default());
    }
    input.validate()?;

    let content = model.complete_json(SYSTEM_PROMPT, &input.render()).await?;

    let raw: MatchProjectsOutput = serde_json::from_str(&content)
        .map_err(|e| AiError::Validation(format!("unexpected model output: {}", e)))?;

    if raw.matched_project_ids.len() > MAX_MATCHES {
        return Err(AiError::Validation(format!(
            "model returned {} matches, at most {} allowed",
            raw.matched_project_ids.len(),
            MAX_MATCHES
        )));
    }

    let known: HashSet<&str> = input
        .available_projects
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    let mut seen = HashSet::new();
    let mut matched = Vec::with_capacity(raw.matched_project_ids.len());
    for id in raw.matched_project_ids {
        if !known.contains(id.as_str()) {
            warn!("Discarding unknown project id {} from model output", id);
            continue;
        }
        if seen.insert(id.clone()) {
            matched.push(id);
        }
    }

    info!(
        "Matched {} of {} projects",
        matched.len(),
        input.available_projects.len()
    );
    Ok(MatchProjectsOutput {
        matched_project_ids: matched,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeModel;

    fn candidate(id: &str) -> CandidateProject {
        CandidateProject {
            id: id.to_string(),
            title: format!("Project {}", id),
            description: "Build something".to_string(),
            budget: 1000.0,
        }
    }

    fn input(projects: Vec<CandidateProject>) -> MatchProjectsInput {
        MatchProjectsInput {
            freelancer_skills: vec!["Rust".to_string(), "SQL".to_string()],
            freelancer_bio: Some("Backend developer".to_string()),
            available_projects: projects,
        }
    }

    #[tokio::test]
    async fn test_no_candidates_skips_model() {
        let model = FakeModel::replying(r#"{"matchedProjectIds": ["p1"]}"#);
        let out = match_projects(&model, input(vec![])).await.unwrap();
        assert!(out.matched_project_ids.is_empty());
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn test_no_skills_and_no_bio_skips_model() {
        let model = FakeModel::replying(r#"{"matchedProjectIds": ["p1"]}"#);
        let mut req = input(vec![candidate("p1")]);
        req.freelancer_skills = vec!["  ".to_string()];
        req.freelancer_bio = Some("".to_string());

        let out = match_projects(&model, req).await.unwrap();
        assert!(out.matched_project_ids.is_empty());
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn test_bio_alone_is_enough_to_match() {
        let model = FakeModel::replying(r#"{"matchedProjectIds": ["p1"]}"#);
        let mut req = input(vec![candidate("p1")]);
        req.freelancer_skills.clear();

        let out = match_projects(&model, req).await.unwrap();
        assert_eq!(out.matched_project_ids, vec!["p1"]);
        assert_eq!(model.calls(), 1);
    }

    #[tokio::test]
    async fn test_order_preserved_and_unknown_ids_dropped() {
        let model =
            FakeModel::replying(r#"{"matchedProjectIds": ["p3", "nope", "p1", "p3"]}"#);
        let req = input(vec![candidate("p1"), candidate("p2"), candidate("p3")]);

        let out = match_projects(&model, req).await.unwrap();
        assert_eq!(out.matched_project_ids, vec!["p3", "p1"]);
    }

    #[tokio::test]
    async fn test_too_many_matches_is_validation_failure() {
        let model = FakeModel::replying(
            r#"{"matchedProjectIds": ["p1", "p2", "p3", "p4", "p5", "p6"]}"#,
        );
        let projects = (1..=6).map(|i| candidate(&format!("p{}", i))).collect();

        let err = match_projects(&model, input(projects)).await.unwrap_err();
        assert!(matches!(err, AiError::Validation(_)));
    }

    #[tokio::test]
    async fn test_prompt_lists_every_candidate() {
        let model = FakeModel::replying(r#"{"matchedProjectIds": []}"#);
        let req = input(vec![candidate("p1"), candidate("p2")]);
        match_projects(&model, req).await.unwrap();

        let prompt = model.last_prompt().unwrap();
        assert!(prompt.contains("id: p1"));
        assert!(prompt.contains("id: p2"));
        assert!(prompt.contains("Skills: Rust, SQL"));
    }

    #[tokio::test]
    async fn test_model_failure_propagates() {
        let model = FakeModel::failing();
        let err = match_projects(&model, input(vec![candidate("p1")]))
            .await
            .unwrap_err();
        assert!(matches!(err, AiError::Upstream(_)));
    }
}
