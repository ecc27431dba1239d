//! Proposal enhancement
//!
//! Rewrites a freelancer's draft proposal so it addresses the project's
//! requirements more directly, keeping the freelancer's voice and facts.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{AiError, LanguageModel};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceProposalInput {
    pub proposal: String,
    pub project_requirements: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceProposalOutput {
    pub enhanced_proposal: String,
}

const SYSTEM_PROMPT: &str = r#"You are an expert proposal writer helping freelancers win projects.
Improve the freelancer's proposal so it is clear, persuasive and tailored to the project requirements.
Keep every fact the freelancer states, do not invent experience, and keep a professional tone.

Respond with valid JSON only. Format:
{"enhancedProposal": "<the improved proposal text>"}
"#;

impl EnhanceProposalInput {
    fn validate(&self) -> Result<(), AiError> {
        if self.proposal.trim().is_empty() {
            return Err(AiError::Validation("proposal must not be empty".to_string()));
        }
        if self.project_requirements.trim().is_empty() {
            return Err(AiError::Validation(
                "projectRequirements must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    fn render(&self) -> String {
        format!(
            "Project requirements:\n{}\n\nFreelancer's proposal:\n{}\n",
            self.project_requirements.trim(),
            self.proposal.trim()
        )
    }
}

/// Enhance a proposal against the project's requirements
pub async fn enhance_proposal(
    model: &dyn LanguageModel,
    input: EnhanceProposalInput,
) -> Result<EnhanceProposalOutput, AiError> {
    input.validate()?;

    let content = model.complete_json(SYSTEM_PROMPT, &input.render()).await?;

    let output: EnhanceProposalOutput = serde_json::from_str(&content)
        .map_err(|e| AiError::Validation(format!("unexpected model output: {}", e)))?;

    if output.enhanced_proposal.trim().is_empty() {
        return Err(AiError::Validation(
            "model returned an empty proposal".to_string(),
        ));
    }

    info!(
        "Enhanced proposal ({} -> {} chars)",
        input.proposal.len(),
        output.enhanced_proposal.len()
    );
    Ok(output)
}
