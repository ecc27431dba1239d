//! AI-assisted flows backed by an external language model

pub mod client;
pub mod enhance;
pub mod error;
pub mod matching;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use client::{LanguageModel, OpenAiClient};
pub use enhance::{enhance_proposal, EnhanceProposalInput, EnhanceProposalOutput};
pub use error::AiError;
pub use matching::{match_projects, CandidateProject, MatchProjectsInput, MatchProjectsOutput};
