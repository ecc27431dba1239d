//! AI flow errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AiError {
    #[error("Language model API key not configured")]
    NotConfigured,
    #[error("Schema validation failed: {0}")]
    Validation(String),
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Model call failed: {0}")]
    Upstream(String),
}

impl From<AiError> for common::Error {
    fn from(e: AiError) -> Self {
        match e {
            AiError::NotConfigured => common::Error::Config(e.to_string()),
            AiError::Validation(msg) => common::Error::Validation(msg),
            AiError::Request(_) | AiError::Upstream(_) => common::Error::ExternalCall(e.to_string()),
        }
    }
}
