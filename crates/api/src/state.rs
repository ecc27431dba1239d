//! Application state

use ai::{LanguageModel, OpenAiClient};
use common::Config;
use db::Store;
use processor::Marketplace;
use std::sync::Arc;

use crate::error::ApiError;

/// Shared application state
pub struct AppState {
    pub config: Config,
    pub marketplace: Marketplace,
    pub model: Option<Arc<dyn LanguageModel>>,
}

impl AppState {
    pub fn new(config: Config, store: Store) -> Self {
        let model = OpenAiClient::from_config(&config)
            .map(|client| Arc::new(client) as Arc<dyn LanguageModel>);
        Self::with_model(config, store, model)
    }

    pub fn with_model(
        config: Config,
        store: Store,
        model: Option<Arc<dyn LanguageModel>>,
    ) -> Self {
        Self {
            config,
            marketplace: Marketplace::new(store),
            model,
        }
    }

    /// The configured model, or 503 when AI is disabled
    pub fn model(&self) -> Result<&dyn LanguageModel, ApiError> {
        self.model.as_deref().ok_or(ApiError::AiUnavailable)
    }
}
