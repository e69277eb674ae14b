use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    config::Config,
    models::dto::StoredQuestionSet,
    services::{
        agent_service::{AgentFactory, OpenAiCompatFactory},
        generation_service::GenerationService,
    },
};

/// Explicit application state passed to every handler; there are no ambient
/// globals. `last_result` is the single most-recent-result slot: written
/// only on a successful generation, so a failed attempt leaves the prior
/// result (and its `generated_at` timestamp) in place.
#[derive(Clone)]
pub struct AppState {
    pub generation_service: Arc<GenerationService>,
    pub last_result: Arc<RwLock<Option<StoredQuestionSet>>>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::with_factory(config, Arc::new(OpenAiCompatFactory))
    }

    pub fn with_factory(config: Config, factory: Arc<dyn AgentFactory>) -> Self {
        Self {
            generation_service: Arc::new(GenerationService::new(factory)),
            last_result: Arc::new(RwLock::new(None)),
            config: Arc::new(config),
        }
    }
}
