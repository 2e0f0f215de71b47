use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::AppConfig;
use crate::llm::AzureOpenAiChatModel;
use crate::rag::ChatOrchestrator;
use crate::search::AzureSearchRetriever;

/// Shared application state.
///
/// Both collaborator clients are constructed exactly once here, before
/// the server accepts requests, and injected into the request pipeline.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub orchestrator: Arc<ChatOrchestrator>,
    #[allow(dead_code)]
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn initialize(config: AppConfig) -> Arc<Self> {
        let retriever = Arc::new(AzureSearchRetriever::new(
            config.search_endpoint.clone(),
            config.search_index.clone(),
            config.search_key.clone(),
        ));
        let model = Arc::new(AzureOpenAiChatModel::new(
            config.openai_endpoint.clone(),
            config.openai_deployment.clone(),
            config.openai_api_key.clone(),
        ));
        let orchestrator = Arc::new(ChatOrchestrator::new(retriever, model));
        let started_at = Utc::now();

        Arc::new(AppState {
            config,
            orchestrator,
            started_at,
        })
    }
}
