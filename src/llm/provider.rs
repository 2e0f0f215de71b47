use async_trait::async_trait;

use super::types::ChatRequest;
use crate::core::errors::ApiError;

#[async_trait]
pub trait ChatModel: Send + Sync {
    /// chat completion (non-streaming)
    async fn chat(&self, request: ChatRequest) -> Result<String, ApiError>;

    /// check if the model deployment is reachable
    async fn health_check(&self) -> Result<bool, ApiError>;
}
