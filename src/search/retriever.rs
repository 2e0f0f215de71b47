use async_trait::async_trait;

use super::types::RetrievedDocument;
use crate::core::errors::ApiError;

#[async_trait]
pub trait DocumentRetriever: Send + Sync {
    /// search the index for the top documents matching the query
    async fn retrieve(&self, query: &str, top: usize) -> Result<Vec<RetrievedDocument>, ApiError>;

    /// check if the search service is reachable
    async fn health_check(&self) -> Result<bool, ApiError>;
}
