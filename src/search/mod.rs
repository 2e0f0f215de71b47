//! Retrieval collaborator: the hosted search index.

mod azure;
mod retriever;
mod types;

pub use azure::AzureSearchRetriever;
pub use retriever::DocumentRetriever;
pub use types::RetrievedDocument;
