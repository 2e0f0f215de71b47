//! Generation collaborator: the hosted language model.

mod azure_openai;
mod provider;
mod types;

pub use azure_openai::AzureOpenAiChatModel;
pub use provider::ChatModel;
pub use types::{ChatMessage, ChatRequest};
