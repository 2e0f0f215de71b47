//! Collaborator preflight: verify both hosted services answer with the
//! configured credentials before deploying.

use redlist_rag::config::AppConfig;
use redlist_rag::llm::{AzureOpenAiChatModel, ChatModel};
use redlist_rag::search::{AzureSearchRetriever, DocumentRetriever};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    println!("=== Testing chat model connection ===");
    println!("Endpoint: {}", config.openai_endpoint);
    println!("Deployment: {}", config.openai_deployment);
    let model = AzureOpenAiChatModel::new(
        config.openai_endpoint.clone(),
        config.openai_deployment.clone(),
        config.openai_api_key.clone(),
    );
    let model_ok = model.health_check().await.unwrap_or(false);

    println!("\n=== Testing search index connection ===");
    println!("Endpoint: {}", config.search_endpoint);
    println!("Index: {}", config.search_index);
    let retriever = AzureSearchRetriever::new(
        config.search_endpoint.clone(),
        config.search_index.clone(),
        config.search_key.clone(),
    );
    let search_ok = retriever.health_check().await.unwrap_or(false);

    println!("\nChat model:   {}", if model_ok { "PASS" } else { "FAIL" });
    println!("Search index: {}", if search_ok { "PASS" } else { "FAIL" });

    if !(model_ok && search_ok) {
        std::process::exit(1);
    }

    Ok(())
}
