use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use super::provider::ChatModel;
use super::types::{ChatMessage, ChatRequest};
use crate::core::errors::ApiError;

const API_VERSION: &str = "2024-02-01";

/// HTTP client for a hosted chat-completions deployment.
#[derive(Clone)]
pub struct AzureOpenAiChatModel {
    endpoint: String,
    deployment: String,
    api_key: Option<String>,
    client: Client,
}

impl AzureOpenAiChatModel {
    pub fn new(endpoint: String, deployment: String, api_key: Option<String>) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            deployment,
            api_key,
            client: Client::new(),
        }
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint, self.deployment, API_VERSION
        )
    }
}

#[async_trait]
impl ChatModel for AzureOpenAiChatModel {
    async fn chat(&self, request: ChatRequest) -> Result<String, ApiError> {
        let mut body = json!({
            "messages": request.messages,
        });

        if let Some(obj) = body.as_object_mut() {
            if let Some(t) = request.temperature {
                obj.insert("temperature".to_string(), json!(t));
            }
            if let Some(t) = request.max_tokens {
                obj.insert("max_tokens".to_string(), json!(t));
            }
        }

        let mut req = self.client.post(self.completions_url()).json(&body);
        if let Some(key) = &self.api_key {
            req = req.header("api-key", key);
        }

        let res = req.send().await.map_err(ApiError::upstream)?;
        if !res.status().is_success() {
            let text = res.text().await.unwrap_or_default();
            return Err(ApiError::Upstream(format!(
                "chat completion error: {}",
                text
            )));
        }

        let payload: Value = res.json().await.map_err(ApiError::upstream)?;

        let content = payload["choices"][0]["message"]["content"]
            .as_str()
            .unwrap_or_default()
            .to_string();

        Ok(content)
    }

    async fn health_check(&self) -> Result<bool, ApiError> {
        let request = ChatRequest {
            messages: vec![ChatMessage::user("Hello")],
            temperature: None,
            max_tokens: Some(10),
        };

        match self.chat(request).await {
            Ok(_) => Ok(true),
            Err(_) => Ok(false),
        }
    }
}
