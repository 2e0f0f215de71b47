use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use super::retriever::DocumentRetriever;
use super::types::RetrievedDocument;
use crate::core::errors::ApiError;

const API_VERSION: &str = "2024-07-01";

/// HTTP client for the hosted search index.
#[derive(Clone)]
pub struct AzureSearchRetriever {
    endpoint: String,
    index: String,
    api_key: Option<String>,
    client: Client,
}

impl AzureSearchRetriever {
    pub fn new(endpoint: String, index: String, api_key: Option<String>) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            index,
            api_key,
            client: Client::new(),
        }
    }

    fn search_url(&self) -> String {
        format!(
            "{}/indexes/{}/docs/search?api-version={}",
            self.endpoint, self.index, API_VERSION
        )
    }
}

#[async_trait]
impl DocumentRetriever for AzureSearchRetriever {
    async fn retrieve(&self, query: &str, top: usize) -> Result<Vec<RetrievedDocument>, ApiError> {
        let body = json!({
            "search": query,
            "top": top,
            "select": "content,title,url",
        });

        let mut request = self.client.post(self.search_url()).json(&body);
        if let Some(key) = &self.api_key {
            request = request.header("api-key", key);
        }

        let res = request.send().await.map_err(ApiError::upstream)?;
        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(ApiError::Upstream(format!(
                "search request failed: {}: {}",
                status, text
            )));
        }

        let payload: Value = res.json().await.map_err(ApiError::upstream)?;
        Ok(parse_hits(&payload))
    }

    async fn health_check(&self) -> Result<bool, ApiError> {
        // cheapest authenticated probe: a one-hit wildcard query
        match self.retrieve("*", 1).await {
            Ok(_) => Ok(true),
            Err(_) => Ok(false),
        }
    }
}

/// Map the raw search response onto [`RetrievedDocument`]s, in ranked
/// order, with empty-string defaults for absent fields.
fn parse_hits(payload: &Value) -> Vec<RetrievedDocument> {
    let hits = payload
        .get("value")
        .and_then(|v| v.as_array())
        .cloned()
        .unwrap_or_default();

    hits.iter()
        .map(|hit| RetrievedDocument {
            content: str_field(hit, "content"),
            title: str_field(hit, "title"),
            url: str_field(hit, "url"),
            score: hit
                .get("@search.score")
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0),
        })
        .collect()
}

fn str_field(hit: &Value, name: &str) -> String {
    hit.get(name)
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hits_in_ranked_order() {
        let payload = json!({
            "value": [
                {
                    "@search.score": 2.5,
                    "content": "分類: 哺乳類",
                    "title": "イリオモテヤマネコ (Prionailurus bengalensis iriomotensis)",
                    "url": "https://data.e-gov.go.jp/data/dataset/env_20140904_0456"
                },
                {
                    "@search.score": 1.1,
                    "content": "分類: 鳥類",
                    "title": "ライチョウ (Lagopus muta japonica)",
                    "url": "https://data.e-gov.go.jp/data/dataset/env_20140904_0456"
                }
            ]
        });

        let documents = parse_hits(&payload);
        assert_eq!(documents.len(), 2);
        assert!(documents[0].title.starts_with("イリオモテヤマネコ"));
        assert_eq!(documents[0].score, 2.5);
        assert_eq!(documents[1].score, 1.1);
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let payload = json!({ "value": [ { "title": "only a title" } ] });

        let documents = parse_hits(&payload);
        assert_eq!(documents[0].content, "");
        assert_eq!(documents[0].url, "");
        assert_eq!(documents[0].score, 0.0);
    }

    #[test]
    fn tolerates_payload_without_hits() {
        assert!(parse_hits(&json!({})).is_empty());
    }
}
