//! Chat Orchestrator.
//!
//! Sequences one request through validation, retrieval, prompt
//! assembly, and generation. Collaborator failures degrade the answer
//! instead of failing the request; only invalid input is an error.
//! Each collaborator is called at most once, never retried.

use std::sync::Arc;

use serde::Serialize;

use crate::core::errors::ApiError;
use crate::llm::{ChatModel, ChatRequest};
use crate::rag::prompt;
use crate::search::{DocumentRetriever, RetrievedDocument};

/// Documents fetched per question.
const TOP_K: usize = 3;
/// Sampling temperature for the generation call.
const TEMPERATURE: f64 = 0.7;
/// Upper bound on generated tokens.
const MAX_TOKENS: i32 = 800;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Source {
    pub title: String,
    pub url: String,
}

/// The per-request response payload.
#[derive(Debug, Clone, Serialize)]
pub struct ChatAnswer {
    pub response: String,
    pub sources: Vec<Source>,
}

pub struct ChatOrchestrator {
    retriever: Arc<dyn DocumentRetriever>,
    model: Arc<dyn ChatModel>,
}

impl ChatOrchestrator {
    pub fn new(retriever: Arc<dyn DocumentRetriever>, model: Arc<dyn ChatModel>) -> Self {
        Self { retriever, model }
    }

    /// Answer one question.
    ///
    /// An empty message is rejected before any collaborator call. A
    /// failed retrieval proceeds with an empty document set; a failed
    /// generation produces an apology string carrying the error detail.
    /// Sources from a successful retrieval are listed either way.
    pub async fn answer(&self, message: &str) -> Result<ChatAnswer, ApiError> {
        if message.is_empty() {
            return Err(ApiError::BadRequest("メッセージが空です".to_string()));
        }

        tracing::info!("processing message: {:.50}...", message);

        let documents = self.retrieve(message).await;
        let response = self.generate(message, &documents).await;

        let sources = documents
            .iter()
            .map(|doc| Source {
                title: doc.title.clone(),
                url: doc.url.clone(),
            })
            .collect();

        tracing::info!("chat response generated");
        Ok(ChatAnswer { response, sources })
    }

    async fn retrieve(&self, message: &str) -> Vec<RetrievedDocument> {
        match self.retriever.retrieve(message, TOP_K).await {
            Ok(documents) => {
                tracing::info!("found {} documents", documents.len());
                documents
            }
            Err(err) => {
                tracing::error!("search error: {}", err);
                Vec::new()
            }
        }
    }

    async fn generate(&self, message: &str, documents: &[RetrievedDocument]) -> String {
        let request = ChatRequest {
            messages: prompt::assemble(message, documents),
            temperature: Some(TEMPERATURE),
            max_tokens: Some(MAX_TOKENS),
        };

        match self.model.chat(request).await {
            Ok(answer) => answer,
            Err(err) => {
                tracing::error!("generation error: {}", err);
                format!("申し訳ございません。エラーが発生しました: {}", err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    struct FakeRetriever {
        documents: Vec<RetrievedDocument>,
        fail: bool,
        calls: AtomicUsize,
    }

    impl FakeRetriever {
        fn returning(documents: Vec<RetrievedDocument>) -> Self {
            Self {
                documents,
                fail: false,
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                documents: Vec::new(),
                fail: true,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl DocumentRetriever for FakeRetriever {
        async fn retrieve(
            &self,
            _query: &str,
            top: usize,
        ) -> Result<Vec<RetrievedDocument>, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ApiError::Upstream("search unavailable".to_string()));
            }
            Ok(self.documents.iter().take(top).cloned().collect())
        }

        async fn health_check(&self) -> Result<bool, ApiError> {
            Ok(!self.fail)
        }
    }

    struct FakeModel {
        reply: Result<String, String>,
        calls: AtomicUsize,
        last_request: Mutex<Option<ChatRequest>>,
    }

    impl FakeModel {
        fn replying(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                calls: AtomicUsize::new(0),
                last_request: Mutex::new(None),
            }
        }

        fn failing(detail: &str) -> Self {
            Self {
                reply: Err(detail.to_string()),
                calls: AtomicUsize::new(0),
                last_request: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl ChatModel for FakeModel {
        async fn chat(&self, request: ChatRequest) -> Result<String, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().unwrap() = Some(request);
            match &self.reply {
                Ok(reply) => Ok(reply.clone()),
                Err(detail) => Err(ApiError::Upstream(detail.clone())),
            }
        }

        async fn health_check(&self) -> Result<bool, ApiError> {
            Ok(self.reply.is_ok())
        }
    }

    fn doc(title: &str) -> RetrievedDocument {
        RetrievedDocument {
            content: format!("content of {}", title),
            title: title.to_string(),
            url: format!("https://example.invalid/{}", title),
            score: 1.0,
        }
    }

    #[tokio::test]
    async fn empty_message_is_rejected_without_collaborator_calls() {
        let retriever = Arc::new(FakeRetriever::returning(vec![doc("a")]));
        let model = Arc::new(FakeModel::replying("answer"));
        let orchestrator = ChatOrchestrator::new(retriever.clone(), model.clone());

        let err = orchestrator.answer("").await.unwrap_err();

        assert!(matches!(err, ApiError::BadRequest(_)));
        assert_eq!(retriever.calls.load(Ordering::SeqCst), 0);
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn answers_with_sources_in_retrieval_order() {
        let retriever = Arc::new(FakeRetriever::returning(vec![doc("first"), doc("second")]));
        let model = Arc::new(FakeModel::replying("回答です"));
        let orchestrator = ChatOrchestrator::new(retriever, model.clone());

        let answer = orchestrator.answer("質問").await.unwrap();

        assert_eq!(answer.response, "回答です");
        let titles: Vec<&str> = answer.sources.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["first", "second"]);

        // the prompt the model saw embeds the retrieved context
        let request = model.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(request.temperature, Some(0.7));
        assert_eq!(request.max_tokens, Some(800));
        assert!(request.messages[1].content.contains("【first】"));
    }

    #[tokio::test]
    async fn retrieval_failure_degrades_to_empty_context() {
        let retriever = Arc::new(FakeRetriever::failing());
        let model = Arc::new(FakeModel::replying("コンテキストに情報がありません"));
        let orchestrator = ChatOrchestrator::new(retriever, model.clone());

        let answer = orchestrator.answer("質問").await.unwrap();

        assert!(!answer.response.is_empty());
        assert!(answer.sources.is_empty());
        assert_eq!(model.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn generation_failure_yields_apology_with_sources() {
        let retriever = Arc::new(FakeRetriever::returning(vec![doc("kept")]));
        let model = Arc::new(FakeModel::failing("deployment offline"));
        let orchestrator = ChatOrchestrator::new(retriever, model);

        let answer = orchestrator.answer("質問").await.unwrap();

        assert!(answer.response.starts_with("申し訳ございません。エラーが発生しました:"));
        assert!(answer.response.contains("deployment offline"));
        assert_eq!(answer.sources.len(), 1);
        assert_eq!(answer.sources[0].title, "kept");
    }

    #[tokio::test]
    async fn requests_fixed_top_k() {
        let retriever = Arc::new(FakeRetriever::returning(vec![
            doc("1"),
            doc("2"),
            doc("3"),
            doc("4"),
        ]));
        let model = Arc::new(FakeModel::replying("ok"));
        let orchestrator = ChatOrchestrator::new(retriever, model);

        let answer = orchestrator.answer("質問").await.unwrap();
        assert_eq!(answer.sources.len(), 3);
    }
}
