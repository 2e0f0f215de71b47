use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::core::errors::ApiError;
use crate::rag::ChatAnswer;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatBody {
    /// An absent field normalizes to the empty string and is rejected
    /// the same way.
    #[serde(default)]
    pub message: String,
}

/// POST /api/chat — answer one question with retrieved context.
///
/// 400 on an empty message or a malformed body; collaborator failures
/// never fail the request (the orchestrator degrades instead).
pub async fn chat(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ChatBody>, JsonRejection>,
) -> Result<Json<ChatAnswer>, ApiError> {
    let Json(body) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    tracing::info!("chat api invoked");
    let answer = state.orchestrator.answer(&body.message).await?;

    Ok(Json(answer))
}
