//! Chatbot handler

use axum::extract::{Query, State};
use axum::Json;

use crate::llm::prompt;
use crate::models::{ChatParams, ChatResponse};
use crate::{AppError, AppResult, AppState};

/// Chat with the GRC assistant. Stateless; no conversation history is
/// retained between calls.
pub async fn chat(
    State(state): State<AppState>,
    Query(params): Query<ChatParams>,
) -> AppResult<Json<ChatResponse>> {
    let response = state
        .llm
        .complete(prompt::CHAT_SYSTEM, &params.query)
        .await
        .map_err(|e| AppError::Upstream(format!("Error processing chat request: {e}")))?;

    Ok(Json(ChatResponse {
        query: params.query,
        response,
    }))
}
