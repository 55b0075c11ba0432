//! Policy handlers

use std::collections::BTreeMap;

use axum::extract::{Query, State};
use axum::Json;

use crate::llm::prompt;
use crate::models::{CreatePolicyParams, CreatePolicyResponse};
use crate::{AppError, AppResult, AppState};

/// List all policies
pub async fn list(State(state): State<AppState>) -> Json<BTreeMap<String, String>> {
    Json(state.store.policies())
}

/// Draft a new policy with the completion backend and store it
pub async fn create(
    State(state): State<AppState>,
    Query(params): Query<CreatePolicyParams>,
) -> AppResult<Json<CreatePolicyResponse>> {
    let category = params.category.trim().to_string();
    let topic = params.topic.trim();

    if category.is_empty() || topic.is_empty() {
        return Err(AppError::Validation(
            "Category and topic are required".to_string(),
        ));
    }

    let mut explanation = format!("Topic: {topic}.");
    if let Some(notes) = params.notes.as_deref() {
        let notes = notes.trim();
        if !notes.is_empty() {
            explanation.push_str(&format!(" Additional notes: {notes}"));
        }
    }

    let user_prompt = prompt::policy_prompt(&category, &explanation);
    let policy_text = state
        .llm
        .complete(prompt::POLICY_SYSTEM, &user_prompt)
        .await
        .map_err(|e| AppError::Upstream(format!("Error generating policy: {e}")))?;

    state.store.upsert_policy(&category, policy_text.clone());

    Ok(Json(CreatePolicyResponse {
        message: format!("Policy under '{category}' generated successfully"),
        policy: policy_text,
        category,
    }))
}
