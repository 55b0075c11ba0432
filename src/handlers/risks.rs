//! Risk handlers

use axum::extract::{Query, State};
use axum::Json;

use crate::llm::prompt;
use crate::models::{
    extract_impact_level, CreateRiskParams, CreateRiskResponse, MitigationParams,
    MitigationResponse, Risk,
};
use crate::{AppError, AppResult, AppState};

/// List all registered risks
pub async fn list(State(state): State<AppState>) -> Json<Vec<Risk>> {
    Json(state.store.risks())
}

/// Analyze a new risk with the completion backend and register it
pub async fn create(
    State(state): State<AppState>,
    Query(params): Query<CreateRiskParams>,
) -> AppResult<Json<CreateRiskResponse>> {
    let user_prompt = prompt::risk_prompt(
        &params.name,
        &params.domain,
        &params.likelihood,
        &params.description,
    );

    let mitigation = state
        .llm
        .complete(prompt::RISK_SYSTEM, &user_prompt)
        .await
        .map_err(|e| AppError::Upstream(format!("Error analyzing risk: {e}")))?;

    let impact = extract_impact_level(&mitigation);

    let risk = Risk::new(
        &params.name,
        &params.domain,
        &params.likelihood,
        &impact,
        &params.description,
        &mitigation,
    );
    state.store.append_risk(risk.clone());

    Ok(Json(CreateRiskResponse {
        message: "Risk analysis generated successfully".to_string(),
        risk,
    }))
}

/// Generate a mitigation plan for a named risk without registering it
pub async fn mitigation(
    State(state): State<AppState>,
    Query(params): Query<MitigationParams>,
) -> AppResult<Json<MitigationResponse>> {
    let user_prompt =
        prompt::mitigation_prompt(&params.risk_name, &params.impact, &params.likelihood);

    let mitigation = state
        .llm
        .complete(prompt::MITIGATION_SYSTEM, &user_prompt)
        .await
        .map_err(|e| AppError::Upstream(format!("Error generating mitigation: {e}")))?;

    Ok(Json(MitigationResponse {
        risk: params.risk_name,
        mitigation,
    }))
}
