use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;

use cardiorisk_core::models::summary::{RiskSummary, StoredScores};
use cardiorisk_scores::summary::summarize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RiskSummaryRequest {
    pub patients: Vec<StoredScores>,
}

/// Averages and high-risk share over the posted patient scores.
pub async fn risk_summary(
    State(state): State<AppState>,
    payload: Result<Json<RiskSummaryRequest>, JsonRejection>,
) -> Result<Json<RiskSummary>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::internal(&state.config.error_message, e))?;
    Ok(Json(summarize(
        &request.patients,
        state.config.high_risk_threshold,
        jiff::Timestamp::now(),
    )))
}
