use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use cardiorisk_core::models::legacy::{LegacyScoreRequest, ScoreValue};
use cardiorisk_scores::legacy;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn legacy_score(
    State(state): State<AppState>,
    payload: Result<Json<LegacyScoreRequest>, JsonRejection>,
) -> Result<Json<ScoreValue>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::internal(&state.config.error_message, e))?;
    let score = legacy::score(&request)
        .map_err(|e| ApiError::internal(&state.config.error_message, e))?;
    Ok(Json(ScoreValue { score }))
}
