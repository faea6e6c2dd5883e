use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use cardiorisk_core::models::answers::PatientAnswers;
use cardiorisk_core::models::result::ScoreResult;
use cardiorisk_scores::compute_scores;

use crate::error::ApiError;
use crate::state::AppState;

/// Compute HARMS2-AF, mTaiwan-AF, FRAIL and HEARTS for one patient.
///
/// Any failure, including an unreadable body, yields the generic error
/// response; a partial result is never returned.
pub async fn calculate_score(
    State(state): State<AppState>,
    payload: Result<Json<PatientAnswers>, JsonRejection>,
) -> Result<Json<ScoreResult>, ApiError> {
    let Json(answers) = payload.map_err(|e| ApiError::internal(&state.config.error_message, e))?;

    let result = compute_scores(&answers).map_err(|e| {
        tracing::warn!(error = %e, "score calculation failed");
        ApiError::internal(&state.config.error_message, e)
    })?;

    tracing::debug!(
        hearts_score = result.hearts_score,
        hearts_risk_level = result.hearts_risk_level.label(),
        "scores computed"
    );

    Ok(Json(result))
}
