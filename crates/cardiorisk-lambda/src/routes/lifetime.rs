use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use cardiorisk_core::models::legacy::ScoreValue;
use cardiorisk_core::models::lifetime::LifetimeRiskRequest;
use cardiorisk_scores::lifetime;

use crate::error::ApiError;
use crate::state::AppState;

/// Lifetime cardiovascular risk (%) by risk-factor profile.
pub async fn lifetime_risk(
    State(state): State<AppState>,
    payload: Result<Json<LifetimeRiskRequest>, JsonRejection>,
) -> Result<Json<ScoreValue>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::internal(&state.config.error_message, e))?;
    let profile = lifetime::profile(&request);
    let score = lifetime::score(&request)
        .map_err(|e| ApiError::internal(&state.config.error_message, e))?;
    tracing::debug!(?profile, score, "lifetime risk computed");
    Ok(Json(ScoreValue { score }))
}
