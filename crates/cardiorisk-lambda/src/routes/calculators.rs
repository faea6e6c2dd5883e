use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};

use cardiorisk_core::models::answers::PatientAnswers;
use cardiorisk_scores::error::ScoreError;
use cardiorisk_scores::scoring::{CalculatorInfo, CalculatorOutput};
use cardiorisk_scores::{all_calculators, get_calculator};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_calculators() -> Json<Vec<CalculatorInfo>> {
    Json(all_calculators().iter().map(|c| c.info()).collect())
}

/// Run a single calculator. Only the answers that calculator reads need to
/// be present.
pub async fn run_calculator(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<PatientAnswers>, JsonRejection>,
) -> Result<Json<CalculatorOutput>, ApiError> {
    let calculator = get_calculator(&id).map_err(|e| match e {
        ScoreError::UnknownCalculator(id) => ApiError::NotFound(format!("calculator not found: {id}")),
        other => ApiError::internal(&state.config.error_message, other),
    })?;

    let Json(answers) = payload.map_err(|e| ApiError::internal(&state.config.error_message, e))?;

    let output = calculator.evaluate(&answers).map_err(|e| {
        tracing::warn!(calculator = calculator.id(), error = %e, "calculation failed");
        ApiError::internal(&state.config.error_message, e)
    })?;

    Ok(Json(output))
}
