use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::measure::deserialize_integer;

/// Input of the first single-number health score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LegacyScoreRequest {
    #[serde(rename = "edad", deserialize_with = "deserialize_integer")]
    #[ts(type = "number | string")]
    pub age: i32,
    /// Total cholesterol in mg/dL.
    #[serde(rename = "colesterol", deserialize_with = "deserialize_integer")]
    #[ts(type = "number | string")]
    pub cholesterol: i32,
    /// Blood pressure as `"systolic/diastolic"`, e.g. `"120/80"`.
    #[serde(rename = "presionArterial")]
    pub blood_pressure: String,
}

/// A bare `{ "score": n }` response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreValue {
    pub score: i32,
}
