use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The score fields of a stored patient document. Older documents may lack
/// some of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StoredScores {
    #[serde(default)]
    pub harms2af_score: Option<i32>,
    #[serde(default)]
    pub mtaiwan_score: Option<i32>,
    #[serde(default)]
    pub hearts_score: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AverageScores {
    pub harms2af: i32,
    pub mtaiwan: i32,
    pub hearts: i32,
}

/// Population overview shown by the dashboard widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RiskSummary {
    pub average_scores: AverageScores,
    pub high_risk_percentage: i32,
    pub total_patients: u32,
    pub last_update: jiff::Timestamp,
}
