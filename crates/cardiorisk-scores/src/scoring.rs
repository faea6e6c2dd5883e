use serde::{Deserialize, Serialize};
use ts_rs::TS;

use cardiorisk_core::models::result::RiskColor;

/// The result of a single calculator, in a shape common to all of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CalculatorOutput {
    pub score: i32,
    /// Interpretation label, for calculators that categorize their score.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub color: Option<RiskColor>,
}

impl CalculatorOutput {
    /// A plain point total with no interpretation.
    pub fn points(score: i32) -> Self {
        Self {
            score,
            label: None,
            color: None,
        }
    }
}

/// Public description of a calculator.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CalculatorInfo {
    pub id: String,
    pub name: String,
    pub description: String,
}
