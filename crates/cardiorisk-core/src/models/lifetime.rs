use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::codes::{Sex, YesNo};
use crate::measure::deserialize_integer;

/// Input of the lifetime cardiovascular risk estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LifetimeRiskRequest {
    #[serde(rename = "genero")]
    pub sex: Sex,
    /// Total cholesterol in mg/dL.
    #[serde(rename = "colesterolTotal", deserialize_with = "deserialize_integer")]
    #[ts(type = "number | string")]
    pub total_cholesterol: i32,
    #[serde(rename = "presionSistolica", deserialize_with = "deserialize_integer")]
    #[ts(type = "number | string")]
    pub systolic_bp: i32,
    #[serde(rename = "tratamientoHipertension")]
    pub treated_hypertension: YesNo,
    #[serde(rename = "diabetes")]
    pub diabetes: YesNo,
    #[serde(rename = "fumador")]
    pub smoker: YesNo,
}

/// Risk-factor profile driving the lifetime estimate, from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskFactorProfile {
    /// Two or more major risk factors.
    TwoOrMoreMajor,
    /// Exactly one major risk factor.
    OneMajor,
    /// No major factor, at least one elevated.
    Elevated,
    /// Nothing elevated, at least one not optimal.
    NotOptimal,
    /// Cholesterol and blood pressure optimal, untreated.
    AllOptimal,
}
