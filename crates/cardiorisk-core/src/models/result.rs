use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// FRAIL scale interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum FrailCategory {
    /// 0 points.
    #[serde(rename = "Robusto")]
    Robust,
    /// 1–2 points.
    #[serde(rename = "Pre-frágil")]
    PreFrail,
    /// 3–5 points.
    #[serde(rename = "Frágil")]
    Frail,
}

impl FrailCategory {
    pub fn from_points(points: u8) -> Self {
        match points {
            0 => FrailCategory::Robust,
            1 | 2 => FrailCategory::PreFrail,
            _ => FrailCategory::Frail,
        }
    }

    /// Display label shown by the form.
    pub fn label(self) -> &'static str {
        match self {
            FrailCategory::Robust => "Robusto",
            FrailCategory::PreFrail => "Pre-frágil",
            FrailCategory::Frail => "Frágil",
        }
    }
}

/// HEARTS 10-year cardiovascular risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum HeartsRiskLevel {
    #[serde(rename = "Bajo")]
    Low,
    #[serde(rename = "Moderado")]
    Moderate,
    #[serde(rename = "Alto")]
    High,
    #[serde(rename = "Muy alto")]
    VeryHigh,
    #[serde(rename = "Crítico")]
    Critical,
}

impl HeartsRiskLevel {
    /// Categorize a chart percentage: <5 low, <10 moderate, <20 high,
    /// <30 very high, otherwise critical.
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            0..=4 => HeartsRiskLevel::Low,
            5..=9 => HeartsRiskLevel::Moderate,
            10..=19 => HeartsRiskLevel::High,
            20..=29 => HeartsRiskLevel::VeryHigh,
            _ => HeartsRiskLevel::Critical,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HeartsRiskLevel::Low => "Bajo",
            HeartsRiskLevel::Moderate => "Moderado",
            HeartsRiskLevel::High => "Alto",
            HeartsRiskLevel::VeryHigh => "Muy alto",
            HeartsRiskLevel::Critical => "Crítico",
        }
    }

    pub fn color(self) -> RiskColor {
        match self {
            HeartsRiskLevel::Low => RiskColor::Green500,
            HeartsRiskLevel::Moderate => RiskColor::Yellow500,
            HeartsRiskLevel::High => RiskColor::Orange500,
            HeartsRiskLevel::VeryHigh => RiskColor::Red600,
            HeartsRiskLevel::Critical => RiskColor::Red900,
        }
    }
}

/// Palette tag the display layer turns into a background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RiskColor {
    #[serde(rename = "green-500")]
    Green500,
    #[serde(rename = "yellow-500")]
    Yellow500,
    #[serde(rename = "orange-500")]
    Orange500,
    #[serde(rename = "red-600")]
    Red600,
    #[serde(rename = "red-900")]
    Red900,
}

/// Scores computed for one patient. Field names are the contract with the
/// form and with stored patient documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScoreResult {
    pub harms2af_score: i32,
    pub mtaiwan_score: i32,
    pub frail_score: u8,
    pub frail_interpretation: FrailCategory,
    pub hearts_score: u8,
    pub hearts_risk_level: HeartsRiskLevel,
    pub hearts_risk_color: RiskColor,
}
