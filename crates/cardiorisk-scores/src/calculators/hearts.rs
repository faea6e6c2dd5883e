use cardiorisk_core::codes::{Country, Region};
use cardiorisk_core::measure::MG_DL_TO_MMOL_L;
use cardiorisk_core::models::answers::PatientAnswers;
use cardiorisk_core::models::result::{HeartsRiskLevel, RiskColor};

use crate::Calculator;
use crate::bands;
use crate::error::ScoreError;
use crate::matrix::{self, ChartCell};
use crate::scoring::CalculatorOutput;

/// HEARTS 10-year cardiovascular risk from the WHO/PAHO regional charts.
pub struct Hearts;

/// Score returned when the patient already has atherosclerotic disease.
pub const ESTABLISHED_DISEASE_SCORE: u8 = 25;
/// Score returned for chronic kidney disease or diabetes.
pub const HIGH_RISK_CONDITION_SCORE: u8 = 15;
/// Score returned for patients older than the last chart band.
pub const AGE_CEILING_SCORE: u8 = 30;

/// Which rule produced a HEARTS result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeartsBasis {
    /// Coronary, cerebrovascular or peripheral vascular disease.
    EstablishedDisease,
    /// Chronic kidney disease or diabetes.
    HighRiskCondition,
    /// 75 or older, beyond the charts.
    AgeCeiling,
    /// Read from the chart of the given region.
    Chart(Region),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeartsResult {
    pub score: u8,
    pub risk_level: HeartsRiskLevel,
    pub basis: HeartsBasis,
}

impl HeartsResult {
    fn fixed(score: u8, risk_level: HeartsRiskLevel, basis: HeartsBasis) -> Self {
        Self {
            score,
            risk_level,
            basis,
        }
    }

    pub fn color(&self) -> RiskColor {
        self.risk_level.color()
    }
}

/// Evaluate the HEARTS rules in priority order; the first rule that applies
/// decides the result and nothing after it is read.
pub fn assess(answers: &PatientAnswers) -> Result<HeartsResult, ScoreError> {
    if answers.coronary_disease()?.is_yes()
        || answers.cerebrovascular_disease()?.is_yes()
        || answers.peripheral_vascular_disease()?.is_yes()
    {
        return Ok(HeartsResult::fixed(
            ESTABLISHED_DISEASE_SCORE,
            HeartsRiskLevel::VeryHigh,
            HeartsBasis::EstablishedDisease,
        ));
    }

    if answers.renal_disease()?.is_yes() || answers.diabetes()?.is_yes() {
        return Ok(HeartsResult::fixed(
            HIGH_RISK_CONDITION_SCORE,
            HeartsRiskLevel::High,
            HeartsBasis::HighRiskCondition,
        ));
    }

    let code = answers.country_code()?;
    let region = Country::from_code(code)
        .ok_or_else(|| ScoreError::UnsupportedCountry(code.to_string()))?
        .region();

    let age = f64::from(answers.age()?);
    let age_band = match bands::AGE.classify(age) {
        Some(band) => band,
        None if age >= bands::AGE.upper => {
            return Ok(HeartsResult::fixed(
                AGE_CEILING_SCORE,
                HeartsRiskLevel::Critical,
                HeartsBasis::AgeCeiling,
            ));
        }
        // The charts start at 40.
        None => {
            return Err(ScoreError::LookupOutOfRange {
                band: bands::AGE.name,
                value: age,
            });
        }
    };

    let sex = answers.sex()?;
    let smoker = answers.smoker()?.is_yes();
    let bp_band = bands::SYSTOLIC.index(f64::from(answers.systolic_bp()?))?;
    let cholesterol_mmol = f64::from(answers.total_cholesterol()?) * MG_DL_TO_MMOL_L;
    let cholesterol_band = bands::CHOLESTEROL_MMOL.index(cholesterol_mmol)?;

    let score = matrix::chart(region).lookup(
        sex,
        ChartCell {
            age_band,
            smoker,
            bp_band,
            cholesterol_band,
        },
    )?;

    Ok(HeartsResult {
        score,
        risk_level: HeartsRiskLevel::from_percentage(score),
        basis: HeartsBasis::Chart(region),
    })
}

impl Calculator for Hearts {
    fn id(&self) -> &str {
        "hearts"
    }

    fn name(&self) -> &str {
        "HEARTS"
    }

    fn description(&self) -> &str {
        "10-year cardiovascular risk (%) from the WHO/PAHO charts for Southern, Andean and \
         Central Latin America; established vascular disease, kidney disease or diabetes \
         and age 75+ override the chart"
    }

    fn evaluate(&self, answers: &PatientAnswers) -> Result<CalculatorOutput, ScoreError> {
        let result = assess(answers)?;
        Ok(CalculatorOutput {
            score: i32::from(result.score),
            label: Some(result.risk_level.label().to_string()),
            color: Some(result.color()),
        })
    }
}
