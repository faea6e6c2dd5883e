use cardiorisk_core::codes::{AlcoholUse, Sex};
use cardiorisk_core::models::answers::PatientAnswers;

use crate::Calculator;
use crate::error::ScoreError;
use crate::scoring::CalculatorOutput;

/// HARMS2-AF: atrial fibrillation risk from Hypertension, Age, Raised BMI,
/// Male sex, Sleep apnea, Smoking and Alcohol. Additive, no upper bound.
pub struct Harms2Af;

/// Point total for one patient.
pub fn score(answers: &PatientAnswers) -> Result<i32, ScoreError> {
    let mut points = 4 * answers.hypertension()?.points();

    points += match answers.age()? {
        65.. => 2,
        60..65 => 1,
        _ => 0,
    };

    points += answers.obesity()?.points();
    if answers.sex()? == Sex::Male {
        points += 1;
    }
    points += answers.sleep_apnea()?.points();
    points += answers.smoker()?.points();

    points += match answers.alcohol_use()? {
        AlcoholUse::Alto => 2,
        AlcoholUse::Moderado => 1,
        AlcoholUse::Ninguna => 0,
    };

    Ok(points)
}

impl Calculator for Harms2Af {
    fn id(&self) -> &str {
        "harms2af"
    }

    fn name(&self) -> &str {
        "HARMS2-AF"
    }

    fn description(&self) -> &str {
        "Atrial fibrillation risk: hypertension 4, age 60-64 1 / 65+ 2, BMI >= 30 1, male 1, \
         sleep apnea 1, smoking 1, alcohol 7-14/week 1 / 15+/week 2"
    }

    fn evaluate(&self, answers: &PatientAnswers) -> Result<CalculatorOutput, ScoreError> {
        Ok(CalculatorOutput::points(score(answers)?))
    }
}
