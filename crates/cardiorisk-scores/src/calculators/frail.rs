use cardiorisk_core::models::answers::PatientAnswers;
use cardiorisk_core::models::result::FrailCategory;

use crate::Calculator;
use crate::error::ScoreError;
use crate::scoring::CalculatorOutput;

/// FRAIL scale: Fatigue, Resistance, Ambulation, Illnesses, Loss of weight.
/// One point per affirmative answer, 0–5.
pub struct Frail;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrailAssessment {
    pub score: u8,
    pub category: FrailCategory,
}

pub fn assess(answers: &PatientAnswers) -> Result<FrailAssessment, ScoreError> {
    let criteria = [
        answers.fatigue()?,
        answers.climbs_stairs()?,
        answers.walks_block()?,
        answers.many_illnesses()?,
        answers.weight_loss()?,
    ];
    let score = criteria.iter().filter(|answer| answer.is_yes()).count() as u8;

    Ok(FrailAssessment {
        score,
        category: FrailCategory::from_points(score),
    })
}

impl Calculator for Frail {
    fn id(&self) -> &str {
        "frail"
    }

    fn name(&self) -> &str {
        "FRAIL"
    }

    fn description(&self) -> &str {
        "Frailty screening, 0-5: 0 robust, 1-2 pre-frail, 3-5 frail"
    }

    fn evaluate(&self, answers: &PatientAnswers) -> Result<CalculatorOutput, ScoreError> {
        let assessment = assess(answers)?;
        Ok(CalculatorOutput {
            score: i32::from(assessment.score),
            label: Some(assessment.category.label().to_string()),
            color: None,
        })
    }
}
