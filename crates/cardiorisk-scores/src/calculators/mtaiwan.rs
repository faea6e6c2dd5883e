use cardiorisk_core::codes::Sex;
use cardiorisk_core::models::answers::PatientAnswers;

use crate::Calculator;
use crate::error::ScoreError;
use crate::scoring::CalculatorOutput;

/// Modified Taiwan AF score. The age term is a single tier, not a sum, and
/// can be negative for younger patients.
pub struct MTaiwanAf;

/// Points for the age tier. Below 40 no tier applies and the term is 0.
pub fn age_points(age: i32) -> i32 {
    match age {
        80.. => 8,
        75..80 => 5,
        70..75 => 4,
        65..70 => 3,
        60..65 => 2,
        55..60 => 1,
        50..55 => 0,
        45..50 => -1,
        40..45 => -2,
        _ => 0,
    }
}

pub fn score(answers: &PatientAnswers) -> Result<i32, ScoreError> {
    let mut points = age_points(answers.age()?);

    if answers.sex()? == Sex::Male {
        points += 1;
    }
    points += answers.hypertension()?.points();
    points += 2 * answers.heart_failure()?.points();
    points += answers.coronary_disease()?.points();
    points += answers.renal_disease()?.points();

    Ok(points)
}

impl Calculator for MTaiwanAf {
    fn id(&self) -> &str {
        "mtaiwan"
    }

    fn name(&self) -> &str {
        "mTaiwan-AF"
    }

    fn description(&self) -> &str {
        "Atrial fibrillation risk: age tier from -2 (40-44) to 8 (80+), male 1, hypertension 1, \
         heart failure 2, coronary disease 1, chronic kidney disease 1"
    }

    fn evaluate(&self, answers: &PatientAnswers) -> Result<CalculatorOutput, ScoreError> {
        Ok(CalculatorOutput::points(score(answers)?))
    }
}
