//! The first single-number health score, kept for callers that still
//! post `{ edad, colesterol, presionArterial }`.

use cardiorisk_core::error::InputError;
use cardiorisk_core::measure;
use cardiorisk_core::models::legacy::LegacyScoreRequest;

use crate::error::ScoreError;

const BASE_SCORE: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BloodPressure {
    pub systolic: i32,
    pub diastolic: i32,
}

/// Parse `"systolic/diastolic"`, e.g. `"120/80"`. Both parts must be plain
/// integers within plausible ranges.
pub fn parse_blood_pressure(text: &str) -> Result<BloodPressure, InputError> {
    const FIELD: &str = "presionArterial";

    let malformed = |message: String| InputError::Malformed {
        field: FIELD,
        message,
    };

    let (systolic, diastolic) = text
        .split_once('/')
        .ok_or_else(|| malformed(format!("expected \"systolic/diastolic\", got \"{text}\"")))?;

    let parse_part = |part: &str, which: &str| {
        part.trim()
            .parse::<i32>()
            .map_err(|_| malformed(format!("{which} \"{part}\" is not an integer")))
    };

    let systolic = measure::SYSTOLIC_MMHG.check(FIELD, parse_part(systolic, "systolic")?)?;
    let diastolic = measure::DIASTOLIC_MMHG.check(FIELD, parse_part(diastolic, "diastolic")?)?;

    Ok(BloodPressure {
        systolic,
        diastolic,
    })
}

/// 100 minus age, cholesterol and blood pressure penalties, never below 0.
pub fn score(request: &LegacyScoreRequest) -> Result<i32, ScoreError> {
    let age = measure::AGE_YEARS.check("edad", request.age)?;
    let cholesterol = measure::CHOLESTEROL_MG_DL.check("colesterol", request.cholesterol)?;
    let bp = parse_blood_pressure(&request.blood_pressure)?;

    let mut score = BASE_SCORE;

    score -= match age {
        61.. => 10,
        41..=60 => 5,
        _ => 0,
    };

    score -= match cholesterol {
        241.. => 20,
        201..=240 => 10,
        _ => 0,
    };

    if bp.systolic >= 140 || bp.diastolic >= 90 {
        score -= 15;
    } else if bp.systolic >= 120 || bp.diastolic >= 80 {
        score -= 5;
    }

    Ok(score.max(0))
}
