//! Lifetime cardiovascular risk by risk-factor profile.

use cardiorisk_core::codes::Sex;
use cardiorisk_core::measure;
use cardiorisk_core::models::lifetime::{LifetimeRiskRequest, RiskFactorProfile};

use crate::error::ScoreError;

/// Classify the patient's risk factors. Untreated blood pressure only counts
/// toward the elevated and not-optimal tiers.
pub fn profile(request: &LifetimeRiskRequest) -> RiskFactorProfile {
    let cholesterol = request.total_cholesterol;
    let systolic = request.systolic_bp;
    let treated = request.treated_hypertension.is_yes();

    let major = [
        cholesterol >= 240,
        systolic >= 160,
        treated,
        request.smoker.is_yes(),
        request.diabetes.is_yes(),
    ]
    .into_iter()
    .filter(|&factor| factor)
    .count();

    match major {
        2.. => RiskFactorProfile::TwoOrMoreMajor,
        1 => RiskFactorProfile::OneMajor,
        _ if (200..240).contains(&cholesterol) || (!treated && (140..160).contains(&systolic)) => {
            RiskFactorProfile::Elevated
        }
        _ if (180..200).contains(&cholesterol) || (!treated && (120..140).contains(&systolic)) => {
            RiskFactorProfile::NotOptimal
        }
        _ => RiskFactorProfile::AllOptimal,
    }
}

/// Lifetime risk in percent for a profile.
pub fn risk_percent(sex: Sex, profile: RiskFactorProfile) -> i32 {
    match (sex, profile) {
        (Sex::Female, RiskFactorProfile::TwoOrMoreMajor) => 50,
        (Sex::Female, RiskFactorProfile::OneMajor) => 39,
        (Sex::Female, RiskFactorProfile::Elevated) => 39,
        (Sex::Female, RiskFactorProfile::NotOptimal) => 27,
        (Sex::Female, RiskFactorProfile::AllOptimal) => 8,
        (Sex::Male, RiskFactorProfile::TwoOrMoreMajor) => 69,
        (Sex::Male, RiskFactorProfile::OneMajor) => 50,
        (Sex::Male, RiskFactorProfile::Elevated) => 46,
        (Sex::Male, RiskFactorProfile::NotOptimal) => 36,
        (Sex::Male, RiskFactorProfile::AllOptimal) => 5,
    }
}

pub fn score(request: &LifetimeRiskRequest) -> Result<i32, ScoreError> {
    measure::CHOLESTEROL_MG_DL.check("colesterolTotal", request.total_cholesterol)?;
    measure::SYSTOLIC_MMHG.check("presionSistolica", request.systolic_bp)?;
    Ok(risk_percent(request.sex, profile(request)))
}
