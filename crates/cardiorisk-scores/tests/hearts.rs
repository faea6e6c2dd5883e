use cardiorisk_core::codes::{AlcoholUse, Region, Sex, YesNo};
use cardiorisk_core::models::answers::PatientAnswers;
use cardiorisk_core::models::result::{HeartsRiskLevel, RiskColor};
use cardiorisk_scores::calculators::hearts::{self, HeartsBasis};
use cardiorisk_scores::error::ScoreError;

/// 42-year-old non-smoking woman from Argentina, SBP 115, cholesterol 170.
fn reference_patient() -> PatientAnswers {
    PatientAnswers {
        age: Some(42),
        sex: Some(Sex::Female),
        systolic_bp: Some(115),
        total_cholesterol: Some(170),
        country: Some("AR".to_string()),
        hypertension: Some(YesNo::No),
        smoker: Some(YesNo::No),
        obesity: Some(YesNo::No),
        sleep_apnea: Some(YesNo::No),
        alcohol_use: Some(AlcoholUse::Ninguna),
        heart_failure: Some(YesNo::No),
        coronary_disease: Some(YesNo::No),
        renal_disease: Some(YesNo::No),
        cerebrovascular_disease: Some(YesNo::No),
        peripheral_vascular_disease: Some(YesNo::No),
        diabetes: Some(YesNo::No),
        ..PatientAnswers::default()
    }
}

#[test]
fn reference_patient_reads_southern_female_chart() {
    let result = hearts::assess(&reference_patient()).unwrap();
    assert_eq!(result.score, 1);
    assert_eq!(result.risk_level, HeartsRiskLevel::Low);
    assert_eq!(result.color(), RiskColor::Green500);
    assert_eq!(result.basis, HeartsBasis::Chart(Region::Southern));
}

#[test]
fn coronary_disease_overrides_everything() {
    let answers = PatientAnswers {
        coronary_disease: Some(YesNo::Yes),
        // None of these are consulted once the override applies.
        country: Some("BR".to_string()),
        age: Some(90),
        diabetes: Some(YesNo::Yes),
        sex: None,
        ..reference_patient()
    };
    let result = hearts::assess(&answers).unwrap();
    assert_eq!(result.score, 25);
    assert_eq!(result.risk_level, HeartsRiskLevel::VeryHigh);
    assert_eq!(result.color(), RiskColor::Red600);
    assert_eq!(result.basis, HeartsBasis::EstablishedDisease);
}

#[test]
fn cerebrovascular_and_peripheral_disease_override() {
    for answers in [
        PatientAnswers {
            cerebrovascular_disease: Some(YesNo::Yes),
            ..reference_patient()
        },
        PatientAnswers {
            peripheral_vascular_disease: Some(YesNo::Yes),
            ..reference_patient()
        },
    ] {
        let result = hearts::assess(&answers).unwrap();
        assert_eq!(result.score, 25);
        assert_eq!(result.risk_level.label(), "Muy alto");
    }
}

#[test]
fn renal_disease_or_diabetes_is_high() {
    for answers in [
        PatientAnswers {
            renal_disease: Some(YesNo::Yes),
            ..reference_patient()
        },
        PatientAnswers {
            diabetes: Some(YesNo::Yes),
            ..reference_patient()
        },
    ] {
        let result = hearts::assess(&answers).unwrap();
        assert_eq!(result.score, 15);
        assert_eq!(result.risk_level, HeartsRiskLevel::High);
        assert_eq!(result.color(), RiskColor::Orange500);
        assert_eq!(result.basis, HeartsBasis::HighRiskCondition);
    }
}

#[test]
fn vascular_override_wins_over_diabetes() {
    let answers = PatientAnswers {
        peripheral_vascular_disease: Some(YesNo::Yes),
        diabetes: Some(YesNo::Yes),
        ..reference_patient()
    };
    assert_eq!(hearts::assess(&answers).unwrap().score, 25);
}

#[test]
fn age_75_and_over_hits_ceiling() {
    for age in [75, 76, 95] {
        let answers = PatientAnswers {
            age: Some(age),
            systolic_bp: None,
            total_cholesterol: None,
            ..reference_patient()
        };
        let result = hearts::assess(&answers).unwrap();
        assert_eq!(result.score, 30);
        assert_eq!(result.risk_level, HeartsRiskLevel::Critical);
        assert_eq!(result.color(), RiskColor::Red900);
        assert_eq!(result.basis, HeartsBasis::AgeCeiling);
    }
}

#[test]
fn age_74_still_reads_chart() {
    let answers = PatientAnswers {
        age: Some(74),
        ..reference_patient()
    };
    let result = hearts::assess(&answers).unwrap();
    assert_eq!(result.basis, HeartsBasis::Chart(Region::Southern));
}

#[test]
fn age_below_chart_is_lookup_error() {
    let answers = PatientAnswers {
        age: Some(35),
        ..reference_patient()
    };
    assert!(matches!(
        hearts::assess(&answers),
        Err(ScoreError::LookupOutOfRange { band: "age", .. })
    ));
}

#[test]
fn unsupported_country_fails() {
    let answers = PatientAnswers {
        country: Some("BR".to_string()),
        ..reference_patient()
    };
    match hearts::assess(&answers) {
        Err(ScoreError::UnsupportedCountry(code)) => assert_eq!(code, "BR"),
        other => panic!("expected UnsupportedCountry, got {other:?}"),
    }
}

#[test]
fn missing_country_is_invalid_input() {
    let answers = PatientAnswers {
        country: Some("  ".to_string()),
        ..reference_patient()
    };
    assert!(matches!(
        hearts::assess(&answers),
        Err(ScoreError::InvalidInput(_))
    ));
}

#[test]
fn southern_male_smoker_is_high() {
    let answers = PatientAnswers {
        age: Some(57),
        sex: Some(Sex::Male),
        smoker: Some(YesNo::Yes),
        systolic_bp: Some(145),
        total_cholesterol: Some(210),
        ..reference_patient()
    };
    let result = hearts::assess(&answers).unwrap();
    assert_eq!(result.score, 16);
    assert_eq!(result.risk_level, HeartsRiskLevel::High);
}

#[test]
fn andean_and_central_regions() {
    let peru = PatientAnswers {
        age: Some(62),
        sex: Some(Sex::Male),
        systolic_bp: Some(150),
        total_cholesterol: Some(220),
        country: Some("PE".to_string()),
        ..reference_patient()
    };
    let result = hearts::assess(&peru).unwrap();
    assert_eq!(result.basis, HeartsBasis::Chart(Region::Andean));
    assert_eq!(result.score, 10);
    assert_eq!(result.risk_level, HeartsRiskLevel::High);

    let mexico = PatientAnswers {
        age: Some(52),
        systolic_bp: Some(125),
        total_cholesterol: Some(200),
        country: Some("MX".to_string()),
        ..reference_patient()
    };
    let result = hearts::assess(&mexico).unwrap();
    assert_eq!(result.basis, HeartsBasis::Chart(Region::Central));
    assert_eq!(result.score, 2);
}

#[test]
fn cholesterol_just_under_5_mmol_is_classified() {
    // 192 mg/dL is 4.97 mmol/L.
    let answers = PatientAnswers {
        total_cholesterol: Some(192),
        ..reference_patient()
    };
    assert!(hearts::assess(&answers).is_ok());
}

#[test]
fn identical_input_gives_identical_output() {
    let answers = PatientAnswers {
        age: Some(66),
        sex: Some(Sex::Male),
        smoker: Some(YesNo::Yes),
        systolic_bp: Some(172),
        total_cholesterol: Some(260),
        country: Some("CO".to_string()),
        ..reference_patient()
    };
    let first = hearts::assess(&answers).unwrap();
    assert_eq!(hearts::assess(&answers).unwrap(), first);
}

#[test]
fn risk_level_thresholds() {
    assert_eq!(HeartsRiskLevel::from_percentage(4), HeartsRiskLevel::Low);
    assert_eq!(HeartsRiskLevel::from_percentage(5), HeartsRiskLevel::Moderate);
    assert_eq!(HeartsRiskLevel::from_percentage(9), HeartsRiskLevel::Moderate);
    assert_eq!(HeartsRiskLevel::from_percentage(10), HeartsRiskLevel::High);
    assert_eq!(HeartsRiskLevel::from_percentage(19), HeartsRiskLevel::High);
    assert_eq!(HeartsRiskLevel::from_percentage(20), HeartsRiskLevel::VeryHigh);
    assert_eq!(HeartsRiskLevel::from_percentage(29), HeartsRiskLevel::VeryHigh);
    assert_eq!(HeartsRiskLevel::from_percentage(30), HeartsRiskLevel::Critical);
    assert_eq!(HeartsRiskLevel::Moderate.color(), RiskColor::Yellow500);
}
