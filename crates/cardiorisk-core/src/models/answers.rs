use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::codes::{AlcoholUse, Sex, YesNo};
use crate::error::InputError;
use crate::measure::{self, deserialize_optional_integer};

/// One patient's answers from the medical form.
///
/// Every field is optional on the wire. Calculators pull the fields they
/// need through the accessors below, which fail with the wire name of the
/// first missing field, so a record can be partially filled as long as the
/// requested scores do not depend on the gaps. Unknown form fields are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientAnswers {
    #[serde(rename = "edad", default, deserialize_with = "deserialize_optional_integer")]
    #[ts(type = "number | string | null")]
    pub age: Option<i32>,
    #[serde(rename = "genero")]
    pub sex: Option<Sex>,
    #[serde(
        rename = "presionSistolica",
        default,
        deserialize_with = "deserialize_optional_integer"
    )]
    #[ts(type = "number | string | null")]
    pub systolic_bp: Option<i32>,
    #[serde(
        rename = "colesterolTotal",
        default,
        deserialize_with = "deserialize_optional_integer"
    )]
    #[ts(type = "number | string | null")]
    pub total_cholesterol: Option<i32>,
    #[serde(rename = "pais")]
    pub country: Option<String>,

    #[serde(rename = "hipertensionArterial")]
    pub hypertension: Option<YesNo>,
    #[serde(rename = "tabaquismo")]
    pub smoker: Option<YesNo>,
    /// BMI of 30 kg/m² or more.
    #[serde(rename = "imc")]
    pub obesity: Option<YesNo>,
    #[serde(rename = "apneaSueno")]
    pub sleep_apnea: Option<YesNo>,
    #[serde(rename = "usoAlcohol")]
    pub alcohol_use: Option<AlcoholUse>,
    #[serde(rename = "insuficienciaCardiaca")]
    pub heart_failure: Option<YesNo>,
    #[serde(rename = "enfermedadCoronaria")]
    pub coronary_disease: Option<YesNo>,
    #[serde(rename = "enfermedadRenal")]
    pub renal_disease: Option<YesNo>,
    #[serde(rename = "enfermedadCerebrovascular")]
    pub cerebrovascular_disease: Option<YesNo>,
    #[serde(rename = "enfermedadVascular")]
    pub peripheral_vascular_disease: Option<YesNo>,
    #[serde(rename = "diabetesMellitus")]
    pub diabetes: Option<YesNo>,

    // FRAIL questionnaire
    #[serde(rename = "estaFatigado")]
    pub fatigue: Option<YesNo>,
    #[serde(rename = "subeEscaleras")]
    pub climbs_stairs: Option<YesNo>,
    #[serde(rename = "caminaManzana")]
    pub walks_block: Option<YesNo>,
    #[serde(rename = "masCincoEnfermedades")]
    pub many_illnesses: Option<YesNo>,
    #[serde(rename = "perdidaPeso")]
    pub weight_loss: Option<YesNo>,
}

fn require<T: Copy>(value: Option<T>, field: &'static str) -> Result<T, InputError> {
    value.ok_or(InputError::MissingField(field))
}

impl PatientAnswers {
    pub fn age(&self) -> Result<i32, InputError> {
        measure::AGE_YEARS.check("edad", require(self.age, "edad")?)
    }

    pub fn sex(&self) -> Result<Sex, InputError> {
        require(self.sex, "genero")
    }

    pub fn systolic_bp(&self) -> Result<i32, InputError> {
        measure::SYSTOLIC_MMHG.check("presionSistolica", require(self.systolic_bp, "presionSistolica")?)
    }

    pub fn total_cholesterol(&self) -> Result<i32, InputError> {
        measure::CHOLESTEROL_MG_DL.check(
            "colesterolTotal",
            require(self.total_cholesterol, "colesterolTotal")?,
        )
    }

    /// The raw country code. Whether it is supported is decided by the
    /// calculator that needs it.
    pub fn country_code(&self) -> Result<&str, InputError> {
        self.country
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .ok_or(InputError::MissingField("pais"))
    }

    pub fn hypertension(&self) -> Result<YesNo, InputError> {
        require(self.hypertension, "hipertensionArterial")
    }

    pub fn smoker(&self) -> Result<YesNo, InputError> {
        require(self.smoker, "tabaquismo")
    }

    pub fn obesity(&self) -> Result<YesNo, InputError> {
        require(self.obesity, "imc")
    }

    pub fn sleep_apnea(&self) -> Result<YesNo, InputError> {
        require(self.sleep_apnea, "apneaSueno")
    }

    pub fn alcohol_use(&self) -> Result<AlcoholUse, InputError> {
        require(self.alcohol_use, "usoAlcohol")
    }

    pub fn heart_failure(&self) -> Result<YesNo, InputError> {
        require(self.heart_failure, "insuficienciaCardiaca")
    }

    pub fn coronary_disease(&self) -> Result<YesNo, InputError> {
        require(self.coronary_disease, "enfermedadCoronaria")
    }

    pub fn renal_disease(&self) -> Result<YesNo, InputError> {
        require(self.renal_disease, "enfermedadRenal")
    }

    pub fn cerebrovascular_disease(&self) -> Result<YesNo, InputError> {
        require(self.cerebrovascular_disease, "enfermedadCerebrovascular")
    }

    pub fn peripheral_vascular_disease(&self) -> Result<YesNo, InputError> {
        require(self.peripheral_vascular_disease, "enfermedadVascular")
    }

    pub fn diabetes(&self) -> Result<YesNo, InputError> {
        require(self.diabetes, "diabetesMellitus")
    }

    pub fn fatigue(&self) -> Result<YesNo, InputError> {
        require(self.fatigue, "estaFatigado")
    }

    pub fn climbs_stairs(&self) -> Result<YesNo, InputError> {
        require(self.climbs_stairs, "subeEscaleras")
    }

    pub fn walks_block(&self) -> Result<YesNo, InputError> {
        require(self.walks_block, "caminaManzana")
    }

    pub fn many_illnesses(&self) -> Result<YesNo, InputError> {
        require(self.many_illnesses, "masCincoEnfermedades")
    }

    pub fn weight_loss(&self) -> Result<YesNo, InputError> {
        require(self.weight_loss, "perdidaPeso")
    }
}
