use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::InputError;

/// Inclusive plausibility range for an integer clinical measurement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MeasureRange {
    pub min: i32,
    pub max: i32,
}

impl MeasureRange {
    pub fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn check(&self, field: &'static str, value: i32) -> Result<i32, InputError> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(InputError::OutOfRange {
                field,
                value: i64::from(value),
                min: i64::from(self.min),
                max: i64::from(self.max),
            })
        }
    }
}

/// Age in whole years.
pub const AGE_YEARS: MeasureRange = MeasureRange { min: 0, max: 120 };

/// Systolic blood pressure in mmHg.
pub const SYSTOLIC_MMHG: MeasureRange = MeasureRange { min: 50, max: 300 };

/// Diastolic blood pressure in mmHg.
pub const DIASTOLIC_MMHG: MeasureRange = MeasureRange { min: 20, max: 200 };

/// Total cholesterol in mg/dL.
pub const CHOLESTEROL_MG_DL: MeasureRange = MeasureRange { min: 50, max: 1000 };

/// Conversion factor from mg/dL to mmol/L for total cholesterol.
pub const MG_DL_TO_MMOL_L: f64 = 0.0259;

#[derive(Deserialize)]
#[serde(untagged)]
enum IntegerOrText {
    Integer(i32),
    Text(String),
}

/// Accepts a JSON integer or a string containing only an integer.
///
/// Form inputs arrive as text, so `"42"` is accepted, but `"42a"`, `""`,
/// `4.5` and booleans are rejected instead of being coerced.
pub fn deserialize_optional_integer<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IntegerOrText>::deserialize(deserializer) {
        Ok(None) => Ok(None),
        Ok(Some(IntegerOrText::Integer(value))) => Ok(Some(value)),
        Ok(Some(IntegerOrText::Text(text))) => text
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("expected an integer, got \"{text}\""))),
        Err(_) => Err(serde::de::Error::custom("expected an integer or integer string")),
    }
}

/// Required variant of [`deserialize_optional_integer`].
pub fn deserialize_integer<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_optional_integer(deserializer)?
        .ok_or_else(|| serde::de::Error::custom("expected an integer, got null"))
}
