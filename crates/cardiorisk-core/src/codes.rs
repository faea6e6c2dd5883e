//! Closed code sets used by the medical form.
//!
//! The serialized spellings are the wire contract with the form UI and are
//! kept exactly as the form sends them.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Binary risk-factor answer: `"S"` (sí) or `"N"` (no).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum YesNo {
    #[serde(rename = "S")]
    Yes,
    #[serde(rename = "N")]
    No,
}

impl YesNo {
    pub fn is_yes(self) -> bool {
        matches!(self, YesNo::Yes)
    }

    /// One point for an affirmative answer, zero otherwise.
    pub fn points(self) -> i32 {
        i32::from(self.is_yes())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

/// Weekly alcohol intake as captured by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum AlcoholUse {
    /// No standard drinks.
    Ninguna,
    /// 7–14 standard drinks per week.
    Moderado,
    /// 15 or more standard drinks per week.
    Alto,
}

/// Countries the HEARTS charts are calibrated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Country {
    #[serde(rename = "AR")]
    Argentina,
    #[serde(rename = "CL")]
    Chile,
    #[serde(rename = "EC")]
    Ecuador,
    #[serde(rename = "PE")]
    Peru,
    #[serde(rename = "CO")]
    Colombia,
    #[serde(rename = "MX")]
    Mexico,
}

impl Country {
    pub const ALL: [Country; 6] = [
        Country::Argentina,
        Country::Chile,
        Country::Ecuador,
        Country::Peru,
        Country::Colombia,
        Country::Mexico,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Country::Argentina => "AR",
            Country::Chile => "CL",
            Country::Ecuador => "EC",
            Country::Peru => "PE",
            Country::Colombia => "CO",
            Country::Mexico => "MX",
        }
    }

    /// Look up a country by its ISO 3166 alpha-2 code. Case-sensitive, as
    /// the form always sends upper case.
    pub fn from_code(code: &str) -> Option<Country> {
        Country::ALL.into_iter().find(|c| c.code() == code)
    }

    pub fn region(self) -> Region {
        match self {
            Country::Argentina | Country::Chile => Region::Southern,
            Country::Ecuador | Country::Peru => Region::Andean,
            Country::Colombia | Country::Mexico => Region::Central,
        }
    }
}

/// WHO Latin American sub-regions, each with its own risk chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Region {
    Southern,
    Andean,
    Central,
}
