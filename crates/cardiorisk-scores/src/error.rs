use cardiorisk_core::error::InputError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("unsupported country: {0}")]
    UnsupportedCountry(String),

    #[error("no {band} band matches value {value}")]
    LookupOutOfRange { band: &'static str, value: f64 },

    #[error("unknown calculator: {0}")]
    UnknownCalculator(String),
}
