use thiserror::Error;

/// A patient answer that is missing, badly typed, or outside its domain.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid code '{value}' for field {field}")]
    InvalidCode { field: &'static str, value: String },

    #[error("{field} value {value} is outside range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("malformed {field}: {message}")]
    Malformed {
        field: &'static str,
        message: String,
    },
}
