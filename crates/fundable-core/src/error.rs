use thiserror::Error;

#[derive(Debug, Error)]
pub enum FundableError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Missing required year: no income recorded for {year}")]
    MissingYear { year: i32 },

    #[error("Duplicate year: more than one income record for {year}")]
    DuplicateYear { year: i32 },

    #[error("Invalid period frame: {0}")]
    InvalidFrame(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for FundableError {
    fn from(e: serde_json::Error) -> Self {
        FundableError::SerializationError(e.to_string())
    }
}
