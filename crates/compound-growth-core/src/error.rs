use thiserror::Error;

#[derive(Debug, Error)]
pub enum GrowthError {
    #[error("Invalid argument: {field}: {reason}")]
    InvalidArgument { field: String, reason: String },

    #[error("Numeric overflow in {context}")]
    Overflow { context: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl GrowthError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        GrowthError::InvalidArgument {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for GrowthError {
    fn from(e: serde_json::Error) -> Self {
        GrowthError::SerializationError(e.to_string())
    }
}
