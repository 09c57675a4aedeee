use crate::validation::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("draft failed validation: {0}")]
    Validation(ValidationErrors),
    #[error("'{value}' is not an allowed option for {field}")]
    UnknownOption { field: &'static str, value: String },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to serialise submission payload: {0}")]
    PayloadSerialization(serde_json::Error),
    #[error("submission could not be delivered: {0}")]
    Delivery(String),
}

pub type FormResult<T> = std::result::Result<T, FormError>;
