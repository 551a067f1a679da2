use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpecError {
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },
}

impl SpecError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        SpecError::Validation {
            field,
            reason: reason.into(),
        }
    }
}
