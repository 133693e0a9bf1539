use thiserror::Error;

use super::user::UniqueField;

/// Core domain errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Validation error: {}", errors.join("; "))]
    Validation { errors: Vec<String> },

    #[error("Conflict: {} is already in use", field.label())]
    Conflict { field: UniqueField },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn validation<I, S>(errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Validation {
            errors: errors.into_iter().map(Into::into).collect(),
        }
    }

    pub fn conflict(field: UniqueField) -> Self {
        Self::Conflict { field }
    }
}
