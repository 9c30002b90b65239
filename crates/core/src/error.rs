//! Error types for sensor registration

use spa_registrar_types::{Id, InvalidId};
use thiserror::Error;

/// Errors raised while validating and wiring sensor configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistrarError {
    /// A field is missing, unknown, or holds a value the schema rejects
    #[error("invalid value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    /// A referenced id was never declared
    #[error("couldn't find id '{id}'")]
    ReferenceResolution { id: Id },

    /// A referenced id exists but names the wrong kind of object
    #[error("id '{id}' is not a {expected}")]
    TypeMismatch { id: Id, expected: &'static str },

    #[error("id '{id}' is declared more than once")]
    DuplicateId { id: Id },

    #[error(transparent)]
    InvalidId(#[from] InvalidId),
}

impl RegistrarError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        RegistrarError::ConfigValidation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Field the error is about, when there is one
    pub fn field(&self) -> Option<&str> {
        match self {
            RegistrarError::ConfigValidation { field, .. } => Some(field),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistrarError>;
