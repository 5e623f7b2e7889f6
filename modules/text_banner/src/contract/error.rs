//! Contract error types for the text banner module
//!
//! These errors are transport-agnostic and used for inter-module communication.

/// Text banner domain errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BannerError {
    /// Store read or write failed
    #[error("Persistence error: {message}")]
    Persistence { message: String },

    /// Malformed admin submission
    #[error("Invalid value for '{field}': {message}")]
    Validation { field: String, message: String },

    /// Template rendering failed
    #[error("Render error: {message}")]
    Render { message: String },
}

impl BannerError {
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence {
            message: message.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<askama::Error> for BannerError {
    fn from(error: askama::Error) -> Self {
        Self::Render {
            message: error.to_string(),
        }
    }
}
