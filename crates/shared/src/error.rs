//! Application-wide error types.
//!
//! Domain modules define their own `thiserror` enums; at the API boundary
//! every domain error is classified into one of these envelope variants.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// The variants mirror the error taxonomy of the cash management domain:
/// validation (bad field value), state (operation illegal in the current
/// lifecycle state), configuration (missing external accounting setup) and
/// consistency (a derived aggregate diverging from its source data, treated
/// as fatal and never silently corrected).
#[derive(Debug, Error)]
pub enum AppError {
    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Operation not allowed in the record's current lifecycle state.
    #[error("State error: {0}")]
    State(String),

    /// Required external configuration is missing.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Stored data diverges from its recomputed value.
    #[error("Consistency error: {0}")]
    Consistency(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::State(_) => 422,
            Self::NotFound(_) => 404,
            Self::Configuration(_) | Self::Consistency(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::State(_) => "STATE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Consistency(_) => "CONSISTENCY_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(AppError::Validation(String::new()).status_code(), 400);
        assert_eq!(AppError::State(String::new()).status_code(), 422);
        assert_eq!(AppError::NotFound(String::new()).status_code(), 404);
        assert_eq!(AppError::Configuration(String::new()).status_code(), 500);
        assert_eq!(AppError::Consistency(String::new()).status_code(), 500);
        assert_eq!(AppError::Internal(String::new()).status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::Validation(String::new()).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(AppError::State(String::new()).error_code(), "STATE_ERROR");
        assert_eq!(
            AppError::Configuration(String::new()).error_code(),
            "CONFIGURATION_ERROR"
        );
        assert_eq!(
            AppError::Consistency(String::new()).error_code(),
            "CONSISTENCY_ERROR"
        );
        assert_eq!(AppError::NotFound(String::new()).error_code(), "NOT_FOUND");
        assert_eq!(
            AppError::Internal(String::new()).error_code(),
            "INTERNAL_ERROR"
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::Validation("msg".into()).to_string(),
            "Validation error: msg"
        );
        assert_eq!(AppError::State("msg".into()).to_string(), "State error: msg");
        assert_eq!(
            AppError::Configuration("msg".into()).to_string(),
            "Configuration error: msg"
        );
        assert_eq!(
            AppError::Consistency("msg".into()).to_string(),
            "Consistency error: msg"
        );
        assert_eq!(
            AppError::NotFound("msg".into()).to_string(),
            "Not found: msg"
        );
        assert_eq!(
            AppError::Internal("msg".into()).to_string(),
            "Internal error: msg"
        );
    }
}
