//! Unified error handling for Almanac Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Almanac Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AlmanacError {
    /// Errors from the domain layer (invalid input, arithmetic failure).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (codec, clock).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl AlmanacError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Arithmetic => ErrorCategory::Arithmetic,
                crate::domain::ErrorCategory::Unavailable => ErrorCategory::Unavailable,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// The domain error inside, if any.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(e) => Some(e),
            Self::Application(_) => None,
        }
    }

    /// Check if retrying the same call later could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Domain(DomainError::SystemUnavailable)
                | Self::Application(ApplicationError::ClockUnavailable { .. })
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Arithmetic,
    Unavailable,
    Internal,
}

/// Convenient result type alias.
pub type AlmanacResult<T> = Result<T, AlmanacError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_convert_and_keep_category() {
        let err: AlmanacError = DomainError::invalid_argument("rate", 101, "too big").into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.as_domain().and_then(DomainError::field), Some("rate"));
        assert_eq!(err.to_string(), "invalid rate '101': too big");
    }

    #[test]
    fn application_errors_convert() {
        let err: AlmanacError = ApplicationError::ClockUnavailable {
            reason: "x".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(err.as_domain().is_none());
    }

    #[test]
    fn retryable() {
        assert!(AlmanacError::from(DomainError::SystemUnavailable).is_retryable());
        assert!(
            !AlmanacError::from(DomainError::ArithmeticFailure { operation: "x" }).is_retryable()
        );
    }
}
