// ============================================================================
// domain/error.rs - CLOSED ERROR TAXONOMY
// ============================================================================

use thiserror::Error;

use crate::domain::calendar::padded_year;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (callers may keep them around for reporting)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Precondition violations (400-level equivalent)
    // ========================================================================
    #[error("invalid {field} '{value}': {reason}")]
    InvalidArgument {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("invalid date {}-{month:02}-{day:02}: {reason}", padded_year(*.year))]
    InvalidDate {
        year: i32,
        month: u8,
        day: u8,
        reason: String,
    },

    // ========================================================================
    // Computation failures
    // ========================================================================
    #[error("arithmetic failure in {operation}")]
    ArithmeticFailure { operation: &'static str },

    // ========================================================================
    // Upstream preconditions
    // ========================================================================
    #[error("system is unavailable")]
    SystemUnavailable,
}

impl DomainError {
    /// Shorthand for [`DomainError::InvalidArgument`].
    pub fn invalid_argument(
        field: &'static str,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            field,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// The offending field, if this error names one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidArgument { field, reason, .. } => match *field {
                "rate" => vec![
                    format!("Rate rejected: {}", reason),
                    "Rates are percentages between 0 and 100".into(),
                ],
                "total" => vec![
                    format!("Total rejected: {}", reason),
                    "Totals must be finite and not negative".into(),
                ],
                "subject" => vec!["Provide a subject with a non-empty name".into()],
                "credential" => vec!["Check the supplied credential and try again".into()],
                _ => vec![format!("Check the value given for '{}'", field)],
            },
            Self::InvalidDate { reason, .. } => vec![
                format!("Date rejected: {}", reason),
                "Months run 1-12; days must exist in the month".into(),
            ],
            Self::ArithmeticFailure { operation } => vec![
                format!("The {} produced a result outside the supported range", operation),
                "Try a smaller offset or amount".into(),
            ],
            Self::SystemUnavailable => vec![
                "The system is marked as down".into(),
                "Try again once it is back up".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidArgument { .. } | Self::InvalidDate { .. } => ErrorCategory::Validation,
            Self::ArithmeticFailure { .. } => ErrorCategory::Arithmetic,
            Self::SystemUnavailable => ErrorCategory::Unavailable,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Arithmetic,
    Unavailable,
}

/// Convenient result alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
