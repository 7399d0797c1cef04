//! Application layer errors.
//!
//! These errors represent failures at the ports, not calendar or numeric
//! rules. Those are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while talking to the outside world.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Date text could not be parsed (or described no real day).
    #[error("cannot read date '{input}': {reason}")]
    Codec { input: String, reason: String },

    /// The clock could not produce a usable date.
    #[error("clock unavailable: {reason}")]
    ClockUnavailable { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Codec { input, .. } => vec![
                format!("Could not read '{}' as a date", input),
                "Check the configured date format (dates.format)".into(),
                "Default format is dd/mm/yyyy, e.g. 12/01/2025".into(),
            ],
            Self::ClockUnavailable { .. } => vec![
                "The system date could not be read".into(),
                "Pass an explicit date with --today".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Codec { .. } => ErrorCategory::Validation,
            Self::ClockUnavailable { .. } => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codec_error_message() {
        let err = ApplicationError::Codec {
            input: "31/02/2025".into(),
            reason: "no such day".into(),
        };
        assert_eq!(err.to_string(), "cannot read date '31/02/2025': no such day");
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn clock_error_suggests_explicit_date() {
        let err = ApplicationError::ClockUnavailable {
            reason: "year out of range".into(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("--today")));
        assert_eq!(err.category(), ErrorCategory::Internal);
    }
}
