use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::{
    error::{DomainError, DomainResult},
    value_objects::Subject,
};

/// Terminal result of [`validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationOutcome {
    SystemDown,
    InvalidSubject,
    InvalidCredential,
    Valid,
}

impl ValidationOutcome {
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SystemDown => "system-down",
            Self::InvalidSubject => "invalid-subject",
            Self::InvalidCredential => "invalid-credential",
            Self::Valid => "valid",
        }
    }

    /// Human-readable message for the outcome.
    pub const fn message(self) -> &'static str {
        match self {
            Self::SystemDown => "System is down",
            Self::InvalidSubject => "Invalid name",
            Self::InvalidCredential => "Invalid credential",
            Self::Valid => "Validation successful",
        }
    }

    /// Map the outcome into the error taxonomy.
    ///
    /// `Valid` becomes `Ok(())`; every other outcome becomes the error a
    /// caller would report for it.
    pub fn into_result(self) -> DomainResult<()> {
        match self {
            Self::SystemDown => Err(DomainError::SystemUnavailable),
            Self::InvalidSubject => Err(DomainError::invalid_argument(
                "subject",
                "<absent or unnamed>",
                "subject must be present and have a non-empty name",
            )),
            Self::InvalidCredential => Err(DomainError::invalid_argument(
                "credential",
                "<redacted>",
                "does not match the stored credential",
            )),
            Self::Valid => Ok(()),
        }
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Decide whether `subject` may proceed with `supplied_credential`.
///
/// Checks run in a fixed order and the first failing one decides:
///
/// 1. the system must be up
/// 2. the subject must be present with a non-empty name
/// 3. the stored credential must equal the supplied one
pub fn validate(
    system_up: bool,
    subject: Option<&Subject>,
    supplied_credential: i32,
) -> ValidationOutcome {
    if !system_up {
        return ValidationOutcome::SystemDown;
    }

    let Some(subject) = subject.filter(|s| s.has_name()) else {
        return ValidationOutcome::InvalidSubject;
    };

    if subject.credential() != supplied_credential {
        return ValidationOutcome::InvalidCredential;
    }

    ValidationOutcome::Valid
}
