//! Domain value objects: DateOffset, PercentageRequest, Subject.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity. They
//! carry no arithmetic of their own: date arithmetic lives in
//! `calendar_math.rs`, percentage arithmetic in `calculator.rs`, and the
//! subject checks in `validation.rs`. Validation of a `PercentageRequest`
//! happens when it is used, not when it is built, so that every failure
//! surfaces through the same typed result.

use serde::{Deserialize, Serialize};
use std::fmt;

// ── DateOffset ───────────────────────────────────────────────────────────────

/// A signed amount of months, weeks and days to add to a date.
///
/// Each field is independent: positive moves forward, negative moves
/// backward, zero is a no-op. The order in which the fields are applied is
/// fixed by [`crate::domain::calendar_math::add`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DateOffset {
    pub months: i32,
    pub weeks: i32,
    pub days: i32,
}

impl DateOffset {
    pub const ZERO: Self = Self::new(0, 0, 0);

    pub const fn new(months: i32, weeks: i32, days: i32) -> Self {
        Self {
            months,
            weeks,
            days,
        }
    }

    pub const fn months(months: i32) -> Self {
        Self::new(months, 0, 0)
    }

    pub const fn weeks(weeks: i32) -> Self {
        Self::new(0, weeks, 0)
    }

    pub const fn days(days: i32) -> Self {
        Self::new(0, 0, days)
    }

    pub const fn with_months(self, months: i32) -> Self {
        Self { months, ..self }
    }

    pub const fn with_weeks(self, weeks: i32) -> Self {
        Self { weeks, ..self }
    }

    pub const fn with_days(self, days: i32) -> Self {
        Self { days, ..self }
    }

    /// The offset pointing the other way.
    ///
    /// `i32::MIN` saturates to `i32::MAX`.
    pub const fn negate(self) -> Self {
        Self {
            months: self.months.saturating_neg(),
            weeks: self.weeks.saturating_neg(),
            days: self.days.saturating_neg(),
        }
    }

    pub const fn is_zero(&self) -> bool {
        self.months == 0 && self.weeks == 0 && self.days == 0
    }
}

impl fmt::Display for DateOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:+} months, {:+} weeks, {:+} days",
            self.months, self.weeks, self.days
        )
    }
}

// ── PercentageRequest ────────────────────────────────────────────────────────

/// A total and a percentage rate to take of it.
///
/// Built per call and not stored. Checked by
/// [`crate::domain::calculator::percentage_of`] before any arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentageRequest {
    pub total: f64,
    pub rate: f64,
}

impl PercentageRequest {
    pub const fn new(total: f64, rate: f64) -> Self {
        Self { total, rate }
    }
}

// ── Subject ──────────────────────────────────────────────────────────────────

/// A named subject holding a stored credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    name: String,
    credential: i32,
}

impl Subject {
    pub fn new(name: impl Into<String>, credential: i32) -> Self {
        Self {
            name: name.into(),
            credential,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn credential(&self) -> i32 {
        self.credential
    }

    /// Whether the name carries any non-whitespace character.
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}
