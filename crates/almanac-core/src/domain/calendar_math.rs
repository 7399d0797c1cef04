//! Calendar arithmetic over [`CalendarDate`].
//!
//! # Order of application
//!
//! [`add`] applies an offset's months first, then its weeks, then its days.
//! Each step starts from the result of the previous one, so
//! in 2025 `add(Jan 30, {months: 1, days: 1})` is `Mar 1`
//! (Jan 30 → Feb 28 → Mar 1); running the days first would give `Feb 28`.
//!
//! # Month-end clamping
//!
//! Adding months keeps the day of month when it exists in the target month
//! and otherwise clamps it to that month's last day:
//!
//! | Start      | Months | Result     |
//! |------------|--------|------------|
//! | 2025-01-31 | +1     | 2025-02-28 |
//! | 2024-01-31 | +1     | 2024-02-29 |
//! | 2025-03-31 | -1     | 2025-02-28 |
//! | 2025-05-31 | +1     | 2025-06-30 |
//!
//! `add(add(d, o), o.negate()) == d` holds only when `o` has a single
//! non-zero component and no month step clamps. The negated offset still
//! runs months first, so a mixed offset is undone by applying its days,
//! then its weeks, then its months, each negated.
//!
//! # Adding a new offset kind
//!
//! Implement [`DateShift`] for it. [`add`] only sequences shifts; it never
//! inspects what kind of shift it is running.

use crate::domain::calendar::CalendarDate;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::value_objects::DateOffset;

/// One kind of calendar movement.
pub trait DateShift {
    /// Name used when the shift leaves the supported range.
    fn operation(&self) -> &'static str;

    /// Apply this shift to `date`, returning a new date.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ArithmeticFailure`] if the result falls outside
    /// the supported year range.
    fn apply(&self, date: CalendarDate) -> DomainResult<CalendarDate>;
}

/// Move by whole calendar months, clamping the day of month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Months(pub i32);

/// Move by whole weeks; exactly seven days each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weeks(pub i32);

/// Move by days with full month and year rollover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Days(pub i64);

impl DateShift for Months {
    fn operation(&self) -> &'static str {
        "month addition"
    }

    fn apply(&self, date: CalendarDate) -> DomainResult<CalendarDate> {
        let overflow = DomainError::ArithmeticFailure {
            operation: self.operation(),
        };

        let month_index =
            i64::from(date.year()) * 12 + i64::from(date.month()) - 1 + i64::from(self.0);
        let year = month_index.div_euclid(12);
        let month = month_index.rem_euclid(12) + 1;

        let year = i32::try_from(year).map_err(|_| overflow.clone())?;
        if !(CalendarDate::MIN_YEAR..=CalendarDate::MAX_YEAR).contains(&year) {
            return Err(overflow);
        }

        // rem_euclid(12) + 1 is always 1..=12
        Ok(CalendarDate::clamped(year, month as u8, date.day()))
    }
}

impl DateShift for Weeks {
    fn operation(&self) -> &'static str {
        "week addition"
    }

    fn apply(&self, date: CalendarDate) -> DomainResult<CalendarDate> {
        shift_days(date, i64::from(self.0) * 7, self.operation())
    }
}

impl DateShift for Days {
    fn operation(&self) -> &'static str {
        "day addition"
    }

    fn apply(&self, date: CalendarDate) -> DomainResult<CalendarDate> {
        shift_days(date, self.0, self.operation())
    }
}

fn shift_days(
    date: CalendarDate,
    days: i64,
    operation: &'static str,
) -> DomainResult<CalendarDate> {
    date.to_epoch_days()
        .checked_add(days)
        .and_then(|target| CalendarDate::from_epoch_days(target).ok())
        .ok_or(DomainError::ArithmeticFailure { operation })
}

impl DateOffset {
    /// The shifts this offset stands for, in application order.
    pub fn shifts(&self) -> [Box<dyn DateShift>; 3] {
        [
            Box::new(Months(self.months)),
            Box::new(Weeks(self.weeks)),
            Box::new(Days(i64::from(self.days))),
        ]
    }
}

/// Add `offset` to `date`: months, then weeks, then days.
///
/// `date` is taken by value and left untouched; the result is a new date.
///
/// # Errors
///
/// Returns [`DomainError::ArithmeticFailure`] naming the first step whose
/// result leaves the supported year range.
pub fn add(date: CalendarDate, offset: DateOffset) -> DomainResult<CalendarDate> {
    offset
        .shifts()
        .into_iter()
        .try_fold(date, |current, shift| shift.apply(current))
}

/// Whether a document with the given expiry date has expired by `today`.
///
/// A missing expiry counts as expired. A date expiring today is still valid.
pub fn is_expired(expiry: Option<CalendarDate>, today: CalendarDate) -> bool {
    match expiry {
        None => true,
        Some(expiry) => expiry < today,
    }
}
