//! Proleptic Gregorian date value.
//!
//! `CalendarDate` is a plain `Copy` value: every operation that "changes" a
//! date returns a new one, so no holder of a date can observe another
//! holder's arithmetic.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::domain::error::{DomainError, DomainResult};

/// Days from 0000-03-01 to 1970-01-01.
const EPOCH_SHIFT: i64 = 719_468;
/// Days in a 400-year Gregorian era.
const DAYS_PER_ERA: i64 = 146_097;

/// Whether `year` is a leap year in the proleptic Gregorian calendar.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1..=12) of `year`.
///
/// Returns 0 for a month outside 1..=12.
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// A real day in the proleptic Gregorian calendar.
///
/// Invariant: `MIN_YEAR <= year <= MAX_YEAR`, `1 <= month <= 12`,
/// `1 <= day <= days_in_month(year, month)`. Enforced at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DateParts")]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl CalendarDate {
    pub const MIN_YEAR: i32 = -9999;
    pub const MAX_YEAR: i32 = 9999;

    /// Earliest representable date, `-9999-01-01`.
    pub const MIN: Self = Self {
        year: Self::MIN_YEAR,
        month: 1,
        day: 1,
    };

    /// Latest representable date, `9999-12-31`.
    pub const MAX: Self = Self {
        year: Self::MAX_YEAR,
        month: 12,
        day: 31,
    };

    /// Unix epoch, `1970-01-01`.
    pub const UNIX_EPOCH: Self = Self {
        year: 1970,
        month: 1,
        day: 1,
    };

    /// Creates a date from year, month and day.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidDate`] if the year is outside the
    /// supported range, the month is not 1..=12, or the day does not exist
    /// in that month.
    pub fn new(year: i32, month: u8, day: u8) -> DomainResult<Self> {
        let invalid = |reason: String| DomainError::InvalidDate {
            year,
            month,
            day,
            reason,
        };

        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(invalid(format!(
                "year must be within {}..={}",
                Self::MIN_YEAR,
                Self::MAX_YEAR
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(invalid("month must be 1..=12".into()));
        }
        let max_day = days_in_month(year, month);
        if day == 0 || day > max_day {
            return Err(invalid(format!("day must be 1..={max_day}")));
        }

        Ok(Self { year, month, day })
    }

    /// Builds a date from a year and month, clamping `day` to the last day of
    /// that month.
    ///
    /// The caller guarantees that `year` and `month` are in range.
    pub(crate) fn clamped(year: i32, month: u8, day: u8) -> Self {
        debug_assert!((Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year));
        debug_assert!((1..=12).contains(&month));
        Self {
            year,
            month,
            day: day.clamp(1, days_in_month(year, month)),
        }
    }

    /// Creates a date from a count of days since 1970-01-01.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidArgument`] if the day count falls
    /// outside [`CalendarDate::MIN`]..=[`CalendarDate::MAX`].
    pub fn from_epoch_days(days: i64) -> DomainResult<Self> {
        if days < Self::MIN.to_epoch_days() || days > Self::MAX.to_epoch_days() {
            return Err(DomainError::invalid_argument(
                "epoch_days",
                days,
                "outside the supported date range",
            ));
        }

        // ref: http://howardhinnant.github.io/date_algorithms.html
        let days = days + EPOCH_SHIFT;
        let era = days.div_euclid(DAYS_PER_ERA);
        let day_of_era = days.rem_euclid(DAYS_PER_ERA);
        let year_of_era =
            (day_of_era - day_of_era / 1_460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
        let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
        let shifted_month = (5 * day_of_year + 2) / 153;
        let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
        let month = if shifted_month < 10 {
            shifted_month + 3
        } else {
            shifted_month - 9
        };
        let year = year_of_era + era * 400 + i64::from(month <= 2);

        // The range check above keeps every component inside its type.
        Ok(Self {
            year: year as i32,
            month: month as u8,
            day: day as u8,
        })
    }

    /// Number of days since 1970-01-01 (negative before it).
    pub fn to_epoch_days(self) -> i64 {
        // ref: http://howardhinnant.github.io/date_algorithms.html
        let month = i64::from(self.month);
        let year = i64::from(self.year) - i64::from(self.month <= 2);
        let era = year.div_euclid(400);
        let year_of_era = year.rem_euclid(400);
        let shifted_month = if month > 2 { month - 3 } else { month + 9 };
        let day_of_year = (153 * shifted_month + 2) / 5 + i64::from(self.day) - 1;
        let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
        era * DAYS_PER_ERA + day_of_era - EPOCH_SHIFT
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(self, other: Self) -> i64 {
        other.to_epoch_days() - self.to_epoch_days()
    }

    pub const fn year(self) -> i32 {
        self.year
    }

    /// Month, 1..=12.
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Day of month, 1..=31.
    pub const fn day(self) -> u8 {
        self.day
    }

    pub const fn is_leap_year(self) -> bool {
        is_leap_year(self.year)
    }

    /// Number of days in this date's month.
    pub const fn days_in_month(self) -> u8 {
        days_in_month(self.year, self.month)
    }
}

/// Four-digit year with a leading `-` before year 0, as in `-0044`.
pub(crate) fn padded_year(year: i32) -> String {
    if year < 0 {
        format!("-{:04}", year.unsigned_abs())
    } else {
        format!("{year:04}")
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{:02}-{:02}",
            padded_year(self.year),
            self.month,
            self.day
        )
    }
}

/// Unvalidated wire shape, checked on the way in.
#[derive(Deserialize)]
struct DateParts {
    year: i32,
    month: u8,
    day: u8,
}

impl TryFrom<DateParts> for CalendarDate {
    type Error = DomainError;

    fn try_from(parts: DateParts) -> Result<Self, Self::Error> {
        Self::new(parts.year, parts.month, parts.day)
    }
}
