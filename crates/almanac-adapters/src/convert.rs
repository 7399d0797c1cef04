//! Conversions between `CalendarDate` and `chrono::NaiveDate`.
//!
//! Both types live in other crates, so these are free functions rather
//! than `From` impls.

use almanac_core::{
    domain::{CalendarDate, DomainError},
    error::AlmanacResult,
};
use chrono::{Datelike, NaiveDate};

/// Convert to a `NaiveDate`.
///
/// chrono covers a far wider year range than `CalendarDate`, so this only
/// fails if the two calendars ever disagree about a day.
pub fn to_naive_date(date: CalendarDate) -> AlmanacResult<NaiveDate> {
    NaiveDate::from_ymd_opt(date.year(), u32::from(date.month()), u32::from(date.day())).ok_or_else(
        || {
            DomainError::InvalidDate {
                year: date.year(),
                month: date.month(),
                day: date.day(),
                reason: "not representable as a chrono date".into(),
            }
            .into()
        },
    )
}

/// Convert from a `NaiveDate`, rejecting years outside the supported range.
pub fn from_naive_date(naive: NaiveDate) -> AlmanacResult<CalendarDate> {
    // Month and day from chrono are always 1..=12 and 1..=31.
    let month = naive.month() as u8;
    let day = naive.day() as u8;
    Ok(CalendarDate::new(naive.year(), month, day)?)
}
