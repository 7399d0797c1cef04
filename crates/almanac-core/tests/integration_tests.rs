//! Integration tests for almanac-core.
//!
//! The calendar arithmetic is checked against `chrono`, and the services are
//! driven through hand-written port implementations.

use std::sync::Mutex;

use almanac_core::{
    application::ApplicationError,
    domain::{DomainError, days_in_month, is_leap_year},
    prelude::*,
};
use chrono::{Datelike, NaiveDate};

fn naive(date: CalendarDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month().into(), date.day().into()).unwrap()
}

fn from_naive(naive: NaiveDate) -> CalendarDate {
    CalendarDate::new(naive.year(), naive.month() as u8, naive.day() as u8).unwrap()
}

fn sample_dates() -> impl Iterator<Item = CalendarDate> {
    (-1_000_000_i64..1_000_000)
        .step_by(7919)
        .map(|days| CalendarDate::from_epoch_days(days).unwrap())
}

// ── chrono cross-checks ───────────────────────────────────────────────────────

#[test]
fn day_addition_agrees_with_chrono() {
    for date in sample_dates() {
        for days in [-400_i32, -31, -1, 1, 28, 365, 1461] {
            let ours = calendar_math::add(date, DateOffset::days(days)).unwrap();
            let theirs = if days >= 0 {
                naive(date).checked_add_days(chrono::Days::new(days.unsigned_abs().into()))
            } else {
                naive(date).checked_sub_days(chrono::Days::new(days.unsigned_abs().into()))
            }
            .unwrap();
            assert_eq!(ours, from_naive(theirs), "{date} {days:+} days");
        }
    }
}

#[test]
fn month_addition_clamps_like_chrono() {
    let month_ends = (1..=12).flat_map(|m| {
        [2023, 2024, 1900, 2000]
            .into_iter()
            .map(move |y| CalendarDate::new(y, m, days_in_month(y, m)).unwrap())
    });

    for date in sample_dates().chain(month_ends) {
        for months in [-25_i32, -12, -1, 1, 11, 13, 48] {
            let ours = calendar_math::add(date, DateOffset::months(months)).unwrap();
            let theirs = if months >= 0 {
                naive(date).checked_add_months(chrono::Months::new(months.unsigned_abs()))
            } else {
                naive(date).checked_sub_months(chrono::Months::new(months.unsigned_abs()))
            }
            .unwrap();
            assert_eq!(ours, from_naive(theirs), "{date} {months:+} months");
        }
    }
}

#[test]
fn leap_rules_agree_with_chrono() {
    for year in -400..=2400 {
        assert_eq!(
            is_leap_year(year),
            NaiveDate::from_ymd_opt(year, 2, 29).is_some(),
            "{year}"
        );
    }
}

// ── services through hand-written ports ───────────────────────────────────────

struct StubClock(CalendarDate);

impl Clock for StubClock {
    fn today(&self) -> AlmanacResult<CalendarDate> {
        Ok(self.0)
    }
}

/// `dd/mm/yyyy` codec that records every input it was asked to parse.
#[derive(Default)]
struct RecordingCodec {
    seen: Mutex<Vec<String>>,
}

impl DateCodec for RecordingCodec {
    fn parse(&self, text: &str) -> AlmanacResult<CalendarDate> {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(text.to_string());
        }
        let bad = || ApplicationError::Codec {
            input: text.to_string(),
            reason: "expected dd/mm/yyyy".into(),
        };
        let parts: Vec<&str> = text.split('/').collect();
        let [d, m, y] = parts.as_slice() else {
            return Err(bad().into());
        };
        let (Ok(d), Ok(m), Ok(y)) = (d.parse::<u8>(), m.parse::<u8>(), y.parse::<i32>()) else {
            return Err(bad().into());
        };
        Ok(CalendarDate::new(y, m, d)?)
    }

    fn format(&self, date: CalendarDate) -> String {
        format!("{:02}/{:02}/{:04}", date.day(), date.month(), date.year())
    }
}

fn text_service(today: CalendarDate) -> TextDateService {
    TextDateService::new(
        Box::new(RecordingCodec::default()),
        CalendarService::new(Box::new(StubClock(today))),
    )
}

#[test]
fn text_round_trip_of_the_classroom_example() {
    let service = text_service(CalendarDate::UNIX_EPOCH);
    assert_eq!(
        service
            .shift_text("12/01/2025", DateOffset::new(0, 0, 5))
            .unwrap(),
        "17/01/2025"
    );
}

#[test]
fn unreal_day_in_text_is_a_domain_error() {
    let service = text_service(CalendarDate::UNIX_EPOCH);
    let err = service
        .shift_text("30/02/2025", DateOffset::days(1))
        .unwrap_err();
    assert!(matches!(
        err.as_domain(),
        Some(DomainError::InvalidDate { month: 2, day: 30, .. })
    ));
}

#[test]
fn expiry_text_checks() {
    let today = CalendarDate::new(2025, 3, 2).unwrap();
    let service = text_service(today);
    assert!(service.is_expired_text(Some("01/03/2025")).unwrap());
    assert!(!service.is_expired_text(Some("02/03/2025")).unwrap());
    assert!(service.is_expired_text(None).unwrap());
    assert!(service.is_expired_text(Some("soon")).is_err());
}

// ── serde ─────────────────────────────────────────────────────────────────────

#[test]
fn dates_serialize_as_parts_and_reject_impossible_days() {
    let date = CalendarDate::new(2024, 2, 29).unwrap();
    let json = serde_json::to_string(&date).unwrap();
    assert_eq!(json, r#"{"year":2024,"month":2,"day":29}"#);
    assert_eq!(serde_json::from_str::<CalendarDate>(&json).unwrap(), date);

    assert!(serde_json::from_str::<CalendarDate>(r#"{"year":2023,"month":2,"day":29}"#).is_err());
}

#[test]
fn offsets_fill_missing_fields_with_zero() {
    let offset: DateOffset = serde_json::from_str(r#"{"days":5}"#).unwrap();
    assert_eq!(offset, DateOffset::days(5));
}

#[test]
fn validation_outcomes_use_kebab_case() {
    assert_eq!(
        serde_json::to_string(&ValidationOutcome::InvalidCredential).unwrap(),
        r#""invalid-credential""#
    );
}
