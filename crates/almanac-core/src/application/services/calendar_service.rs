//! Calendar Service - date use cases that need to know "today".
//!
//! Wraps the pure `calendar_math` functions and supplies the current date
//! from the injected [`Clock`].

use tracing::{debug, instrument};

use crate::{
    application::ports::Clock,
    domain::{CalendarDate, DateOffset, calendar_math},
    error::AlmanacResult,
};

/// Service for date arithmetic and expiry checks.
pub struct CalendarService {
    clock: Box<dyn Clock>,
}

impl CalendarService {
    /// Create a new calendar service reading dates from `clock`.
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Today's date according to the clock.
    pub fn today(&self) -> AlmanacResult<CalendarDate> {
        self.clock.today()
    }

    /// Shift `date` by `offset` (months, then weeks, then days).
    #[instrument(skip_all, fields(date = %date, offset = %offset))]
    pub fn shift(&self, date: CalendarDate, offset: DateOffset) -> AlmanacResult<CalendarDate> {
        let shifted = calendar_math::add(date, offset)?;
        debug!(result = %shifted, "Date shifted");
        Ok(shifted)
    }

    /// Whether `expiry` has passed as of today. A missing expiry has.
    #[instrument(skip(self))]
    pub fn is_expired(&self, expiry: Option<CalendarDate>) -> AlmanacResult<bool> {
        let today = self.clock.today()?;
        let expired = calendar_math::is_expired(expiry, today);
        debug!(%today, expired, "Expiry checked");
        Ok(expired)
    }

    /// Signed number of days from today until `date`.
    pub fn days_until(&self, date: CalendarDate) -> AlmanacResult<i64> {
        Ok(self.clock.today()?.days_until(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, ports::output::MockClock};
    use crate::domain::DomainError;
    use crate::error::AlmanacError;

    fn date(y: i32, m: u8, d: u8) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    fn service_on(today: CalendarDate) -> CalendarService {
        let mut clock = MockClock::new();
        clock.expect_today().returning(move || Ok(today));
        CalendarService::new(Box::new(clock))
    }

    #[test]
    fn shift_does_not_consult_clock() {
        let mut clock = MockClock::new();
        clock.expect_today().never();
        let service = CalendarService::new(Box::new(clock));

        let shifted = service
            .shift(date(2025, 1, 12), DateOffset::days(5))
            .unwrap();
        assert_eq!(shifted, date(2025, 1, 17));
    }

    #[test]
    fn shift_surfaces_arithmetic_failure() {
        let service = service_on(date(2025, 1, 1));
        let err = service
            .shift(CalendarDate::MAX, DateOffset::days(1))
            .unwrap_err();
        assert_eq!(
            err,
            AlmanacError::Domain(DomainError::ArithmeticFailure {
                operation: "day addition"
            })
        );
    }

    #[test]
    fn expiry_uses_clock() {
        let service = service_on(date(2025, 6, 15));
        assert!(service.is_expired(Some(date(2025, 6, 14))).unwrap());
        assert!(!service.is_expired(Some(date(2025, 6, 15))).unwrap());
        assert!(service.is_expired(None).unwrap());
    }

    #[test]
    fn clock_failure_propagates() {
        let mut clock = MockClock::new();
        clock.expect_today().returning(|| {
            Err(ApplicationError::ClockUnavailable {
                reason: "no clock".into(),
            }
            .into())
        });
        let service = CalendarService::new(Box::new(clock));

        assert!(matches!(
            service.is_expired(None),
            Err(AlmanacError::Application(
                ApplicationError::ClockUnavailable { .. }
            ))
        ));
    }

    #[test]
    fn days_until_counts_from_today() {
        let service = service_on(date(2025, 12, 25));
        assert_eq!(service.days_until(date(2026, 1, 1)).unwrap(), 7);
        assert_eq!(service.days_until(date(2025, 12, 20)).unwrap(), -5);
    }
}
