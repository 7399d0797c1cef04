//! Text Date Service - date use cases over text input and output.
//!
//! Parse through the [`DateCodec`], compute with the [`CalendarService`],
//! format back through the codec. Separated from `CalendarService` so the
//! arithmetic stays usable without any text format.

use tracing::{debug, instrument};

use crate::{
    application::{ports::DateCodec, services::CalendarService},
    domain::{CalendarDate, DateOffset},
    error::AlmanacResult,
};

/// Service for date operations expressed as text.
pub struct TextDateService {
    codec: Box<dyn DateCodec>,
    calendar: CalendarService,
}

impl TextDateService {
    /// Create a new text date service.
    pub fn new(codec: Box<dyn DateCodec>, calendar: CalendarService) -> Self {
        Self { codec, calendar }
    }

    /// Parse `text` with the configured codec.
    pub fn parse(&self, text: &str) -> AlmanacResult<CalendarDate> {
        self.codec.parse(text)
    }

    /// Format `date` with the configured codec.
    pub fn format(&self, date: CalendarDate) -> String {
        self.codec.format(date)
    }

    /// The underlying calendar service.
    pub fn calendar(&self) -> &CalendarService {
        &self.calendar
    }

    /// Parse `text`, shift it by `offset`, and format the result.
    #[instrument(skip(self), fields(offset = %offset))]
    pub fn shift_text(&self, text: &str, offset: DateOffset) -> AlmanacResult<String> {
        let date = self.codec.parse(text)?;
        let shifted = self.calendar.shift(date, offset)?;
        let formatted = self.codec.format(shifted);
        debug!(input = text, output = %formatted, "Shifted date text");
        Ok(formatted)
    }

    /// Whether the expiry written in `text` has passed. No text means it has.
    #[instrument(skip(self))]
    pub fn is_expired_text(&self, text: Option<&str>) -> AlmanacResult<bool> {
        let expiry = text.map(|t| self.codec.parse(t)).transpose()?;
        self.calendar.is_expired(expiry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{
        ApplicationError,
        ports::output::{MockClock, MockDateCodec},
    };
    use crate::error::AlmanacError;
    use mockall::predicate::eq;

    fn date(y: i32, m: u8, d: u8) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    fn calendar_on(today: CalendarDate) -> CalendarService {
        let mut clock = MockClock::new();
        clock.expect_today().returning(move || Ok(today));
        CalendarService::new(Box::new(clock))
    }

    #[test]
    fn shift_text_parses_computes_and_formats() {
        let mut codec = MockDateCodec::new();
        codec
            .expect_parse()
            .with(eq("12/01/2025"))
            .returning(|_| Ok(CalendarDate::new(2025, 1, 12).unwrap()));
        codec
            .expect_format()
            .with(eq(date(2025, 1, 17)))
            .returning(|_| "17/01/2025".to_string());

        let service = TextDateService::new(Box::new(codec), calendar_on(date(2025, 1, 1)));
        let out = service
            .shift_text("12/01/2025", DateOffset::days(5))
            .unwrap();
        assert_eq!(out, "17/01/2025");
    }

    #[test]
    fn parse_failure_stops_before_arithmetic() {
        let mut codec = MockDateCodec::new();
        codec.expect_parse().returning(|input| {
            Err(ApplicationError::Codec {
                input: input.to_string(),
                reason: "bad".into(),
            }
            .into())
        });
        codec.expect_format().never();

        let service = TextDateService::new(Box::new(codec), calendar_on(date(2025, 1, 1)));
        let err = service
            .shift_text("not a date", DateOffset::days(1))
            .unwrap_err();
        assert!(matches!(
            err,
            AlmanacError::Application(ApplicationError::Codec { .. })
        ));
    }

    #[test]
    fn expired_text_without_date_is_expired() {
        let mut codec = MockDateCodec::new();
        codec.expect_parse().never();
        let service = TextDateService::new(Box::new(codec), calendar_on(date(2025, 1, 1)));
        assert!(service.is_expired_text(None).unwrap());
    }

    #[test]
    fn expired_text_compares_against_clock() {
        let mut codec = MockDateCodec::new();
        codec
            .expect_parse()
            .returning(|_| Ok(CalendarDate::new(2025, 3, 1).unwrap()));
        let service = TextDateService::new(Box::new(codec), calendar_on(date(2025, 3, 2)));
        assert!(service.is_expired_text(Some("01/03/2025")).unwrap());
    }
}
