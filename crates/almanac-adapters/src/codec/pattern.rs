//! strftime-pattern codec backed by `chrono`.

use almanac_core::{
    application::{ApplicationError, ports::DateCodec},
    domain::CalendarDate,
    error::AlmanacResult,
};
use chrono::{
    NaiveDate,
    format::{Item, StrftimeItems},
};
use tracing::{debug, instrument};

use crate::convert::{from_naive_date, to_naive_date};

/// Codec reading and writing dates with a strftime pattern such as `%d/%m/%Y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternCodec {
    pattern: String,
}

impl PatternCodec {
    /// Pattern used by [`PatternCodec::day_month_year`].
    pub const DAY_MONTH_YEAR: &'static str = "%d/%m/%Y";
    /// Pattern used by [`PatternCodec::iso`].
    pub const ISO: &'static str = "%Y-%m-%d";

    /// Create a codec for `pattern`.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Codec` if the pattern has an unknown
    /// specifier or names no year, month and day.
    pub fn new(pattern: impl Into<String>) -> AlmanacResult<Self> {
        let pattern = pattern.into();
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(pattern_error(&pattern, "unknown format specifier"));
        }
        // A pattern that formats a fixed day must also parse it back.
        let probe = NaiveDate::from_ymd_opt(2001, 12, 31)
            .ok_or_else(|| pattern_error(&pattern, "probe date unavailable"))?;
        let text = probe.format(&pattern).to_string();
        if NaiveDate::parse_from_str(&text, &pattern).ok() != Some(probe) {
            return Err(pattern_error(
                &pattern,
                "pattern must contain a year, a month and a day",
            ));
        }
        Ok(Self { pattern })
    }

    /// `dd/mm/yyyy`, e.g. `12/01/2025`.
    pub fn day_month_year() -> Self {
        Self {
            pattern: Self::DAY_MONTH_YEAR.to_string(),
        }
    }

    /// ISO 8601 calendar date, e.g. `2025-01-12`.
    pub fn iso() -> Self {
        Self {
            pattern: Self::ISO.to_string(),
        }
    }

    /// The strftime pattern in use.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Default for PatternCodec {
    fn default() -> Self {
        Self::day_month_year()
    }
}

impl DateCodec for PatternCodec {
    #[instrument(skip(self), fields(pattern = %self.pattern))]
    fn parse(&self, text: &str) -> AlmanacResult<CalendarDate> {
        let naive = NaiveDate::parse_from_str(text.trim(), &self.pattern).map_err(|e| {
            debug!(error = %e, "Date text rejected");
            ApplicationError::Codec {
                input: text.to_string(),
                reason: e.to_string(),
            }
        })?;
        from_naive_date(naive).map_err(|e| {
            ApplicationError::Codec {
                input: text.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn format(&self, date: CalendarDate) -> String {
        match to_naive_date(date) {
            Ok(naive) => naive.format(&self.pattern).to_string(),
            Err(_) => date.to_string(),
        }
    }
}

fn pattern_error(pattern: &str, reason: &str) -> almanac_core::error::AlmanacError {
    ApplicationError::Codec {
        input: pattern.to_string(),
        reason: format!("invalid date pattern: {reason}"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_core::error::AlmanacError;

    fn date(y: i32, m: u8, d: u8) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn day_month_year_parses_and_formats() {
        let codec = PatternCodec::day_month_year();
        assert_eq!(codec.parse("12/01/2025").unwrap(), date(2025, 1, 12));
        assert_eq!(codec.format(date(2025, 1, 17)), "17/01/2025");
    }

    #[test]
    fn iso_parses_and_formats() {
        let codec = PatternCodec::iso();
        assert_eq!(codec.parse("2024-02-29").unwrap(), date(2024, 2, 29));
        assert_eq!(codec.format(date(2000, 3, 1)), "2000-03-01");
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let codec = PatternCodec::day_month_year();
        assert_eq!(codec.parse("  01/03/2025\n").unwrap(), date(2025, 3, 1));
    }

    #[test]
    fn nonexistent_day_is_a_codec_error() {
        let err = PatternCodec::day_month_year()
            .parse("31/02/2025")
            .unwrap_err();
        match err {
            AlmanacError::Application(ApplicationError::Codec { input, .. }) => {
                assert_eq!(input, "31/02/2025");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn garbage_is_a_codec_error() {
        assert!(matches!(
            PatternCodec::iso().parse("yesterday"),
            Err(AlmanacError::Application(ApplicationError::Codec { .. }))
        ));
    }

    #[test]
    fn year_beyond_range_is_a_codec_error() {
        assert!(matches!(
            PatternCodec::iso().parse("12000-01-01"),
            Err(AlmanacError::Application(ApplicationError::Codec { .. }))
        ));
    }

    #[test]
    fn custom_pattern_is_accepted() {
        let codec = PatternCodec::new("%Y/%m/%d").unwrap();
        assert_eq!(codec.pattern(), "%Y/%m/%d");
        assert_eq!(codec.format(date(2025, 1, 5)), "2025/01/05");
    }

    #[test]
    fn unknown_specifier_is_rejected() {
        assert!(PatternCodec::new("%d/%m/%").is_err());
    }

    #[test]
    fn pattern_without_day_is_rejected() {
        assert!(PatternCodec::new("%m/%Y").is_err());
    }

    #[test]
    fn presets_pass_validation() {
        assert_eq!(
            PatternCodec::new(PatternCodec::DAY_MONTH_YEAR).unwrap(),
            PatternCodec::day_month_year()
        );
        assert_eq!(
            PatternCodec::new(PatternCodec::ISO).unwrap(),
            PatternCodec::iso()
        );
    }
}
