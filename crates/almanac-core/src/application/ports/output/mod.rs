//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `almanac-adapters` crate provides implementations.

use crate::domain::CalendarDate;
use crate::error::AlmanacResult;

/// Port for reading the current date.
///
/// Implemented by:
/// - `almanac_adapters::clock::SystemClock` (production)
/// - `almanac_adapters::clock::FixedClock` (testing, reproducible runs)
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// Today's date.
    fn today(&self) -> AlmanacResult<CalendarDate>;
}

/// Port for converting dates to and from text.
///
/// Implemented by:
/// - `almanac_adapters::codec::PatternCodec` (strftime-style patterns)
///
/// ## Design Notes
///
/// - The domain never sees text; every date crossing this port is already
///   a validated `CalendarDate`
/// - Parse failures are reported as `ApplicationError::Codec`
#[cfg_attr(test, mockall::automock)]
pub trait DateCodec: Send + Sync {
    /// Parse `text` into a date.
    fn parse(&self, text: &str) -> AlmanacResult<CalendarDate>;

    /// Render `date` as text.
    fn format(&self, date: CalendarDate) -> String;
}
