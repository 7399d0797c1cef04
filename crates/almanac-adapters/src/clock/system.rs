//! System clock adapter using `chrono::Local`.

use almanac_core::{
    application::{ApplicationError, ports::Clock},
    domain::CalendarDate,
    error::AlmanacResult,
};
use chrono::Local;
use tracing::{instrument, trace};

use crate::convert::from_naive_date;

/// Production clock reading the local date from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system clock adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    #[instrument(skip_all)]
    fn today(&self) -> AlmanacResult<CalendarDate> {
        let naive = Local::now().date_naive();
        trace!(%naive, "Read local date");
        from_naive_date(naive).map_err(|e| {
            ApplicationError::ClockUnavailable {
                reason: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_a_date_in_range() {
        let today = SystemClock::new().today().unwrap();
        assert!(today >= CalendarDate::UNIX_EPOCH);
        assert!(today <= CalendarDate::MAX);
    }
}
