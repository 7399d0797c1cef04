//! Clock that always reports the same day.

use almanac_core::{application::ports::Clock, domain::CalendarDate, error::AlmanacResult};

/// Clock pinned to a single date, for tests and reproducible runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    today: CalendarDate,
}

impl FixedClock {
    /// Create a clock that always returns `today`.
    pub fn new(today: CalendarDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> AlmanacResult<CalendarDate> {
        Ok(self.today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_returns_the_same_day() {
        let day = CalendarDate::new(2025, 1, 12).unwrap();
        let clock = FixedClock::new(day);
        assert_eq!(clock.today().unwrap(), day);
        assert_eq!(clock.today().unwrap(), day);
    }
}
